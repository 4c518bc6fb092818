use crate::core::Vec2;

/// Lifecycle of the edge body
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeState {
    /// Resting, normally flush with the right edge
    Idle,
    /// Following the pointer, no physics
    Dragging,
    /// Under gravity, possibly bouncing
    Falling,
    /// Resting on the floor until double-clicked
    Landed,
}

impl EdgeState {
    /// Stable numeric code for hosts (wasm)
    pub fn code(self) -> u8 {
        match self {
            EdgeState::Idle => 0,
            EdgeState::Dragging => 1,
            EdgeState::Falling => 2,
            EdgeState::Landed => 3,
        }
    }
}

/// Pointer and menu signals fed in by the driver
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeInput {
    DragStart(Vec2),
    DragTo(Vec2),
    DragEnd,
    DoubleClick,
    /// Menu reset: re-place at the right edge from any state
    Reset,
}

/// Effects reported back to the driver
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeEffect {
    StateChanged { from: EdgeState, to: EdgeState },
    /// Body was moved by the engine (snap, reset) rather than by the pointer
    Repositioned { position: Vec2 },
    /// Floor contact that kept the body bouncing
    Bounced { speed: f64 },
    /// Body came to rest on the floor
    Landed { position: Vec2 },
}

/// Transition table. `None` means the input is ignored in `state`.
///
/// `near_right_edge` only matters for `DragEnd`: a release close to the right
/// edge snaps back to Idle, anything else starts a fall.
pub fn next_state(state: EdgeState, input: &EdgeInput, near_right_edge: bool) -> Option<EdgeState> {
    use EdgeState::*;

    match (state, input) {
        (_, EdgeInput::Reset) => Some(Idle),
        (Idle | Falling, EdgeInput::DragStart(_)) => Some(Dragging),
        (Dragging, EdgeInput::DragTo(_)) => Some(Dragging),
        (Dragging, EdgeInput::DragEnd) if near_right_edge => Some(Idle),
        (Dragging, EdgeInput::DragEnd) => Some(Falling),
        (Landed, EdgeInput::DoubleClick) => Some(Idle),
        _ => None,
    }
}
