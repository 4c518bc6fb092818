//! EdgeBody - the single draggable pet that clings to the right screen edge
//!
//! Four states: Idle, Dragging, Falling, Landed. Transitions come from the
//! pure `next_state` table; `EdgeBody::apply` carries out the positional side
//! of a transition and `EdgeBody::step` integrates the fall. Both return the
//! effects the presentation layer should react to.

mod machine;
mod placement;
mod state;

pub use machine::EdgeBody;
pub use state::{next_state, EdgeEffect, EdgeInput, EdgeState};
