//! Generational arena holding the swarm.
//!
//! Handles are `(index, generation)` pairs. Removing a body tombstones its slot
//! and bumps the generation, so a stale handle can never reach a newer body
//! that reused the slot. Iteration is in ascending slot order, which is also
//! the order the collision pass walks pairs in.

use super::body::Body;

/// Stable handle to a swarm body
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId {
    index: u32,
    generation: u32,
}

impl BodyId {
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Pack into one integer for hosts that cannot hold a struct (JS)
    pub fn to_bits(self) -> u64 {
        ((self.generation as u64) << 32) | self.index as u64
    }

    pub fn from_bits(bits: u64) -> Self {
        Self {
            index: bits as u32,
            generation: (bits >> 32) as u32,
        }
    }
}

struct Slot {
    generation: u32,
    body: Option<Body>,
}

/// Owns every swarm body between ticks
#[derive(Default)]
pub struct BodyArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl BodyArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body, reusing the lowest tombstoned slot first.
    pub fn insert(&mut self, body: Body) -> BodyId {
        self.live += 1;
        if let Some(pos) = self.lowest_free() {
            let index = self.free.swap_remove(pos);
            let slot = &mut self.slots[index as usize];
            slot.body = Some(body);
            return BodyId { index, generation: slot.generation };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot { generation: 0, body: Some(body) });
        BodyId { index, generation: 0 }
    }

    /// Remove a body by handle. Stale or unknown handles return `None`.
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let body = slot.body.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Some(body)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.body.as_ref()
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.body.as_mut()
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Remove all bodies. Outstanding handles all become stale.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.body.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
            }
        }
        self.live = 0;
    }

    /// Live bodies in ascending slot order
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.body.as_ref().map(|body| {
                (BodyId { index: index as u32, generation: slot.generation }, body)
            })
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyId, &mut Body)> + '_ {
        self.slots.iter_mut().enumerate().filter_map(|(index, slot)| {
            let generation = slot.generation;
            slot.body
                .as_mut()
                .map(|body| (BodyId { index: index as u32, generation }, body))
        })
    }

    /// Copy the live set into a dense working buffer (cleared first).
    pub fn gather(&self, ids: &mut Vec<BodyId>, bodies: &mut Vec<Body>) {
        ids.clear();
        bodies.clear();
        for (id, body) in self.iter() {
            ids.push(id);
            bodies.push(*body);
        }
    }

    /// Write a working buffer back. Handles removed meanwhile are skipped.
    pub fn scatter(&mut self, ids: &[BodyId], bodies: &[Body]) {
        for (id, body) in ids.iter().zip(bodies) {
            if let Some(slot) = self.get_mut(*id) {
                *slot = *body;
            }
        }
    }

    fn lowest_free(&self) -> Option<usize> {
        self.free
            .iter()
            .enumerate()
            .min_by_key(|(_, index)| **index)
            .map(|(pos, _)| pos)
    }
}
