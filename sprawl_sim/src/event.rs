// Narrative war events and the bounded recent-history ring.
//
// The war simulation's observable surface is a stream of timestamped
// narrative events: bases founded, bases destroyed. External layers consume
// them two ways — as the return value of each `update` call (notification
// toasts), and by sampling the bounded ring of recent entries (NPC dialogue
// referencing the current state of the war).
//
// Destruction and founding are modeled as tagged variants, not bare strings,
// so tests can assert on the transition rather than parse prose; `Display`
// renders the narrative line.

use crate::types::{BaseId, FactionId, PlanePos};
use serde::{Deserialize, Serialize};
use sprawl_prng::StreamRng;
use std::collections::VecDeque;
use std::fmt;

/// A narrative event emitted by the war simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WarEvent {
    /// Simulated seconds since the war began.
    pub time: f32,
    pub kind: WarEventKind,
    /// The faction's display name, captured at emission so the event renders
    /// without a faction lookup.
    pub faction_name: String,
}

/// What happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum WarEventKind {
    /// A builder convoy founded a new base (initial bases emit nothing).
    BaseFounded {
        faction: FactionId,
        base: BaseId,
        at: PlanePos,
    },
    /// A base was battered below zero hit points and removed.
    BaseDestroyed { faction: FactionId, base: BaseId },
}

impl fmt::Display for WarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarEventKind::BaseFounded { at, .. } => {
                write!(f, "{} raised a new base at {}", self.faction_name, at)
            }
            WarEventKind::BaseDestroyed { .. } => {
                write!(f, "{} lost a base", self.faction_name)
            }
        }
    }
}

/// Bounded ring of recent events, most recent first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventLog {
    entries: VecDeque<WarEvent>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an event, dropping the oldest entry once full.
    pub fn push(&mut self, event: WarEvent) {
        self.entries.push_front(event);
        self.entries.truncate(self.capacity);
    }

    /// Recent events, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &WarEvent> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A uniformly random recent event, or `None` when the ring is empty.
    pub fn sample(&self, rng: &mut StreamRng) -> Option<&WarEvent> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = rng.range_i32(0, self.entries.len() as i32 - 1) as usize;
        self.entries.get(idx)
    }
}
