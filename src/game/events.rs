// Per-tick game events
//
// The world records what happened during a tick so collaborators (audio,
// UI, level scripting) can react without diffing snapshots.

use super::characters::enemy::EnemyId;
use crate::core::direction::Direction;

/// Why the player started dying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Feet touched water or a pit while grounded
    Hazard,
    /// Health dropped to zero from enemy contact
    Defeated,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PlayerJumped,
    PlayerLanded,
    /// Enemy contact; `health` is what remains
    PlayerDamaged { health: f32 },
    PlayerDied { cause: DeathCause },
    PlayerRespawned,
    ChakramThrown { direction: Direction },
    /// A chakram struck an enemy and was removed
    ChakramHit { enemy: EnemyId },
    /// A chakram left the world
    ChakramExpired,
    EnemyKilled { enemy: EnemyId },
    /// A dead enemy was dropped from the level
    EnemyRemoved { enemy: EnemyId },
}

/// Queue of events produced during the last tick
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16), // Pre-allocate for common case
        }
    }

    /// Clear all events (call at start of a tick)
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Add an event
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events recorded since the last clear
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Check if an event was recorded since the last clear
    pub fn contains(&self, event: &GameEvent) -> bool {
        self.events.contains(event)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
