// Character system
//
// This module contains everything that walks the map:
// - The player and its state machine
// - Wandering enemies
// - Tunable stats for both (and for chakrams)
// - Clip timing that drives throws

pub mod animation;
pub mod enemy;
pub mod player;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationPlayer};
pub use enemy::{Enemy, EnemyId};
pub use player::Player;
pub use state::{PlayerState, PlayerStateMachine};
pub use stats::{ChakramStats, EnemyStats, PlayerStats};
