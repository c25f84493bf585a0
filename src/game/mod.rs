// Game layer: characters, chakrams, levels and the world tick

pub mod chakram;
pub mod characters;
pub mod config;
pub mod events;
pub mod level;
pub mod snapshot;
pub mod world;

pub use chakram::Chakram;
pub use config::SimulationConfig;
pub use events::{DeathCause, EventQueue, GameEvent};
pub use level::Level;
pub use snapshot::{ChakramView, EnemyView, EntityKind, PlayerView, WorldSnapshot};
pub use world::World;
