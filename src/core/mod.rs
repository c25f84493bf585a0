// Core types shared across the engine and game layers

pub mod direction;
pub mod error;
pub mod math;

pub use direction::Direction;
pub use error::{ConfigError, LevelError};
pub use math::Rect;
