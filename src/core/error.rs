// Error types for level construction and configuration

use thiserror::Error;

/// Errors raised while building a level from a tile layout
#[derive(Debug, Error, PartialEq)]
pub enum LevelError {
    #[error("level map has no rows")]
    EmptyMap,

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile '{ch}' at row {row}, column {col}")]
    UnknownTile { ch: char, row: usize, col: usize },

    #[error("starting position ({x}, {y}) lies outside the {width}x{height} map")]
    StartOutOfBounds {
        x: f32,
        y: f32,
        width: usize,
        height: usize,
    },
}

/// Errors raised by simulation tunables that would break the integrator
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} damping must be in (0, 1], got {value}")]
    InvalidDamping { name: &'static str, value: f32 },

    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}
