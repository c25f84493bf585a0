// Simulation configuration

use super::characters::stats::{ChakramStats, EnemyStats, PlayerStats};
use crate::core::error::ConfigError;

/// Everything a world needs to know besides its level
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationConfig {
    pub player: PlayerStats,
    pub enemy: EnemyStats,
    pub chakram: ChakramStats,
    /// Seed for enemy wandering; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Default stats with a fixed seed, for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.player.validate()?;
        self.enemy.validate()?;
        self.chakram.validate()
    }
}
