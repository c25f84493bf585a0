// Tunable stats for the player, enemies and chakrams
//
// Velocities are in tiles per tick, accelerations in tiles per second per
// tick (they are scaled by the frame delta before being added).

use crate::core::error::ConfigError;

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn damping(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDamping { name, value })
    }
}

/// Player ("Mike") movement, combat and animation pacing
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    // Movement
    /// Ground acceleration per direction axis
    pub acceleration: f32,
    /// Reduced air control while jumping
    pub jump_acceleration: f32,
    /// Upward acceleration of the death rise
    pub death_rise: f32,
    /// Velocity multiplier applied each grounded tick
    pub damping: f32,
    /// Per-axis velocity limit
    pub max_velocity: f32,

    // Combat
    pub max_health: f32,
    /// Health lost per enemy contact
    pub contact_damage: f32,
    /// Seconds of hurt/invincibility after a hit
    pub hurt_duration: f32,

    // Animation pacing (fixed per tick, not scaled by delta)
    /// Jump degrees per tick; the arc spans 0..=180
    pub jump_step: f32,
    /// Shadow percentage change per jump tick
    pub shadow_step: f32,
    /// Death degrees per tick; respawn at 360
    pub death_step: f32,

    /// Releasing jump before the apex cuts the arc short
    pub variable_jump: bool,

    /// Sprite box edge length in tiles
    pub size: f32,
}

pub const BASE_PLAYER_STATS: PlayerStats = PlayerStats {
    acceleration: 20.0,
    jump_acceleration: 20.0 / 1.5,
    death_rise: 5.0,
    damping: 0.9,
    max_velocity: 4.0,

    max_health: 100.0,
    contact_damage: 20.0,
    // 120 frames at 60 Hz
    hurt_duration: 2.0,

    jump_step: 5.0,
    shadow_step: 2.5,
    death_step: 3.0,

    variable_jump: false,

    size: 1.0,
};

impl Default for PlayerStats {
    fn default() -> Self {
        BASE_PLAYER_STATS
    }
}

impl PlayerStats {
    /// Get the standard player stats
    pub fn standard() -> Self {
        BASE_PLAYER_STATS
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("player acceleration", self.acceleration)?;
        positive("player jump_acceleration", self.jump_acceleration)?;
        positive("player death_rise", self.death_rise)?;
        damping("player", self.damping)?;
        positive("player max_velocity", self.max_velocity)?;
        positive("player max_health", self.max_health)?;
        positive("player contact_damage", self.contact_damage)?;
        positive("player hurt_duration", self.hurt_duration)?;
        positive("player jump_step", self.jump_step)?;
        positive("player shadow_step", self.shadow_step)?;
        positive("player death_step", self.death_step)?;
        positive("player size", self.size)
    }
}

/// Wandering enemy stats
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyStats {
    pub acceleration: f32,
    pub damping: f32,
    pub max_velocity: f32,
    pub max_health: f32,
    /// Upper bound (exclusive) of a wander timer, in seconds
    pub wander_max: f32,
    /// Seconds an enemy flashes after a chakram hit
    pub hurt_duration: f32,
    pub size: f32,
}

pub const BASE_ENEMY_STATS: EnemyStats = EnemyStats {
    acceleration: 10.0,
    damping: 0.9,
    max_velocity: 4.0,
    max_health: 50.0,
    wander_max: 5.0,
    hurt_duration: 0.5,
    size: 1.0,
};

impl Default for EnemyStats {
    fn default() -> Self {
        BASE_ENEMY_STATS
    }
}

impl EnemyStats {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("enemy acceleration", self.acceleration)?;
        damping("enemy", self.damping)?;
        positive("enemy max_velocity", self.max_velocity)?;
        positive("enemy max_health", self.max_health)?;
        positive("enemy wander_max", self.wander_max)?;
        positive("enemy hurt_duration", self.hurt_duration)?;
        positive("enemy size", self.size)
    }
}

/// Thrown chakram stats
#[derive(Debug, Clone, PartialEq)]
pub struct ChakramStats {
    pub size: f32,
    pub acceleration: f32,
    pub max_velocity: f32,
    /// Health removed from the enemy it hits
    pub damage: f32,
    /// How far the shadow sits below a chakram thrown up or down
    pub shadow_drop: f32,
    /// Spin in degrees per tick
    pub spin_step: f32,
}

pub const BASE_CHAKRAM_STATS: ChakramStats = ChakramStats {
    size: 0.5,
    acceleration: 0.5,
    max_velocity: 0.25,
    damage: 25.0,
    shadow_drop: 0.4,
    spin_step: 5.0,
};

impl Default for ChakramStats {
    fn default() -> Self {
        BASE_CHAKRAM_STATS
    }
}

impl ChakramStats {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("chakram size", self.size)?;
        positive("chakram acceleration", self.acceleration)?;
        positive("chakram max_velocity", self.max_velocity)?;
        positive("chakram damage", self.damage)?;
        if !(self.shadow_drop.is_finite() && self.shadow_drop >= 0.0) {
            return Err(ConfigError::NonPositive {
                name: "chakram shadow_drop",
                value: self.shadow_drop,
            });
        }
        Ok(())
    }
}
