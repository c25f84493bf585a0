// Thrown chakrams

use super::characters::stats::ChakramStats;
use crate::core::direction::Direction;
use crate::core::math::Rect;
use crate::engine::physics::body::{presets, MovableBody};
use glam::Vec2;

/// Offset from the thrower's position to the chakram's spawn point, so the
/// chakram appears at the thrower's hand. Expressed in chakram sizes.
fn hand_offset(direction: Direction, size: f32) -> Vec2 {
    let front = size + size / 3.0;
    let behind = -size / 2.0;
    match direction {
        Direction::Down => Vec2::new(size / 4.0, 0.0),
        Direction::Up => Vec2::new(size / 4.0, size / 2.0),
        Direction::Left => Vec2::new(behind, size / 2.0),
        Direction::Right => Vec2::new(front, size / 2.0),
        Direction::DownLeft => Vec2::new(behind, size / 3.0),
        Direction::DownRight => Vec2::new(front, size / 3.0),
        Direction::UpLeft => Vec2::new(behind, size),
        Direction::UpRight => Vec2::new(front, size),
    }
}

/// A chakram in flight.
///
/// Hits are tested with the ground shadow, not the sprite: the shadow sits
/// `drop` below the chakram plus the thrower's height in the air.
#[derive(Debug, Clone)]
pub struct Chakram {
    pub body: MovableBody,
    direction: Direction,
    air_height: f32,
    drop: f32,
    spin: f32,
}

impl Chakram {
    /// Spawn a chakram at the thrower's hand, accelerating along `direction`
    pub fn throw(
        origin: Vec2,
        direction: Direction,
        air_height: f32,
        stats: &ChakramStats,
    ) -> Self {
        let position = origin + hand_offset(direction, stats.size);
        let acceleration = direction.vector() * stats.acceleration;

        // Sideways throws keep the shadow at the thrower's feet
        let drop = match direction {
            Direction::Left | Direction::Right => stats.size / 2.0,
            _ => stats.shadow_drop,
        };

        Self {
            body: presets::chakram_body(position, stats.size, acceleration),
            direction,
            air_height,
            drop,
            spin: 0.0,
        }
    }

    /// Integrate one tick: no damping, speed clamped
    pub fn advance(&mut self, delta: f32, stats: &ChakramStats) {
        self.body.acceleration = self.direction.vector() * stats.acceleration;
        self.body.integrate(delta, None, stats.max_velocity);
        self.spin += stats.spin_step;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn air_height(&self) -> f32 {
        self.air_height
    }

    /// Sprite rotation in degrees; rightward throws spin the other way
    pub fn rotation(&self) -> f32 {
        if self.direction.is_rightward() {
            -self.spin
        } else {
            self.spin
        }
    }

    /// Ground shadow position
    pub fn shadow_position(&self) -> Vec2 {
        self.body.position - Vec2::new(0.0, self.air_height + self.drop)
    }

    /// Sprite bounds
    pub fn bounds(&self) -> Rect {
        self.body.bounds()
    }

    /// Hit box: the central half of the shadow's lower half
    pub fn attack_bounds(&self) -> Rect {
        let shadow = self.shadow_position();
        let size = self.body.size.x;
        Rect::new(shadow.x + size / 4.0, shadow.y, size / 2.0, size / 2.0)
    }

    /// Check if the chakram has left the world rectangle entirely
    pub fn is_outside(&self, extent: Vec2) -> bool {
        let world = Rect::new(0.0, 0.0, extent.x, extent.y);
        !world.overlaps(&self.bounds()) && !world.overlaps(&self.attack_bounds())
    }
}
