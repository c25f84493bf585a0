// Movable bodies and the per-tick integrator

use crate::core::math::Rect;
use glam::Vec2;

/// Position, velocity and acceleration of anything that moves.
///
/// Velocity is stored in per-tick units: `accelerate` scales the
/// acceleration by the frame delta before adding it, and `translate` adds
/// the velocity to the position unchanged. Bounds are derived from the
/// position on demand, so they can never go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct MovableBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub size: Vec2,
}

impl MovableBody {
    /// Create a body at rest
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            size,
        }
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Axis-aligned bounds at the current position
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    /// Clear the acceleration (owners do this at the start of every tick)
    pub fn reset_acceleration(&mut self) {
        self.acceleration = Vec2::ZERO;
    }

    /// Convert the acceleration to frame units and add it to the velocity
    pub fn accelerate(&mut self, delta: f32) {
        self.acceleration *= delta;
        self.velocity += self.acceleration;
    }

    /// Apply damping (when given) and clamp each velocity component
    pub fn settle(&mut self, damping: Option<f32>, max_velocity: f32) {
        if let Some(damping) = damping {
            self.velocity *= damping;
        }
        self.velocity = self
            .velocity
            .clamp(Vec2::splat(-max_velocity), Vec2::splat(max_velocity));
    }

    /// Move by the current velocity
    pub fn translate(&mut self) {
        self.position += self.velocity;
    }

    /// Full integration step for bodies that do not collide in between
    pub fn integrate(&mut self, delta: f32, damping: Option<f32>, max_velocity: f32) {
        self.accelerate(delta);
        self.settle(damping, max_velocity);
        self.translate();
    }

    /// Stop all motion
    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
    }

    /// Move to a position and stop (for respawning)
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
        self.stop();
    }

    /// Clamp the position so the bounds stay inside `[0, extent]`
    pub fn confine(&mut self, extent: Vec2) {
        let max = (extent - self.size).max(Vec2::ZERO);
        self.position = self.position.clamp(Vec2::ZERO, max);
    }
}

/// Common body configurations for game objects
pub mod presets {
    use super::*;

    /// Player body (square sprite box)
    pub fn player_body(position: Vec2, size: f32) -> MovableBody {
        MovableBody::new(position, Vec2::splat(size))
    }

    /// Enemy body (square sprite box)
    pub fn enemy_body(position: Vec2, size: f32) -> MovableBody {
        MovableBody::new(position, Vec2::splat(size))
    }

    /// Chakram body, accelerating along its throw direction from the first tick
    pub fn chakram_body(position: Vec2, size: f32, acceleration: Vec2) -> MovableBody {
        let mut body = MovableBody::new(position, Vec2::splat(size));
        body.acceleration = acceleration;
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounds_follow_position() {
        let mut body = MovableBody::new(Vec2::new(2.0, 3.0), Vec2::splat(1.0));
        assert_eq!(body.bounds(), Rect::new(2.0, 3.0, 1.0, 1.0));

        body.velocity = Vec2::new(0.5, -0.25);
        body.translate();
        assert_eq!(body.bounds(), Rect::new(2.5, 2.75, 1.0, 1.0));
    }

    #[test]
    fn test_integrate_accelerate_damp_move() {
        let mut body = MovableBody::new(Vec2::new(2.0, 2.0), Vec2::splat(1.0));
        body.acceleration = Vec2::new(20.0, 0.0);
        body.integrate(1.0 / 60.0, Some(0.9), 4.0);

        assert_relative_eq!(body.velocity.x, 0.3, epsilon = 1e-5);
        assert_relative_eq!(body.position.x, 2.3, epsilon = 1e-5);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_velocity_never_exceeds_max() {
        let mut body = MovableBody::new(Vec2::ZERO, Vec2::splat(1.0));
        for _ in 0..200 {
            body.acceleration = Vec2::new(5000.0, -5000.0);
            body.integrate(1.0 / 60.0, None, 4.0);
            assert!(body.velocity.x.abs() <= 4.0);
            assert!(body.velocity.y.abs() <= 4.0);
        }
        assert_eq!(body.velocity, Vec2::new(4.0, -4.0));
    }

    #[test]
    fn test_damping_shrinks_speed_and_keeps_direction() {
        let mut body =
            MovableBody::new(Vec2::ZERO, Vec2::splat(1.0)).with_velocity(Vec2::new(1.5, -0.5));
        let mut previous = body.velocity;
        for _ in 0..30 {
            body.integrate(1.0 / 60.0, Some(0.9), 4.0);
            assert!(body.velocity.length() <= previous.length());
            assert!(body.velocity.x > 0.0 && body.velocity.y < 0.0);
            previous = body.velocity;
        }
    }

    #[test]
    fn test_airborne_keeps_velocity() {
        let mut body =
            MovableBody::new(Vec2::ZERO, Vec2::splat(1.0)).with_velocity(Vec2::new(1.0, 0.0));
        body.integrate(1.0 / 60.0, None, 4.0);
        assert_eq!(body.velocity.x, 1.0);
    }

    #[test]
    fn test_confine_and_teleport() {
        let mut body = MovableBody::new(Vec2::new(-0.5, 9.7), Vec2::splat(1.0))
            .with_velocity(Vec2::new(1.0, 1.0));
        body.confine(Vec2::new(10.0, 7.0));
        assert_eq!(body.position, Vec2::new(0.0, 6.0));

        body.teleport(Vec2::new(3.0, 3.0));
        assert_eq!(body.position, Vec2::new(3.0, 3.0));
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_chakram_preset_carries_acceleration() {
        let body = presets::chakram_body(Vec2::ZERO, 0.5, Vec2::new(0.5, 0.0));
        assert_eq!(body.size, Vec2::splat(0.5));
        assert_eq!(body.acceleration, Vec2::new(0.5, 0.0));
    }
}
