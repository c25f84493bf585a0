// Wandering enemies

use super::animation::AnimationPlayer;
use super::stats::EnemyStats;
use crate::core::direction::Direction;
use crate::core::math::Rect;
use crate::engine::physics::body::{presets, MovableBody};
use crate::engine::physics::collision::{keep_inside, resolve_tiles, Solidity};
use crate::engine::physics::tilemap::TileQuery;
use glam::Vec2;
use rand::Rng;

/// Unique identifier for an enemy within a level
pub type EnemyId = u32;

/// An enemy that commits to a random direction for a random time, and turns
/// around when it runs into a wall, water or the world edge.
#[derive(Debug)]
pub struct Enemy {
    id: EnemyId,
    pub body: MovableBody,
    pub stats: EnemyStats,
    pub animation: AnimationPlayer,
    direction: Direction,
    /// Seconds left before a new direction is picked
    wander_timer: f32,
    health: f32,
    dead: bool,
    hurt: bool,
    hurt_timer: f32,
}

impl Enemy {
    /// Create an enemy with a random direction and wander timer
    pub fn new<R: Rng + ?Sized>(
        id: EnemyId,
        position: Vec2,
        stats: EnemyStats,
        rng: &mut R,
    ) -> Self {
        let direction = random_direction(rng);
        let wander_timer = rng.gen_range(0.0..stats.wander_max);
        Self::with_course(id, position, stats, direction, wander_timer)
    }

    /// Create an enemy with a fixed starting course
    pub fn with_course(
        id: EnemyId,
        position: Vec2,
        stats: EnemyStats,
        direction: Direction,
        wander_timer: f32,
    ) -> Self {
        Self {
            id,
            body: presets::enemy_body(position, stats.size),
            health: stats.max_health,
            stats,
            animation: AnimationPlayer::with_enemy_animations(),
            direction,
            wander_timer,
            dead: false,
            hurt: false,
            hurt_timer: 0.0,
        }
    }

    pub fn id(&self) -> EnemyId {
        self.id
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn wander_timer(&self) -> f32 {
        self.wander_timer
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_hurt(&self) -> bool {
        self.hurt
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn bounds(&self) -> Rect {
        self.body.bounds()
    }

    /// Lower half of the sprite box
    pub fn damage_bounds(&self) -> Rect {
        let size = self.body.size;
        Rect::new(
            self.body.position.x,
            self.body.position.y,
            size.x,
            size.y / 2.0,
        )
    }

    /// Apply chakram damage. Returns true if this hit killed the enemy.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.dead {
            return false;
        }

        self.health = (self.health - amount).max(0.0);
        self.hurt = true;
        self.hurt_timer = self.stats.hurt_duration;
        self.animation.play("hurt");

        if self.health <= 0.0 {
            self.dead = true;
            self.body.stop();
            log::debug!("Enemy {} killed", self.id);
        }
        self.dead
    }

    /// Advance one tick of wandering, tile collision and edge containment
    pub fn update<T, R>(&mut self, delta: f32, tiles: &T, extent: Vec2, rng: &mut R)
    where
        T: TileQuery + ?Sized,
        R: Rng + ?Sized,
    {
        if self.dead {
            return;
        }

        self.animation.update(delta);
        if self.hurt {
            self.hurt_timer -= delta;
            if self.hurt_timer <= 0.0 {
                self.hurt = false;
                self.hurt_timer = 0.0;
                self.animation.play("walk");
            }
        }

        self.wander_timer -= delta;
        if self.wander_timer < 0.0 {
            self.direction = random_direction(rng);
            self.wander_timer = rng.gen_range(0.0..self.stats.wander_max);
        }

        self.body.acceleration = self.direction.vector() * self.stats.acceleration;
        self.body.accelerate(delta);

        // Only the feet collide with tiles, so enemies can walk up to a wall
        let contact = resolve_tiles(
            self.damage_bounds(),
            &mut self.body.velocity,
            tiles,
            Solidity::ObstaclesAndHazards,
        );
        if contact.blocked() {
            let reflected = self.direction.reflected(contact.blocked_x, contact.blocked_y);
            self.change_course(reflected);
        }

        let edge = keep_inside(self.body.bounds(), &mut self.body.velocity, extent);
        if edge.any() {
            let horizontal = match (edge.left, edge.right) {
                (true, _) => Some(Direction::Right),
                (_, true) => Some(Direction::Left),
                _ => None,
            };
            let vertical = match (edge.bottom, edge.top) {
                (true, _) => Some(Direction::Up),
                (_, true) => Some(Direction::Down),
                _ => None,
            };
            if let Some(direction) = Direction::from_components(vertical, horizontal) {
                self.change_course(direction);
            }
        }

        self.body.settle(Some(self.stats.damping), self.stats.max_velocity);
        self.body.translate();
        self.body.confine(extent);
    }

    /// Head a new way and pick a fresh random course next tick
    fn change_course(&mut self, direction: Direction) {
        self.direction = direction;
        self.wander_timer = 0.0;
    }
}

fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
}
