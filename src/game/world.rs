// The frame controller: one fixed-order simulation tick

use super::chakram::Chakram;
use super::characters::enemy::EnemyId;
use super::characters::player::Player;
use super::config::SimulationConfig;
use super::events::{EventQueue, GameEvent};
use super::level::Level;
use super::snapshot::{ChakramView, EnemyView, PlayerView, WorldSnapshot};
use crate::core::error::ConfigError;
use crate::engine::input::InputState;
use crate::engine::physics::debug::{DebugOverlay, HitboxKind};
use crate::engine::physics::tilemap::{TileGrid, TileQuery};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A level, its player and the random source for enemy wandering.
///
/// Each world owns its own state; nothing is shared between worlds.
#[derive(Debug)]
pub struct World<T = TileGrid> {
    level: Level<T>,
    player: Player,
    config: SimulationConfig,
    rng: StdRng,
    events: EventQueue,
    tick_count: u64,
}

impl<T: TileQuery> World<T> {
    /// Build a world and spawn an enemy at each of the level's spawn points
    pub fn new(mut level: Level<T>, config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let spawn_points = level.spawn_points().to_vec();
        for point in spawn_points {
            level.spawn_enemy(point, &config.enemy, &mut rng);
        }

        let player = Player::new(level.starting_position(), config.player.clone());
        log::info!(
            "World created: {}x{} tiles, {} enemies",
            level.tiles().width(),
            level.tiles().height(),
            level.enemies().len()
        );

        Ok(Self {
            level,
            player,
            config,
            rng,
            events: EventQueue::new(),
            tick_count: 0,
        })
    }

    /// Spawn an enemy with a random course
    pub fn spawn_enemy(&mut self, position: Vec2) -> EnemyId {
        self.level
            .spawn_enemy(position, &self.config.enemy, &mut self.rng)
    }

    /// Advance the simulation by one frame of `delta` seconds
    pub fn tick(&mut self, input: &InputState, delta: f32) {
        if !delta.is_finite() || delta <= 0.0 {
            log::warn!("Ignoring tick with delta {}", delta);
            return;
        }

        self.events.clear();
        let extent = self.level.extent();
        let start = self.level.starting_position();

        // 1-2. Intents, then acceleration into velocity
        self.player.apply_input(input, &mut self.events);
        self.player.body.accelerate(delta);

        // 3-4. Player against tiles, edges and enemies, then move
        self.player.resolve_collisions(
            self.level.tiles(),
            extent,
            self.level.enemies(),
            &mut self.events,
        );
        self.player.settle_and_move(extent);

        // 5. Chakrams
        self.advance_chakrams(delta, extent);

        // 6. Enemies
        let (tiles, enemies) = self.level.split_mut();
        for enemy in enemies.iter_mut() {
            enemy.update(delta, tiles, extent, &mut self.rng);
        }

        // 7. Player timers
        self.player.update_timers(
            delta,
            start,
            extent,
            &self.config.chakram,
            &mut self.events,
        );

        // 8. Cleanup
        for enemy in self.level.remove_dead_enemies() {
            log::debug!("Enemy {} removed", enemy);
            self.events.push(GameEvent::EnemyRemoved { enemy });
        }

        self.tick_count += 1;
    }

    /// Move every chakram, credit the first live enemy it touches, and drop
    /// chakrams that hit or left the world
    fn advance_chakrams(&mut self, delta: f32, extent: Vec2) {
        let stats = &self.config.chakram;
        let events = &mut self.events;
        let enemies = self.level.enemies_mut();

        self.player.chakrams_mut().retain_mut(|chakram| {
            chakram.advance(delta, stats);

            let attack = chakram.attack_bounds();
            let target = enemies
                .iter_mut()
                .find(|enemy| !enemy.is_dead() && attack.overlaps(&enemy.damage_bounds()));
            if let Some(enemy) = target {
                let id = enemy.id();
                events.push(GameEvent::ChakramHit { enemy: id });
                if enemy.take_damage(stats.damage) {
                    events.push(GameEvent::EnemyKilled { enemy: id });
                }
                return false;
            }

            if chakram.is_outside(extent) {
                events.push(GameEvent::ChakramExpired);
                return false;
            }
            true
        });
    }

    /// Events recorded during the last tick
    pub fn events(&self) -> &[GameEvent] {
        self.events.events()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn level(&self) -> &Level<T> {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut Level<T> {
        &mut self.level
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of ticks simulated so far
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Copy out everything a renderer needs
    pub fn snapshot(&self) -> WorldSnapshot {
        let player = &self.player;
        let player_view = PlayerView {
            position: player.position(),
            state: player.state(),
            state_time: player.state_machine().state_time(),
            direction: player.direction(),
            health: player.health(),
            hurt: player.is_hurt(),
            invincible: player.is_invincible(),
            grounded: player.is_grounded(),
            shadow_percentage: player.shadow_percentage(),
            ground_y: player.ground_y(),
            animation: player.animation.current_animation().to_string(),
            frame: player.animation.current_frame(),
            bounds: player.bounds(),
            damage_bounds: player.damage_bounds(),
            feet_bounds: player.feet_bounds(),
            shadow_bounds: player.shadow_bounds(),
            jumping_bounds: player.jumping_bounds(),
        };

        let enemies = self
            .level
            .live_enemies()
            .map(|enemy| EnemyView {
                id: enemy.id(),
                position: enemy.position(),
                direction: enemy.direction(),
                health: enemy.health(),
                hurt: enemy.is_hurt(),
                frame: enemy.animation.current_frame(),
                damage_bounds: enemy.damage_bounds(),
            })
            .collect();

        let chakrams = player.chakrams().iter().map(chakram_view).collect();

        WorldSnapshot {
            player: player_view,
            enemies,
            chakrams,
            tick: self.tick_count,
        }
    }

    /// Queue outlines of every hurtbox, obstacle and hazard
    pub fn debug_overlay(&self, overlay: &mut DebugOverlay) {
        overlay.clear();
        if !overlay.is_enabled() {
            return;
        }

        overlay.draw_tiles(self.level.tiles());
        overlay.draw_cross(
            self.level.starting_position() + self.player.body.size / 2.0,
            0.25,
            HitboxKind::Marker,
        );

        let player = &self.player;
        overlay.draw_rect(player.bounds(), HitboxKind::Body);
        overlay.draw_rect(player.damage_bounds(), HitboxKind::Damage);
        overlay.draw_rect(player.feet_bounds(), HitboxKind::Feet);
        if let Some(shadow) = player.shadow_bounds() {
            overlay.draw_rect(shadow, HitboxKind::Shadow);
        }

        for enemy in self.level.live_enemies() {
            overlay.draw_rect(enemy.damage_bounds(), HitboxKind::Enemy);
        }
        for chakram in player.chakrams() {
            overlay.draw_rect(chakram.attack_bounds(), HitboxKind::Chakram);
        }
    }
}

fn chakram_view(chakram: &Chakram) -> ChakramView {
    ChakramView {
        position: chakram.position(),
        direction: chakram.direction(),
        shadow: chakram.shadow_position(),
        rotation: chakram.rotation(),
        attack_bounds: chakram.attack_bounds(),
    }
}
