// Level data: tile map, player start and enemy roster

use super::characters::enemy::{Enemy, EnemyId};
use super::characters::stats::EnemyStats;
use crate::core::error::LevelError;
use crate::engine::physics::tilemap::{TileGrid, TileQuery};
use glam::Vec2;
use rand::Rng;

/// A playable map over any tile source.
///
/// The level owns its enemies; the world borrows them each tick.
#[derive(Debug)]
pub struct Level<T = TileGrid> {
    tiles: T,
    starting_position: Vec2,
    spawn_points: Vec<Vec2>,
    enemies: Vec<Enemy>,
    next_enemy_id: EnemyId,
}

impl<T: TileQuery> Level<T> {
    /// Create a level, checking that the start lies on the map
    pub fn new(tiles: T, starting_position: Vec2) -> Result<Self, LevelError> {
        let extent = tiles.extent();
        let Vec2 { x, y } = starting_position;
        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 || x >= extent.x || y >= extent.y
        {
            return Err(LevelError::StartOutOfBounds {
                x,
                y,
                width: tiles.width(),
                height: tiles.height(),
            });
        }

        Ok(Self {
            tiles,
            starting_position,
            spawn_points: Vec::new(),
            enemies: Vec::new(),
            next_enemy_id: 0,
        })
    }

    /// Add a point where the world spawns an enemy on creation
    pub fn with_spawn_point(mut self, position: Vec2) -> Self {
        self.spawn_points.push(position);
        self
    }

    pub fn spawn_points(&self) -> &[Vec2] {
        &self.spawn_points
    }

    /// Spawn an enemy with a random course
    pub fn spawn_enemy<R: Rng + ?Sized>(
        &mut self,
        position: Vec2,
        stats: &EnemyStats,
        rng: &mut R,
    ) -> EnemyId {
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        self.enemies.push(Enemy::new(id, position, stats.clone(), rng));
        log::debug!("Spawned enemy {} at ({}, {})", id, position.x, position.y);
        id
    }

    /// Add a prepared enemy, keeping ids unique
    pub fn insert_enemy(&mut self, enemy: Enemy) {
        self.next_enemy_id = self.next_enemy_id.max(enemy.id() + 1);
        self.enemies.push(enemy);
    }

    pub fn tiles(&self) -> &T {
        &self.tiles
    }

    pub fn starting_position(&self) -> Vec2 {
        self.starting_position
    }

    /// World extent in tile units
    pub fn extent(&self) -> Vec2 {
        self.tiles.extent()
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    /// Tiles and enemies borrowed together
    pub fn split_mut(&mut self) -> (&T, &mut [Enemy]) {
        (&self.tiles, &mut self.enemies)
    }

    /// Enemies still in play
    pub fn live_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|enemy| !enemy.is_dead())
    }

    /// Drop dead enemies and return their ids in level order
    pub fn remove_dead_enemies(&mut self) -> Vec<EnemyId> {
        let removed: Vec<EnemyId> = self
            .enemies
            .iter()
            .filter(|enemy| enemy.is_dead())
            .map(Enemy::id)
            .collect();
        if !removed.is_empty() {
            self.enemies.retain(|enemy| !enemy.is_dead());
        }
        removed
    }
}

impl Level {
    /// Parse text rows (first row on top) into a level
    pub fn from_rows(rows: &[&str], starting_position: Vec2) -> Result<Self, LevelError> {
        Self::new(TileGrid::from_rows(rows)?, starting_position)
    }

    /// A small island ringed by water, with two rocks and a pond
    pub fn demo() -> Result<Self, LevelError> {
        let rows = [
            "~~~~~~~~~~",
            ".#.......~",
            ".........~",
            "......~~~~",
            "......~..~",
            "....#.~..~",
            "~~~~~~~~~~",
        ];
        Ok(Self::from_rows(&rows, Vec2::new(3.0, 3.0))?.with_spawn_point(Vec2::new(4.0, 4.0)))
    }
}

impl<T: TileQuery> TileQuery for Level<T> {
    fn is_obstacle(&self, x: i32, y: i32) -> bool {
        self.tiles.is_obstacle(x, y)
    }

    fn is_hazard(&self, x: i32, y: i32) -> bool {
        self.tiles.is_hazard(x, y)
    }

    fn width(&self) -> usize {
        self.tiles.width()
    }

    fn height(&self) -> usize {
        self.tiles.height()
    }
}
