// Read-only per-tick view of the world for renderers

use super::characters::enemy::EnemyId;
use super::characters::state::PlayerState;
use crate::core::direction::Direction;
use crate::core::math::Rect;
use glam::Vec2;

/// Player data a renderer needs
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub position: Vec2,
    pub state: PlayerState,
    /// Seconds spent in `state`
    pub state_time: f32,
    pub direction: Direction,
    pub health: f32,
    pub hurt: bool,
    pub invincible: bool,
    pub grounded: bool,
    /// Shadow scale in percent (100 on the ground)
    pub shadow_percentage: f32,
    /// Ground contact point; equals `position.y` on the ground
    pub ground_y: f32,
    pub animation: String,
    pub frame: usize,
    pub bounds: Rect,
    pub damage_bounds: Rect,
    pub feet_bounds: Rect,
    pub shadow_bounds: Option<Rect>,
    pub jumping_bounds: Option<Rect>,
}

/// Enemy data a renderer needs
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyView {
    pub id: EnemyId,
    pub position: Vec2,
    pub direction: Direction,
    pub health: f32,
    pub hurt: bool,
    pub frame: usize,
    pub damage_bounds: Rect,
}

/// Chakram data a renderer needs
#[derive(Debug, Clone, PartialEq)]
pub struct ChakramView {
    pub position: Vec2,
    pub direction: Direction,
    pub shadow: Vec2,
    /// Sprite rotation in degrees
    pub rotation: f32,
    pub attack_bounds: Rect,
}

/// Something the renderer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    /// Index into `WorldSnapshot::enemies`
    Enemy(usize),
    /// Index into `WorldSnapshot::chakrams`
    Chakram(usize),
}

/// Everything visible after a tick
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub chakrams: Vec<ChakramView>,
    pub tick: u64,
}

impl WorldSnapshot {
    /// Entities sorted back to front: the further up the map an entity's
    /// ground contact is, the earlier it is drawn.
    pub fn draw_order(&self) -> Vec<EntityKind> {
        let mut order: Vec<(f32, EntityKind)> =
            Vec::with_capacity(1 + self.enemies.len() + self.chakrams.len());
        order.push((self.player.ground_y, EntityKind::Player));
        order.extend(
            self.enemies
                .iter()
                .enumerate()
                .map(|(i, enemy)| (enemy.position.y, EntityKind::Enemy(i))),
        );
        order.extend(
            self.chakrams
                .iter()
                .enumerate()
                .map(|(i, chakram)| (chakram.shadow.y, EntityKind::Chakram(i))),
        );

        // Stable, so ties keep player, enemies, chakrams order
        order.sort_by(|a, b| b.0.total_cmp(&a.0));
        order.into_iter().map(|(_, kind)| kind).collect()
    }
}
