// The player character ("Mike")

use super::animation::AnimationPlayer;
use super::enemy::Enemy;
use super::state::{PlayerState, PlayerStateMachine};
use super::stats::{ChakramStats, PlayerStats};
use crate::core::direction::Direction;
use crate::core::math::Rect;
use crate::engine::input::{Action, InputState};
use crate::engine::physics::body::{presets, MovableBody};
use crate::engine::physics::collision::{keep_inside, overlaps_hazard, resolve_tiles, Solidity};
use crate::engine::physics::tilemap::TileQuery;
use crate::game::chakram::Chakram;
use crate::game::events::{DeathCause, EventQueue, GameEvent};
use glam::Vec2;

/// Jump arc apex, in jump degrees
const APEX_DEGREE: f32 = 90.0;
/// The jump lands once its degree passes this
const LANDING_DEGREE: f32 = 180.0;
/// A full death rise, in death degrees
const DEATH_DEGREES: f32 = 360.0;
/// Shadow scale at rest, in percent
const FULL_SHADOW: f32 = 100.0;

/// The player: movement, jump arc, chakram throws, damage and death.
///
/// While airborne the sprite position rides a half-sine arc above
/// `shadow_y`, the ground contact point. Tile collision, world edges and
/// enemy contact all work in the ground plane, so they use boxes anchored at
/// `ground_y()` rather than the sprite position.
#[derive(Debug)]
pub struct Player {
    pub body: MovableBody,
    pub stats: PlayerStats,
    pub animation: AnimationPlayer,
    state_machine: PlayerStateMachine,
    direction: Direction,

    grounded: bool,
    hurt: bool,
    invincible: bool,
    hurt_timer: f32,
    health: f32,

    // Jump arc
    jump_degree: f32,
    shadow_percentage: f32,
    shadow_y: f32,

    // Death rise
    death_degree: f32,
    death_start_x: f32,

    /// Set once the current throw has released its chakram
    chakram_released: bool,
    chakrams: Vec<Chakram>,
}

impl Player {
    /// Create a player standing at `position`
    pub fn new(position: Vec2, stats: PlayerStats) -> Self {
        Self {
            body: presets::player_body(position, stats.size),
            health: stats.max_health,
            stats,
            animation: AnimationPlayer::with_player_animations(),
            state_machine: PlayerStateMachine::new(),
            direction: Direction::Down,
            grounded: true,
            hurt: false,
            invincible: false,
            hurt_timer: 0.0,
            jump_degree: 0.0,
            shadow_percentage: FULL_SHADOW,
            shadow_y: position.y,
            death_degree: 0.0,
            death_start_x: position.x,
            chakram_released: false,
            chakrams: Vec::new(),
        }
    }

    // ---- Accessors ----

    pub fn state(&self) -> PlayerState {
        self.state_machine.state()
    }

    pub fn state_machine(&self) -> &PlayerStateMachine {
        &self.state_machine
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_hurt(&self) -> bool {
        self.hurt
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible
    }

    pub fn jump_degree(&self) -> f32 {
        self.jump_degree
    }

    pub fn shadow_percentage(&self) -> f32 {
        self.shadow_percentage
    }

    pub fn death_degree(&self) -> f32 {
        self.death_degree
    }

    /// Chakrams this player has thrown that are still in flight
    pub fn chakrams(&self) -> &[Chakram] {
        &self.chakrams
    }

    pub fn chakrams_mut(&mut self) -> &mut Vec<Chakram> {
        &mut self.chakrams
    }

    /// Y of the ground contact point (the shadow while airborne)
    pub fn ground_y(&self) -> f32 {
        if self.grounded {
            self.body.position.y
        } else {
            self.shadow_y
        }
    }

    // ---- Hurtboxes ----

    /// Sprite box
    pub fn bounds(&self) -> Rect {
        self.body.bounds()
    }

    /// Sprite-sized box standing on the ground contact point
    pub fn ground_bounds(&self) -> Rect {
        Rect::new(
            self.body.position.x,
            self.ground_y(),
            self.body.size.x,
            self.body.size.y,
        )
    }

    /// Body hit area: the sprite box minus a seventh on each side
    pub fn damage_bounds(&self) -> Rect {
        let size = self.body.size;
        Rect::new(
            self.body.position.x + size.x / 7.0,
            self.ground_y(),
            size.x * 5.0 / 7.0,
            size.y,
        )
    }

    /// Ground and hazard contact area, a quarter of the damage box high
    pub fn feet_bounds(&self) -> Rect {
        let size = self.body.size;
        Rect::new(
            self.body.position.x + size.x / 7.0,
            self.ground_y(),
            size.x * 5.0 / 7.0,
            size.y / 4.0,
        )
    }

    /// Ground-projected hurtbox, only while airborne
    pub fn shadow_bounds(&self) -> Option<Rect> {
        if self.grounded {
            return None;
        }
        let size = self.body.size;
        Some(Rect::new(
            self.body.position.x + size.x / 7.0,
            self.shadow_y,
            size.x * 5.0 / 7.0,
            size.y / 2.0,
        ))
    }

    /// Sprite box in the air, only while airborne
    pub fn jumping_bounds(&self) -> Option<Rect> {
        (!self.grounded).then(|| self.body.bounds())
    }

    // ---- Tick phases ----

    /// Turn this tick's intents into acceleration and state changes
    pub fn apply_input(&mut self, input: &InputState, events: &mut EventQueue) {
        self.body.reset_acceleration();

        let state = self.state();
        if state == PlayerState::Dying {
            self.body.acceleration.y = self.stats.death_rise;
            return;
        }
        if !state.accepts_input() {
            return;
        }

        // Letting go early mirrors the arc to its falling half
        if self.stats.variable_jump
            && !self.grounded
            && input.just_released(Action::Jump)
            && self.jump_degree < APEX_DEGREE
        {
            self.jump_degree = LANDING_DEGREE - self.jump_degree;
            if self.state() == PlayerState::Jumping {
                self.state_machine.transition(PlayerState::Falling);
            }
        }

        if input.just_pressed(Action::Jump) && self.grounded {
            self.start_jump(events);
        }

        if input.is_pressed(Action::Attack) {
            self.start_attack();
            return;
        }

        // A hit in the air takes away steering until the hurt window ends
        let stunned = self.state() == PlayerState::Damage;
        match input.direction() {
            Some(direction) => {
                self.direction = direction;
                if self.grounded {
                    self.state_machine.transition(PlayerState::Running);
                    self.body.acceleration = direction.vector() * self.stats.acceleration;
                } else if !stunned {
                    self.body.acceleration = direction.vector() * self.stats.jump_acceleration;
                }
            }
            None => {
                // The damage pose holds until the hurt window ends
                if self.grounded && !stunned {
                    self.state_machine.transition(PlayerState::Idle);
                }
            }
        }

        self.sync_animation();
    }

    /// Resolve tiles, world edges and enemy contact against the pending velocity
    pub fn resolve_collisions<T: TileQuery + ?Sized>(
        &mut self,
        tiles: &T,
        extent: Vec2,
        enemies: &[Enemy],
        events: &mut EventQueue,
    ) {
        // The death rise floats over everything
        if self.state() == PlayerState::Dying {
            keep_inside(self.ground_bounds(), &mut self.body.velocity, extent);
            return;
        }

        let feet = self.feet_bounds();
        let contact = resolve_tiles(
            feet,
            &mut self.body.velocity,
            tiles,
            Solidity::ObstaclesOnly,
        );
        if self.grounded && (contact.hazard() || overlaps_hazard(feet, tiles)) {
            self.die(DeathCause::Hazard, events);
            return;
        }

        keep_inside(self.ground_bounds(), &mut self.body.velocity, extent);

        if self.state().is_attacking() || self.invincible {
            return;
        }

        let hurtbox = self.shadow_bounds().unwrap_or_else(|| self.damage_bounds());
        let touched = enemies
            .iter()
            .filter(|enemy| !enemy.is_dead())
            .any(|enemy| hurtbox.overlaps(&enemy.damage_bounds()));
        if touched {
            self.take_hit(events);
        }
    }

    /// Damp (on the ground), clamp and move; the shadow follows while airborne
    pub fn settle_and_move(&mut self, extent: Vec2) {
        let damping = self.grounded.then_some(self.stats.damping);
        self.body.settle(damping, self.stats.max_velocity);
        self.body.translate();

        if self.grounded {
            self.body.confine(extent);
        } else {
            self.shadow_y += self.body.velocity.y;
            let max = (extent - self.body.size).max(Vec2::ZERO);
            self.body.position.x = self.body.position.x.clamp(0.0, max.x);
            self.shadow_y = self.shadow_y.clamp(0.0, max.y);
        }
    }

    /// Advance the jump arc, throw, hurt and death timers
    pub fn update_timers(
        &mut self,
        delta: f32,
        start: Vec2,
        extent: Vec2,
        chakram_stats: &ChakramStats,
        events: &mut EventQueue,
    ) {
        self.state_machine.update(delta);
        self.animation.update(delta);

        if self.state() == PlayerState::Dying {
            self.death_step(start, extent, events);
            self.sync_animation();
            return;
        }

        if !self.grounded {
            self.jump_step(events);
        }

        if self.state().is_attacking() {
            self.attack_step(chakram_stats, events);
        }

        if self.hurt {
            self.hurt_timer -= delta;
            if self.hurt_timer <= 0.0 {
                self.hurt_timer = 0.0;
                self.hurt = false;
                self.invincible = false;
                if self.state() == PlayerState::Damage {
                    let next = self.airborne_or_idle();
                    self.state_machine.transition(next);
                }
            }
        }

        self.sync_animation();
    }

    // ---- Transitions ----

    fn start_jump(&mut self, events: &mut EventQueue) {
        self.grounded = false;
        self.jump_degree = 0.0;
        self.shadow_percentage = FULL_SHADOW;
        self.shadow_y = self.body.position.y;
        self.state_machine.transition(PlayerState::Jumping);
        events.push(GameEvent::PlayerJumped);
    }

    fn start_attack(&mut self) {
        let (state, clip) = if self.grounded {
            (PlayerState::Attacking, "attack")
        } else {
            (PlayerState::JumpAttack, "jump_attack")
        };
        self.state_machine.transition(state);
        self.animation.play_from_start(clip);
        self.chakram_released = false;
    }

    fn take_hit(&mut self, events: &mut EventQueue) {
        self.health = (self.health - self.stats.contact_damage).max(0.0);
        self.hurt = true;
        self.invincible = true;
        self.hurt_timer = self.stats.hurt_duration;
        self.body.stop();

        if self.health <= 0.0 {
            self.die(DeathCause::Defeated, events);
        } else {
            self.state_machine.transition(PlayerState::Damage);
            events.push(GameEvent::PlayerDamaged {
                health: self.health,
            });
        }
    }

    fn die(&mut self, cause: DeathCause, events: &mut EventQueue) {
        log::info!("Player died ({:?})", cause);

        // Drop back to the ground before rising
        if !self.grounded {
            self.land();
        }
        self.body.stop();
        self.death_degree = 0.0;
        self.death_start_x = self.body.position.x;
        self.state_machine.transition(PlayerState::Dying);
        events.push(GameEvent::PlayerDied { cause });
    }

    fn respawn(&mut self, start: Vec2, events: &mut EventQueue) {
        log::info!("Player respawned at ({}, {})", start.x, start.y);

        self.body.teleport(start);
        self.health = self.stats.max_health;
        self.hurt = false;
        self.invincible = false;
        self.hurt_timer = 0.0;
        self.direction = Direction::Down;
        self.grounded = true;
        self.jump_degree = 0.0;
        self.shadow_percentage = FULL_SHADOW;
        self.shadow_y = start.y;
        self.death_degree = 0.0;
        self.state_machine.transition(PlayerState::Idle);
        events.push(GameEvent::PlayerRespawned);
    }

    fn land(&mut self) {
        self.grounded = true;
        self.body.position.y = self.shadow_y;
        self.jump_degree = 0.0;
        self.shadow_percentage = FULL_SHADOW;
    }

    fn airborne_or_idle(&self) -> PlayerState {
        if self.grounded {
            PlayerState::Idle
        } else if self.jump_degree >= APEX_DEGREE {
            PlayerState::Falling
        } else {
            PlayerState::Jumping
        }
    }

    // ---- Timer steps ----

    /// One fixed step of the half-sine jump arc
    fn jump_step(&mut self, events: &mut EventQueue) {
        let lift = self.jump_degree.to_radians().sin().max(0.0);
        self.body.position.y = self.shadow_y + lift;

        if self.jump_degree < APEX_DEGREE {
            self.shadow_percentage -= self.stats.shadow_step;
        } else {
            self.shadow_percentage += self.stats.shadow_step;
        }
        self.jump_degree += self.stats.jump_step;

        if self.state() == PlayerState::Jumping && self.jump_degree >= APEX_DEGREE {
            self.state_machine.transition(PlayerState::Falling);
        }

        if self.jump_degree > LANDING_DEGREE {
            self.land();
            match self.state() {
                PlayerState::JumpAttack => {
                    // The throw carries on from the ground
                    self.animation.continue_as("attack");
                    self.state_machine.transition(PlayerState::Attacking);
                }
                PlayerState::Jumping | PlayerState::Falling => {
                    self.state_machine.transition(PlayerState::Idle);
                }
                _ => {}
            }
            events.push(GameEvent::PlayerLanded);
        }
    }

    /// Release the chakram at the clip midpoint, finish with the clip
    fn attack_step(&mut self, chakram_stats: &ChakramStats, events: &mut EventQueue) {
        if !self.chakram_released && self.animation.past_midpoint() {
            let air_height = self.body.position.y - self.ground_y();
            let chakram = Chakram::throw(
                self.body.position,
                self.direction,
                air_height,
                chakram_stats,
            );
            log::debug!("Chakram thrown {:?}", self.direction);
            self.chakrams.push(chakram);
            self.chakram_released = true;
            events.push(GameEvent::ChakramThrown {
                direction: self.direction,
            });
        }

        if self.animation.is_finished() {
            let next = self.airborne_or_idle();
            self.state_machine.transition(next);
        }
    }

    /// One fixed step of the death rise
    fn death_step(&mut self, start: Vec2, extent: Vec2, events: &mut EventQueue) {
        self.body.position.x = self.death_start_x + self.death_degree.to_radians().sin();
        self.body.confine(extent);
        self.death_degree += self.stats.death_step;

        if self.death_degree >= DEATH_DEGREES {
            self.respawn(start, events);
        }
    }

    fn sync_animation(&mut self) {
        self.animation.play(self.state().animation_name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::tilemap::TileGrid;
    use approx::assert_relative_eq;

    const DELTA: f32 = 1.0 / 60.0;

    struct Rig {
        player: Player,
        tiles: TileGrid,
        enemies: Vec<Enemy>,
        events: EventQueue,
        start: Vec2,
    }

    impl Rig {
        fn new(rows: &[&str], start: Vec2) -> Self {
            Self {
                player: Player::new(start, PlayerStats::default()),
                tiles: TileGrid::from_rows(rows).unwrap(),
                enemies: Vec::new(),
                events: EventQueue::new(),
                start,
            }
        }

        fn open(start: Vec2) -> Self {
            Self::new(&["..........."; 8], start)
        }

        /// Run the player's share of a world tick
        fn tick(&mut self, input: &InputState) {
            let extent = self.tiles.extent();
            self.events.clear();
            self.player.apply_input(input, &mut self.events);
            self.player.body.accelerate(DELTA);
            self.player
                .resolve_collisions(&self.tiles, extent, &self.enemies, &mut self.events);
            self.player.settle_and_move(extent);
            self.player.update_timers(
                DELTA,
                self.start,
                extent,
                &ChakramStats::default(),
                &mut self.events,
            );
        }
    }

    fn pressed(actions: &[Action]) -> InputState {
        let mut input = InputState::new();
        for &action in actions {
            input.press(action);
        }
        input
    }

    #[test]
    fn test_bounds_layout() {
        let player = Player::new(Vec2::new(2.0, 3.0), PlayerStats::default());
        let damage = player.damage_bounds();
        let feet = player.feet_bounds();

        assert_relative_eq!(damage.x, 2.0 + 1.0 / 7.0);
        assert_relative_eq!(damage.width, 5.0 / 7.0);
        assert_eq!(damage.height, 1.0);
        assert_eq!(feet.height, 0.25);
        assert!(feet.height < damage.height);
        assert_eq!(player.shadow_bounds(), None);
        assert_eq!(player.jumping_bounds(), None);
    }

    #[test]
    fn test_run_right_one_tick() {
        let mut rig = Rig::open(Vec2::new(2.0, 2.0));
        rig.tick(&pressed(&[Action::MoveRight]));

        assert_relative_eq!(rig.player.body.velocity.x, 0.3, epsilon = 1e-5);
        assert_relative_eq!(rig.player.position().x, 2.3, epsilon = 1e-5);
        assert_eq!(rig.player.state(), PlayerState::Running);
        assert_eq!(rig.player.direction(), Direction::Right);
    }

    #[test]
    fn test_idle_when_no_intent() {
        let mut rig = Rig::open(Vec2::new(2.0, 2.0));
        rig.tick(&pressed(&[Action::MoveRight]));
        rig.tick(&InputState::new());
        assert_eq!(rig.player.state(), PlayerState::Idle);
        assert!(rig.player.body.velocity.x < 0.3);
    }

    #[test]
    fn test_jump_apex_after_eighteen_ticks() {
        let mut rig = Rig::open(Vec2::new(4.0, 3.0));
        let mut input = pressed(&[Action::Jump]);
        for _ in 0..18 {
            rig.tick(&input);
            input.update();
        }
        assert_eq!(rig.player.jump_degree(), 90.0);
        assert_eq!(rig.player.shadow_percentage(), 55.0);
        assert_eq!(rig.player.state(), PlayerState::Falling);
        assert!(!rig.player.is_grounded());
    }

    #[test]
    fn test_lands_exactly_when_degree_exceeds_180() {
        let mut rig = Rig::open(Vec2::new(4.0, 3.0));
        let mut input = pressed(&[Action::Jump]);
        rig.tick(&input);
        input.update();
        input.release(Action::Jump);

        // Degrees 5..=180 keep the player airborne
        while rig.player.jump_degree() <= 180.0 - 5.0 {
            rig.tick(&input);
            input.update();
            assert!(!rig.player.is_grounded());
            assert!(rig.player.position().y >= 3.0 - 1e-5);
        }
        assert_eq!(rig.player.jump_degree(), 180.0);
        assert!(!rig.player.is_grounded());

        // The 37th tick steps past 180
        rig.tick(&input);
        assert!(rig.player.is_grounded());
        assert_eq!(rig.player.state(), PlayerState::Idle);
        assert_relative_eq!(rig.player.position().y, 3.0, epsilon = 1e-5);
        assert!(rig.events.contains(&GameEvent::PlayerLanded));
    }

    #[test]
    fn test_jump_arc_is_symmetric() {
        let mut rig = Rig::open(Vec2::new(4.0, 3.0));
        let mut input = pressed(&[Action::Jump]);
        let mut heights = Vec::new();
        for _ in 0..37 {
            rig.tick(&input);
            input.update();
            heights.push(rig.player.position().y - 3.0);
        }
        // heights[i] is the lift at degree 5 * i
        for d in 0..=18 {
            assert_relative_eq!(heights[d], heights[36 - d], epsilon = 1e-4);
        }
    }

    #[test]
    fn test_holding_jump_does_not_rejump() {
        let mut rig = Rig::open(Vec2::new(4.0, 3.0));
        let mut input = pressed(&[Action::Jump]);
        for _ in 0..40 {
            rig.tick(&input);
            input.update();
        }
        assert!(rig.player.is_grounded());
        assert_eq!(rig.player.state(), PlayerState::Idle);
    }

    #[test]
    fn test_variable_jump_cuts_arc() {
        let mut rig = Rig::open(Vec2::new(4.0, 3.0));
        rig.player.stats.variable_jump = true;
        let mut input = pressed(&[Action::Jump]);
        for _ in 0..6 {
            rig.tick(&input);
            input.update();
        }
        assert_eq!(rig.player.jump_degree(), 30.0);

        input.release(Action::Jump);
        rig.tick(&input);
        // Mirrored to 150, then stepped
        assert_eq!(rig.player.jump_degree(), 155.0);
        assert_eq!(rig.player.state(), PlayerState::Falling);
    }

    #[test]
    fn test_airborne_steering_moves_shadow() {
        let mut rig = Rig::open(Vec2::new(4.0, 3.0));
        let mut input = pressed(&[Action::Jump]);
        rig.tick(&input);
        input.update();
        input.press(Action::MoveUp);
        for _ in 0..5 {
            rig.tick(&input);
            input.update();
        }
        assert!(rig.player.ground_y() > 3.0);
        let shadow = rig.player.shadow_bounds().unwrap();
        assert_eq!(shadow.y, rig.player.ground_y());
        assert!(rig.player.position().y > shadow.y);
    }

    #[test]
    fn test_attack_releases_one_chakram() {
        let mut rig = Rig::open(Vec2::new(4.0, 3.0));
        let input = pressed(&[Action::Attack]);
        rig.tick(&input);
        assert_eq!(rig.player.state(), PlayerState::Attacking);
        assert!(rig.player.chakrams().is_empty(), "released mid-animation");

        let mut released_at = None;
        for tick in 1..19 {
            rig.tick(&InputState::new());
            if released_at.is_none() && !rig.player.chakrams().is_empty() {
                released_at = Some(tick);
            }
        }
        assert!(released_at.is_some());
        assert_eq!(rig.player.chakrams().len(), 1);

        for _ in 0..5 {
            rig.tick(&InputState::new());
        }
        assert_eq!(rig.player.state(), PlayerState::Idle);
        assert_eq!(rig.player.chakrams().len(), 1);
    }

    #[test]
    fn test_jump_attack_lands_into_attack() {
        let mut rig = Rig::open(Vec2::new(4.0, 3.0));
        let mut input = pressed(&[Action::Jump]);
        // Leave the ground, then throw late in the arc
        for _ in 0..30 {
            rig.tick(&input);
            input.update();
        }
        input.release(Action::Jump);
        input.press(Action::Attack);
        rig.tick(&input);
        assert_eq!(rig.player.state(), PlayerState::JumpAttack);
        input.update();
        input.release(Action::Attack);

        let mut saw_ground_attack = false;
        for _ in 0..30 {
            rig.tick(&input);
            input.update();
            if rig.player.is_grounded() && rig.player.state() == PlayerState::Attacking {
                saw_ground_attack = true;
            }
        }
        assert!(saw_ground_attack);
        assert_eq!(rig.player.chakrams().len(), 1);
        assert_eq!(rig.player.state(), PlayerState::Idle);
    }

    #[test]
    fn test_airborne_throw_carries_air_height() {
        let mut rig = Rig::open(Vec2::new(4.0, 3.0));
        rig.player.direction = Direction::Left;
        let mut input = pressed(&[Action::Jump]);
        rig.tick(&input);
        input.update();
        input.release(Action::Jump);
        input.press(Action::Attack);
        for _ in 0..12 {
            rig.tick(&input);
            input.update();
        }
        let chakram = &rig.player.chakrams()[0];
        assert!(chakram.air_height() > 0.0);
        // Sideways throws put the shadow at the thrower's feet
        assert!((chakram.shadow_position().y - 3.0).abs() < 0.3);
    }

    #[test]
    fn test_hazard_kills_grounded_player() {
        // Water column at x = 5
        let rows = [".....~....", ".....~....", ".....~....", ".....~...."];
        let mut rig = Rig::new(&rows, Vec2::new(3.9, 1.0));
        let input = pressed(&[Action::MoveRight]);
        let mut ticks = 0;
        while rig.player.state() != PlayerState::Dying {
            rig.tick(&input);
            ticks += 1;
            assert!(ticks < 30, "never reached the water");
        }
        assert!(rig.events.contains(&GameEvent::PlayerDied {
            cause: DeathCause::Hazard
        }));
    }

    #[test]
    fn test_jumping_over_water_is_safe() {
        let rows = [".....~....", ".....~....", ".....~....", ".....~...."];
        let mut rig = Rig::new(&rows, Vec2::new(4.1, 1.0));
        rig.player.grounded = false;
        rig.player.state_machine.transition(PlayerState::Jumping);
        rig.player.shadow_y = 1.0;
        rig.player.body.velocity.x = 0.3;
        rig.tick(&InputState::new());
        assert_ne!(rig.player.state(), PlayerState::Dying);
    }

    #[test]
    fn test_death_rise_respawns_after_120_ticks() {
        let rows = [".....~....", ".....~....", ".....~....", ".....~...."];
        let start = Vec2::new(1.0, 1.0);
        let mut rig = Rig::new(&rows, start);
        rig.player.body.position = Vec2::new(4.8, 1.0);
        rig.player.health = 40.0;

        let mut ticks = 0;
        rig.tick(&pressed(&[Action::MoveRight]));
        ticks += 1;
        assert_eq!(rig.player.state(), PlayerState::Dying);

        while rig.player.state() == PlayerState::Dying {
            rig.tick(&InputState::new());
            ticks += 1;
            assert!(ticks <= 120);
        }
        assert_eq!(ticks, 120);
        assert_eq!(rig.player.position(), start);
        assert_eq!(rig.player.health(), 100.0);
        assert_eq!(rig.player.direction(), Direction::Down);
        assert_eq!(rig.player.state(), PlayerState::Idle);
        assert!(rig.events.contains(&GameEvent::PlayerRespawned));
    }

    #[test]
    fn test_enemy_contact_and_invincibility() {
        let mut rig = Rig::open(Vec2::new(4.0, 3.0));
        rig.enemies.push(Enemy::with_course(
            0,
            Vec2::new(4.2, 3.2),
            Default::default(),
            Direction::Down,
            5.0,
        ));

        rig.tick(&InputState::new());
        assert_eq!(rig.player.health(), 80.0);
        assert_eq!(rig.player.state(), PlayerState::Damage);
        assert!(rig.player.is_hurt());
        assert!(rig.player.is_invincible());

        // No input keeps the damage pose
        rig.tick(&InputState::new());
        assert_eq!(rig.player.state(), PlayerState::Damage);

        // Still overlapping: no further damage while hurt, but the player
        // can walk away
        for _ in 0..60 {
            rig.tick(&pressed(&[Action::MoveLeft]));
        }
        assert_eq!(rig.player.health(), 80.0);
        assert_eq!(rig.player.state(), PlayerState::Running);
        assert!(rig.player.position().x < 4.0);
        assert!(rig.player.is_invincible());

        rig.enemies.clear();
        for _ in 0..61 {
            rig.tick(&InputState::new());
        }
        assert!(!rig.player.is_hurt());
        assert!(!rig.player.is_invincible());
        assert_eq!(rig.player.state(), PlayerState::Idle);
    }

    #[test]
    fn test_hurt_player_walks_away() {
        let mut rig = Rig::open(Vec2::new(3.0, 3.0));
        rig.enemies.push(Enemy::with_course(
            0,
            Vec2::new(3.0, 3.0),
            Default::default(),
            Direction::Down,
            5.0,
        ));
        rig.tick(&InputState::new());
        assert_eq!(rig.player.state(), PlayerState::Damage);
        rig.enemies.clear();

        let before = rig.player.position();
        for _ in 0..90 {
            rig.tick(&pressed(&[Action::MoveLeft]));
        }
        assert!(rig.player.position().x < before.x - 1.0);
        assert_eq!(rig.player.direction(), Direction::Left);
        assert!(rig.player.is_hurt());
    }

    #[test]
    fn test_airborne_hit_blocks_steering() {
        let mut rig = Rig::open(Vec2::new(4.0, 3.0));
        let mut input = pressed(&[Action::Jump]);
        rig.tick(&input);
        input.update();

        let shadow = rig.player.shadow_bounds().unwrap();
        rig.enemies.push(Enemy::with_course(
            0,
            Vec2::new(shadow.x, shadow.y),
            Default::default(),
            Direction::Down,
            5.0,
        ));
        rig.tick(&input);
        assert_eq!(rig.player.state(), PlayerState::Damage);
        rig.enemies.clear();

        input.press(Action::MoveRight);
        let x = rig.player.position().x;
        for _ in 0..5 {
            rig.tick(&input);
            input.update();
        }
        assert!(!rig.player.is_grounded());
        assert_eq!(rig.player.position().x, x);
    }

    #[test]
    fn test_airborne_contact_uses_shadow() {
        let mut rig = Rig::open(Vec2::new(4.0, 3.0));
        let mut input = pressed(&[Action::Jump]);
        for _ in 0..10 {
            rig.tick(&input);
            input.update();
        }
        // Enemy level with the sprite in the air but clear of the shadow
        let sprite = rig.player.position();
        rig.enemies.push(Enemy::with_course(
            0,
            Vec2::new(sprite.x, 3.6),
            Default::default(),
            Direction::Down,
            5.0,
        ));
        rig.tick(&input);
        assert_eq!(rig.player.health(), 100.0);

        rig.enemies[0].body.position.y = 3.1;
        rig.tick(&input);
        assert_eq!(rig.player.health(), 80.0);
    }

    #[test]
    fn test_lethal_contact_starts_dying() {
        let mut rig = Rig::open(Vec2::new(4.0, 3.0));
        rig.player.health = 20.0;
        rig.enemies.push(Enemy::with_course(
            0,
            Vec2::new(4.0, 3.0),
            Default::default(),
            Direction::Down,
            5.0,
        ));
        rig.tick(&InputState::new());
        assert_eq!(rig.player.health(), 0.0);
        assert_eq!(rig.player.state(), PlayerState::Dying);
        assert!(rig.events.contains(&GameEvent::PlayerDied {
            cause: DeathCause::Defeated
        }));
    }

    #[test]
    fn test_obstacle_blocks_feet() {
        // Rock at (5, 1)
        let rows = ["..........", "..........", ".....#....", ".........."];
        let mut rig = Rig::new(&rows, Vec2::new(3.5, 1.0));
        let input = pressed(&[Action::MoveRight]);
        for _ in 0..30 {
            rig.tick(&input);
        }
        assert!(rig.player.feet_bounds().right() <= 5.0 + 1e-5);
    }

    #[test]
    fn test_world_edges_hold_player() {
        let mut rig = Rig::open(Vec2::new(0.5, 0.5));
        let input = pressed(&[Action::MoveDown, Action::MoveLeft]);
        for _ in 0..20 {
            rig.tick(&input);
            assert!(rig.player.position().x >= 0.0);
            assert!(rig.player.position().y >= 0.0);
        }
    }
}
