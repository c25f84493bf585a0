// Player state machine

/// Represents the current state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    /// Standing still on ground
    #[default]
    Idle,
    /// Moving on ground
    Running,
    /// In the air, before the apex of the arc
    Jumping,
    /// In the air, from the apex down
    Falling,
    /// Throwing a chakram on the ground
    Attacking,
    /// Throwing a chakram mid-jump
    JumpAttack,
    /// Knocked back after enemy contact
    Damage,
    /// Rising away before respawning
    Dying,
    /// Reserved for deep-water levels; no transition enters it yet
    Swimming,
}

impl PlayerState {
    /// Check if directional, jump and attack intents are honored
    pub fn accepts_input(&self) -> bool {
        !matches!(self, Self::Dying | Self::Attacking | Self::JumpAttack)
    }

    /// Check if a throw is in progress
    pub fn is_attacking(&self) -> bool {
        matches!(self, Self::Attacking | Self::JumpAttack)
    }

    /// Check if the state belongs to the jump arc
    pub fn is_aerial(&self) -> bool {
        matches!(self, Self::Jumping | Self::Falling | Self::JumpAttack)
    }

    /// Get the animation name for this state
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "run",
            Self::Jumping => "jump",
            Self::Falling => "fall",
            Self::Attacking => "attack",
            Self::JumpAttack => "jump_attack",
            Self::Damage => "damage",
            Self::Dying => "dying",
            Self::Swimming => "swim",
        }
    }
}

/// State holder that tracks the time spent in the current state
#[derive(Debug)]
pub struct PlayerStateMachine {
    current_state: PlayerState,
    state_time: f32,
}

impl Default for PlayerStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStateMachine {
    pub fn new() -> Self {
        Self {
            current_state: PlayerState::Idle,
            state_time: 0.0,
        }
    }

    /// Get the current state
    pub fn state(&self) -> PlayerState {
        self.current_state
    }

    /// Get time spent in current state
    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    /// Transition to a new state. Returns true if the state changed.
    pub fn transition(&mut self, new_state: PlayerState) -> bool {
        if self.current_state == new_state {
            return false;
        }
        log::debug!("Player state {:?} -> {:?}", self.current_state, new_state);
        self.current_state = new_state;
        self.state_time = 0.0;
        true
    }

    /// Advance the time spent in the current state (called every tick)
    pub fn update(&mut self, dt: f32) {
        self.state_time += dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let sm = PlayerStateMachine::new();
        assert_eq!(sm.state(), PlayerState::Idle);
    }

    #[test]
    fn test_state_transition() {
        let mut sm = PlayerStateMachine::new();
        assert!(sm.transition(PlayerState::Running));
        assert_eq!(sm.state(), PlayerState::Running);
        assert_eq!(sm.state_time(), 0.0);
    }

    #[test]
    fn test_same_state_transition_is_noop() {
        let mut sm = PlayerStateMachine::new();
        sm.transition(PlayerState::Running);
        sm.update(0.5);
        assert!(!sm.transition(PlayerState::Running));
        assert_eq!(sm.state_time(), 0.5);

        sm.transition(PlayerState::Jumping);
        assert_eq!(sm.state_time(), 0.0);
    }

    #[test]
    fn test_input_gating() {
        assert!(PlayerState::Idle.accepts_input());
        assert!(PlayerState::Jumping.accepts_input());
        assert!(!PlayerState::Attacking.accepts_input());
        assert!(!PlayerState::JumpAttack.accepts_input());
        assert!(PlayerState::Damage.accepts_input());
        assert!(!PlayerState::Dying.accepts_input());
    }

    #[test]
    fn test_animation_names() {
        assert_eq!(PlayerState::Idle.animation_name(), "idle");
        assert_eq!(PlayerState::Running.animation_name(), "run");
        assert_eq!(PlayerState::JumpAttack.animation_name(), "jump_attack");
    }
}
