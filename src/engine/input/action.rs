// Game action definitions

/// Decoded intents the simulation understands.
///
/// Mapping keys, touch zones or gamepads onto these is the front end's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveDown,
    MoveLeft,
    MoveUp,
    MoveRight,

    // Abilities
    Jump,
    Attack,
}

impl Action {
    /// Every action, in declaration order
    pub const ALL: [Action; 6] = [
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveUp,
        Action::MoveRight,
        Action::Jump,
        Action::Attack,
    ];

    /// Whether this action is one of the four movement intents
    pub fn is_movement(self) -> bool {
        matches!(
            self,
            Action::MoveDown | Action::MoveLeft | Action::MoveUp | Action::MoveRight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::Jump, Action::Jump);
        assert_ne!(Action::Jump, Action::Attack);
    }

    #[test]
    fn test_movement_actions() {
        let movement: Vec<_> = Action::ALL.iter().filter(|a| a.is_movement()).collect();
        assert_eq!(movement.len(), 4);
        assert!(!Action::Attack.is_movement());
    }
}
