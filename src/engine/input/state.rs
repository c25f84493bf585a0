// Per-world input intent state

use super::action::Action;
use crate::core::direction::Direction;
use std::collections::HashSet;

/// Intent flags for one world, with press/release edges.
///
/// Owned by the caller and passed into every tick, so two worlds never
/// share input.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    /// Actions that are currently pressed this frame
    pressed: HashSet<Action>,

    /// Actions that were just pressed this frame (press events)
    just_pressed: HashSet<Action>,

    /// Actions that were just released this frame (release events)
    just_released: HashSet<Action>,
}

impl InputState {
    /// Create an empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Press or release depending on `down`
    pub fn set(&mut self, action: Action, down: bool) {
        if down {
            self.press(action);
        } else {
            self.release(action);
        }
    }

    /// Update input state for a new frame
    /// Call this once per tick after the world has consumed the input
    pub fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Resolve the movement intents to one of eight directions.
    ///
    /// Opposing intents on the same axis cancel out.
    pub fn direction(&self) -> Option<Direction> {
        let vertical = match (
            self.is_pressed(Action::MoveDown),
            self.is_pressed(Action::MoveUp),
        ) {
            (true, false) => Some(Direction::Down),
            (false, true) => Some(Direction::Up),
            _ => None,
        };
        let horizontal = match (
            self.is_pressed(Action::MoveLeft),
            self.is_pressed(Action::MoveRight),
        ) {
            (true, false) => Some(Direction::Left),
            (false, true) => Some(Direction::Right),
            _ => None,
        };

        Direction::from_components(vertical, horizontal)
    }
}
