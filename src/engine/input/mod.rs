// Input intent system
//
// The simulation never sees keys or touches. Front ends translate their raw
// events into `Action` presses and releases on an `InputState`, pass it to
// `World::tick`, then call `update()` so edge flags only last one tick.
//
// ```rust
// use chakram_quest::engine::input::{Action, InputState};
//
// let mut input = InputState::new();
// input.press(Action::MoveRight);
// input.press(Action::Jump);
// // world.tick(&input, delta);
// input.update();
// ```

pub mod action;
pub mod state;

// Re-export commonly used types
pub use action::Action;
pub use state::InputState;
