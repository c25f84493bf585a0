// Chakram Quest simulation core
//
// - `core`: geometry, directions and error types shared by everything else
// - `engine`: frame timing, input intents and the tile physics layer
// - `game`: the player, enemies, chakrams and the world that ticks them

pub mod core;
pub mod engine;
pub mod game;
