// Engine modules: frame timing, input, tile physics

pub mod game_loop;
pub mod input;
pub mod physics;
