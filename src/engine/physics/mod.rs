// Tile physics: movable bodies, swept tile collision and debug outlines

pub mod body;
pub mod collision;
pub mod debug;
pub mod tilemap;

pub use body::MovableBody;
pub use collision::{
    keep_inside, overlaps, overlaps_hazard, resolve_tiles, sweep_axis, Axis, AxisContact,
    BoundaryContact, Solidity, TileContact,
};
pub use debug::{DebugOverlay, DebugVertex, HitboxKind};
pub use tilemap::{Tile, TileGrid, TileQuery};
