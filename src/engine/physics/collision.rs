use super::tilemap::TileQuery;
use crate::core::math::Rect;
use glam::Vec2;
use std::ops::RangeInclusive;

/// Axis of a swept test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Which tile kinds stop a body
///
/// The player walks into water (and dies there), enemies treat it as a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solidity {
    ObstaclesOnly,
    ObstaclesAndHazards,
}

/// Result of sweeping one axis against the tile map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisContact {
    /// A solid cell lies in the path
    pub obstacle: bool,
    /// A water/pit cell lies in the path
    pub hazard: bool,
}

impl AxisContact {
    /// Whether this contact stops motion for the given solidity
    pub fn stops(&self, solidity: Solidity) -> bool {
        match solidity {
            Solidity::ObstaclesOnly => self.obstacle,
            Solidity::ObstaclesAndHazards => self.obstacle || self.hazard,
        }
    }
}

/// Contacts found while resolving both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileContact {
    pub x: AxisContact,
    pub y: AxisContact,
    /// Axes whose velocity component was zeroed
    pub blocked_x: bool,
    pub blocked_y: bool,
}

impl TileContact {
    /// Whether any axis was stopped
    pub fn blocked(&self) -> bool {
        self.blocked_x || self.blocked_y
    }

    /// Whether either sweep crossed a hazard cell
    pub fn hazard(&self) -> bool {
        self.x.hazard || self.y.hazard
    }
}

/// World edges a body tried to cross this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryContact {
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
    pub top: bool,
}

impl BoundaryContact {
    pub fn any(&self) -> bool {
        self.left || self.right || self.bottom || self.top
    }
}

/// Cell indices covered by the span `[low, high]`
fn cell_span(low: f32, high: f32) -> RangeInclusive<i32> {
    (low.floor() as i32)..=(high.floor() as i32)
}

fn cell_rect(x: i32, y: i32) -> Rect {
    Rect::new(x as f32, y as f32, 1.0, 1.0)
}

/// Sweep `bounds` by one velocity component and report the cells it would enter.
///
/// Only cells between the leading edge and the projected leading edge are
/// tested (the low edge when moving negative, the high edge when moving
/// positive), with the cross axis held at the current span. A cell counts
/// only when it strictly overlaps the swept rectangle.
pub fn sweep_axis<T: TileQuery + ?Sized>(
    bounds: Rect,
    velocity: Vec2,
    axis: Axis,
    tiles: &T,
) -> AxisContact {
    let (v, offset) = match axis {
        Axis::X => (velocity.x, Vec2::new(velocity.x, 0.0)),
        Axis::Y => (velocity.y, Vec2::new(0.0, velocity.y)),
    };
    if v == 0.0 {
        return AxisContact::default();
    }

    let swept = bounds.union(&bounds.translated(offset));
    let (low, high, cross) = match axis {
        Axis::X => (bounds.x, bounds.right(), cell_span(bounds.y, bounds.top())),
        Axis::Y => (bounds.y, bounds.top(), cell_span(bounds.x, bounds.right())),
    };
    let along = if v < 0.0 {
        cell_span(low + v, low)
    } else {
        cell_span(high, high + v)
    };

    let mut contact = AxisContact::default();
    for a in along {
        for c in cross.clone() {
            let (x, y) = match axis {
                Axis::X => (a, c),
                Axis::Y => (c, a),
            };
            if !cell_rect(x, y).overlaps(&swept) {
                continue;
            }
            contact.obstacle |= tiles.is_obstacle(x, y);
            contact.hazard |= tiles.is_hazard(x, y);
        }
    }
    contact
}

/// Resolve X then Y against the tile map, zeroing blocked velocity components.
///
/// Y is swept with the already-resolved velocity, so a diagonal move into a
/// corner keeps whichever axis is free. Horizontal wins ties.
pub fn resolve_tiles<T: TileQuery + ?Sized>(
    bounds: Rect,
    velocity: &mut Vec2,
    tiles: &T,
    solidity: Solidity,
) -> TileContact {
    let mut contact = TileContact {
        x: sweep_axis(bounds, *velocity, Axis::X, tiles),
        ..Default::default()
    };
    if contact.x.stops(solidity) {
        velocity.x = 0.0;
        contact.blocked_x = true;
    }

    contact.y = sweep_axis(bounds, *velocity, Axis::Y, tiles);
    if contact.y.stops(solidity) {
        velocity.y = 0.0;
        contact.blocked_y = true;
    }

    contact
}

/// Whether `rect` currently overlaps any hazard cell
pub fn overlaps_hazard<T: TileQuery + ?Sized>(rect: Rect, tiles: &T) -> bool {
    cell_span(rect.x, rect.right()).any(|x| {
        cell_span(rect.y, rect.top())
            .any(|y| tiles.is_hazard(x, y) && cell_rect(x, y).overlaps(&rect))
    })
}

/// Strict AABB intersection between two hurtboxes
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

/// Zero any velocity component that would carry `bounds` past the world edge
pub fn keep_inside(bounds: Rect, velocity: &mut Vec2, extent: Vec2) -> BoundaryContact {
    let projected = bounds.translated(*velocity);
    let mut contact = BoundaryContact::default();

    if velocity.x < 0.0 && projected.x < 0.0 {
        contact.left = true;
        velocity.x = 0.0;
    } else if velocity.x > 0.0 && projected.right() > extent.x {
        contact.right = true;
        velocity.x = 0.0;
    }

    if velocity.y < 0.0 && projected.y < 0.0 {
        contact.bottom = true;
        velocity.y = 0.0;
    } else if velocity.y > 0.0 && projected.top() > extent.y {
        contact.top = true;
        velocity.y = 0.0;
    }

    contact
}
