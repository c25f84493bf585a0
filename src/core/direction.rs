// Eight-way facing directions

use glam::Vec2;

/// Facing / movement direction. Drives animation selection, chakram spawn
/// offsets and enemy wandering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Down,
    Left,
    Up,
    Right,
    DownLeft,
    UpLeft,
    UpRight,
    DownRight,
}

impl Direction {
    /// Every direction, in a fixed order (used for uniform random picks)
    pub const ALL: [Direction; 8] = [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::DownLeft,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownRight,
    ];

    /// Per-axis unit offset with y growing upward.
    ///
    /// Diagonals are deliberately not normalized: both axes carry full
    /// magnitude, so diagonal movement is faster than cardinal movement.
    pub fn vector(self) -> Vec2 {
        match self {
            Direction::Down => Vec2::new(0.0, -1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Up => Vec2::new(0.0, 1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::DownLeft => Vec2::new(-1.0, -1.0),
            Direction::UpLeft => Vec2::new(-1.0, 1.0),
            Direction::UpRight => Vec2::new(1.0, 1.0),
            Direction::DownRight => Vec2::new(1.0, -1.0),
        }
    }

    /// Direction reflected on both axes
    pub fn opposite(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::DownLeft => Direction::UpRight,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownRight => Direction::UpLeft,
        }
    }

    /// Direction with the chosen axes mirrored
    pub fn reflected(self, flip_x: bool, flip_y: bool) -> Self {
        let mut v = self.vector();
        if flip_x {
            v.x = -v.x;
        }
        if flip_y {
            v.y = -v.y;
        }
        let horizontal = if v.x > 0.0 {
            Some(Direction::Right)
        } else if v.x < 0.0 {
            Some(Direction::Left)
        } else {
            None
        };
        let vertical = if v.y > 0.0 {
            Some(Direction::Up)
        } else if v.y < 0.0 {
            Some(Direction::Down)
        } else {
            None
        };
        Self::from_components(vertical, horizontal).unwrap_or(self)
    }

    /// Combine a vertical and a horizontal component into one direction
    pub fn from_components(
        vertical: Option<Direction>,
        horizontal: Option<Direction>,
    ) -> Option<Self> {
        match (vertical, horizontal) {
            (Some(Direction::Down), Some(Direction::Left)) => Some(Direction::DownLeft),
            (Some(Direction::Down), Some(Direction::Right)) => Some(Direction::DownRight),
            (Some(Direction::Up), Some(Direction::Left)) => Some(Direction::UpLeft),
            (Some(Direction::Up), Some(Direction::Right)) => Some(Direction::UpRight),
            (Some(vertical), None) => Some(vertical),
            (None, Some(horizontal)) => Some(horizontal),
            _ => None,
        }
    }

    /// Whether the direction points right (spin is mirrored for these)
    pub fn is_rightward(self) -> bool {
        self.vector().x > 0.0
    }

    /// Suffix used by renderers to pick a directional animation
    pub fn name(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::DownLeft => "down_left",
            Direction::UpLeft => "up_left",
            Direction::UpRight => "up_right",
            Direction::DownRight => "down_right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(direction.opposite().vector(), -direction.vector());
        }
    }

    #[test]
    fn test_diagonals_are_full_magnitude() {
        assert_eq!(Direction::DownLeft.vector(), Vec2::new(-1.0, -1.0));
        assert_eq!(Direction::UpRight.vector(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_reflection_examples() {
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
    }

    #[test]
    fn test_reflected_per_axis() {
        assert_eq!(Direction::DownLeft.reflected(true, false), Direction::DownRight);
        assert_eq!(Direction::DownLeft.reflected(false, true), Direction::UpLeft);
        assert_eq!(Direction::DownLeft.reflected(true, true), Direction::UpRight);
        assert_eq!(Direction::Left.reflected(false, true), Direction::Left);
        for direction in Direction::ALL {
            assert_eq!(direction.reflected(true, true), direction.opposite());
        }
    }

    #[test]
    fn test_from_components() {
        assert_eq!(
            Direction::from_components(Some(Direction::Down), Some(Direction::Left)),
            Some(Direction::DownLeft)
        );
        assert_eq!(
            Direction::from_components(None, Some(Direction::Right)),
            Some(Direction::Right)
        );
        assert_eq!(Direction::from_components(None, None), None);
    }

    #[test]
    fn test_all_unique() {
        let set: std::collections::HashSet<_> = Direction::ALL.iter().collect();
        assert_eq!(set.len(), 8);
    }
}
