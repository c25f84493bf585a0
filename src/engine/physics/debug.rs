use super::tilemap::TileQuery;
use crate::core::math::Rect;
use glam::Vec2;

/// What a debug outline represents; selects its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitboxKind {
    /// Sprite box of an entity
    Body,
    /// Player body hit area
    Damage,
    /// Player ground/hazard contact area
    Feet,
    /// Ground-projected hurtbox while airborne
    Shadow,
    /// Enemy damage box
    Enemy,
    /// Chakram attack box
    Chakram,
    /// Solid tile
    Obstacle,
    /// Water/pit tile
    Hazard,
    /// Level starting position
    Marker,
}

impl HitboxKind {
    /// RGBA line color
    pub fn color(self) -> [f32; 4] {
        match self {
            HitboxKind::Body => [1.0, 1.0, 1.0, 0.8],    // White
            HitboxKind::Damage => [1.0, 0.2, 0.2, 0.8],  // Red
            HitboxKind::Feet => [0.0, 1.0, 0.0, 0.8],    // Green
            HitboxKind::Shadow => [0.2, 0.2, 0.2, 0.8],  // Dark gray
            HitboxKind::Enemy => [1.0, 0.5, 0.0, 0.8],   // Orange
            HitboxKind::Chakram => [1.0, 1.0, 0.0, 0.8], // Yellow
            HitboxKind::Obstacle => [0.5, 0.5, 0.5, 0.8], // Gray
            HitboxKind::Hazard => [0.0, 0.5, 1.0, 0.8],  // Blue
            HitboxKind::Marker => [1.0, 0.0, 1.0, 0.8],  // Magenta
        }
    }
}

/// One vertex of the overlay line list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Line-list geometry of every hurtbox, rebuilt each frame.
///
/// Front ends upload `vertices()` / `indices()` as an indexed line list.
/// Disabled overlays ignore draw calls so callers don't have to check.
#[derive(Debug, Default)]
pub struct DebugOverlay {
    vertices: Vec<DebugVertex>,
    indices: Vec<u32>,
    enabled: bool,
}

impl DebugOverlay {
    /// Create an overlay (disabled by default)
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the overlay
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.clear();
        }
    }

    /// Check if the overlay is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Drop last frame's geometry
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn vertices(&self) -> &[DebugVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of line segments queued
    pub fn line_count(&self) -> usize {
        self.indices.len() / 2
    }

    /// Outline a rectangle
    pub fn draw_rect(&mut self, rect: Rect, kind: HitboxKind) {
        if !self.enabled {
            return;
        }

        let start_idx = self.vertices.len() as u32;
        let color = kind.color();
        for corner in rect.corners() {
            self.vertices.push(DebugVertex {
                position: corner.to_array(),
                color,
            });
        }

        // Four edges
        for i in 0..4 {
            self.indices.push(start_idx + i);
            self.indices.push(start_idx + (i + 1) % 4);
        }
    }

    /// Draw a cross centered on a point
    pub fn draw_cross(&mut self, center: Vec2, size: f32, kind: HitboxKind) {
        if !self.enabled {
            return;
        }

        let start_idx = self.vertices.len() as u32;
        let color = kind.color();
        let points = [
            center - Vec2::new(size, 0.0),
            center + Vec2::new(size, 0.0),
            center - Vec2::new(0.0, size),
            center + Vec2::new(0.0, size),
        ];
        for point in points {
            self.vertices.push(DebugVertex {
                position: point.to_array(),
                color,
            });
        }

        self.indices.push(start_idx);
        self.indices.push(start_idx + 1);
        self.indices.push(start_idx + 2);
        self.indices.push(start_idx + 3);
    }

    /// Outline every obstacle and hazard cell of the map
    pub fn draw_tiles<T: TileQuery + ?Sized>(&mut self, tiles: &T) {
        if !self.enabled {
            return;
        }

        for y in 0..tiles.height() as i32 {
            for x in 0..tiles.width() as i32 {
                let cell = Rect::new(x as f32, y as f32, 1.0, 1.0);
                if tiles.is_obstacle(x, y) {
                    self.draw_rect(cell, HitboxKind::Obstacle);
                } else if tiles.is_hazard(x, y) {
                    self.draw_rect(cell, HitboxKind::Hazard);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::tilemap::{Tile, TileGrid};

    #[test]
    fn test_disabled_by_default() {
        let mut overlay = DebugOverlay::new();
        overlay.draw_rect(Rect::new(0.0, 0.0, 1.0, 1.0), HitboxKind::Body);
        assert!(!overlay.is_enabled());
        assert_eq!(overlay.line_count(), 0);
    }

    #[test]
    fn test_rect_outline() {
        let mut overlay = DebugOverlay::new();
        overlay.set_enabled(true);
        overlay.draw_rect(Rect::new(1.0, 2.0, 3.0, 4.0), HitboxKind::Feet);

        assert_eq!(overlay.vertices().len(), 4);
        assert_eq!(overlay.line_count(), 4);
        assert_eq!(overlay.vertices()[2].position, [4.0, 6.0]);
        assert_eq!(overlay.vertices()[0].color, HitboxKind::Feet.color());
        assert_eq!(overlay.indices()[6..8], [3, 0]);
    }

    #[test]
    fn test_indices_offset_per_shape() {
        let mut overlay = DebugOverlay::new();
        overlay.set_enabled(true);
        overlay.draw_cross(Vec2::new(3.0, 3.0), 0.25, HitboxKind::Marker);
        overlay.draw_rect(Rect::new(0.0, 0.0, 1.0, 1.0), HitboxKind::Body);
        assert_eq!(overlay.line_count(), 6);
        assert_eq!(overlay.indices()[4], 4);
    }

    #[test]
    fn test_draw_tiles_and_disable_clears() {
        let tiles = TileGrid::from_rows(&["#.~", "..."]).unwrap();
        let mut overlay = DebugOverlay::new();
        overlay.set_enabled(true);
        overlay.draw_tiles(&tiles);
        assert_eq!(overlay.line_count(), 8);

        overlay.set_enabled(false);
        assert!(overlay.vertices().is_empty());
    }

    #[test]
    fn test_large_map_indices_do_not_wrap() {
        let mut tiles = TileGrid::new(130, 130);
        for y in 0..130 {
            for x in 0..130 {
                tiles.set(x, y, Tile::Hazard);
            }
        }
        let mut overlay = DebugOverlay::new();
        overlay.set_enabled(true);
        overlay.draw_tiles(&tiles);

        let vertex_count = overlay.vertices().len();
        assert_eq!(vertex_count, 130 * 130 * 4);
        assert!(vertex_count > u16::MAX as usize);
        let highest = overlay.indices().iter().copied().max().unwrap();
        assert_eq!(highest as usize, vertex_count - 1);
        let last_edge = &overlay.indices()[overlay.indices().len() - 2..];
        assert_eq!(last_edge, [vertex_count as u32 - 1, vertex_count as u32 - 4]);
    }
}
