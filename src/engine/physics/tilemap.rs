// Tile obstruction map

use crate::core::error::LevelError;
use glam::Vec2;

/// Obstruction queries the collision engine runs against the level.
///
/// Coordinates are cell indices with y growing upward. Cells outside the
/// map must answer `false` for both queries, because projected bounds
/// routinely poke past the world edges before boundary clamping runs.
pub trait TileQuery {
    /// Solid cell (rock, wall)
    fn is_obstacle(&self, x: i32, y: i32) -> bool;

    /// Water or pit cell. Kills a grounded player standing in it and blocks
    /// enemies, but does not block the player.
    fn is_hazard(&self, x: i32, y: i32) -> bool;

    /// Map width in cells
    fn width(&self) -> usize;

    /// Map height in cells
    fn height(&self) -> usize;

    /// World extent in tile units
    fn extent(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }
}

/// Kind of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Ground,
    Obstacle,
    Hazard,
}

impl Tile {
    /// Parse a layout character: `.` ground, `#` obstacle, `~` hazard
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Tile::Ground),
            '#' => Some(Tile::Obstacle),
            '~' => Some(Tile::Hazard),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Tile::Ground => '.',
            Tile::Obstacle => '#',
            Tile::Hazard => '~',
        }
    }
}

/// Dense rectangular grid of tiles
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    /// Row-major, row 0 is the bottom of the map
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Create a grid filled with ground
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Ground; width * height],
        }
    }

    /// Build a grid from text rows. The first row is the top of the map.
    pub fn from_rows(rows: &[&str]) -> Result<Self, LevelError> {
        let Some(first) = rows.first() else {
            return Err(LevelError::EmptyMap);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(LevelError::EmptyMap);
        }

        let height = rows.len();
        let mut grid = Self::new(width, height);

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LevelError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }

            let y = height - 1 - row;
            for (col, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(LevelError::UnknownTile { ch, row, col })?;
                grid.tiles[y * width + col] = tile;
            }
        }

        Ok(grid)
    }

    /// Tile at a cell, `None` outside the map
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.tiles[y * self.width + x])
    }

    /// Overwrite a cell. Returns false when the cell is outside the map.
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.tiles[y * self.width + x] = tile;
        true
    }

    /// Render the grid back to text rows, top row first
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .rev()
            .map(|y| {
                self.tiles[y * self.width..(y + 1) * self.width]
                    .iter()
                    .map(|tile| tile.to_char())
                    .collect()
            })
            .collect()
    }
}

impl TileQuery for TileGrid {
    fn is_obstacle(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(Tile::Obstacle)
    }

    fn is_hazard(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(Tile::Hazard)
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }
}
