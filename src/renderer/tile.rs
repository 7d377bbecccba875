//! Coordinates of one square tile in the image pyramid.

use std::fmt;

/// Coordinates of a tile within the panorama pyramid.
///
/// `z` is the pyramid level (0 = coarsest), `x` the column and `y` the
/// row within that level. The renderer does not track tile identity or
/// cache state; tiles are supplied one at a time by the caller's tile
/// selection logic along with their decoded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Pyramid level
    pub z: u32,
    /// Column within the level
    pub x: u32,
    /// Row within the level
    pub y: u32,
}

impl Tile {
    /// Create a tile coordinate.
    pub fn new(z: u32, x: u32, y: u32) -> Self {
        Self { z, x, y }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

#[cfg(test)]
#[path = "tile_tests.rs"]
mod tests;
