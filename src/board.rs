//! Board state: a fixed grid of tiles holding one player's fleet.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, ShotResult};
use crate::tile::{Rotation, ShipId, ShipPiece, Tile};

/// A `width × height` grid of [`Tile`]s stored row-major, `(0, 0)` upper-left.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Create a board of open water.
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            tiles: alloc::vec![Tile::water(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` addresses a tile of this board.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Tile at `(x, y)`, if in bounds.
    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        if x < self.width && y < self.height {
            self.tiles.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Tile at a possibly negative coordinate.
    pub fn get(&self, x: i32, y: i32) -> Result<&Tile, BoardError> {
        self.index(x, y)
            .map(|i| &self.tiles[i])
            .ok_or(BoardError::OutOfBounds { x, y })
    }

    /// Rows of the board from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.tiles.chunks(self.width.max(1))
    }

    /// Check a proposed placement against bounds and existing ships.
    ///
    /// Pure: the board is not touched.
    pub fn is_valid_placement(&self, x: i32, y: i32, rotation: Rotation, length: usize) -> bool {
        if length == 0 || !self.in_bounds(x, y) {
            return false;
        }
        let (dx, dy) = rotation.step();
        (0..length).all(|i| {
            let Ok(i) = i32::try_from(i) else {
                return false;
            };
            let (Some(tx), Some(ty)) = (x.checked_add(dx * i), y.checked_add(dy * i)) else {
                return false;
            };
            self.get(tx, ty).is_ok_and(|tile| !tile.is_ship())
        })
    }

    /// Write a ship of `length` segments starting at `(x, y)`.
    ///
    /// The placement must already have passed [`Board::is_valid_placement`];
    /// nothing is checked here beyond a debug assertion.
    pub fn place_ship(&mut self, x: usize, y: usize, length: usize, rotation: Rotation, id: ShipId) {
        debug_assert!(
            i32::try_from(x)
                .ok()
                .zip(i32::try_from(y).ok())
                .is_some_and(|(x, y)| self.is_valid_placement(x, y, rotation, length)),
            "place_ship called with an unvalidated placement"
        );
        for i in 0..length {
            let (tx, ty) = match rotation {
                Rotation::Horizontal => (x + i, y),
                Rotation::Vertical => (x, y + i),
            };
            let piece = ShipPiece::for_segment(rotation, i, length);
            self.tiles[ty * self.width + tx] = Tile::ship(id, piece);
        }
    }

    /// Resolve a shot at `(x, y)`, marking a hit or a miss.
    pub fn receive_shot(&mut self, x: usize, y: usize) -> Result<ShotResult, BoardError> {
        if x >= self.width || y >= self.height {
            return Err(BoardError::OutOfBounds {
                x: i32::try_from(x).unwrap_or(i32::MAX),
                y: i32::try_from(y).unwrap_or(i32::MAX),
            });
        }
        let tile = &mut self.tiles[y * self.width + x];
        if tile.is_shot() {
            return Err(BoardError::AlreadyShot { x, y });
        }
        if !tile.receive_shot() {
            return Ok(ShotResult::Miss);
        }
        match tile.ship_id() {
            Some(id) if self.ship_sunk(id) => Ok(ShotResult::Sunk),
            _ => Ok(ShotResult::Hit),
        }
    }

    /// A ship is sunk when every tile carrying its id has been hit.
    pub fn ship_sunk(&self, id: ShipId) -> bool {
        self.tiles
            .iter()
            .filter(|t| t.ship_id() == Some(id))
            .all(Tile::is_hit)
    }

    /// True when no ship tile is left unhit. An empty board counts as sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.tiles.iter().filter(|t| t.is_ship()).all(Tile::is_hit)
    }

    /// Number of ship tiles not yet hit.
    pub fn remaining_ship_tiles(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_ship() && !t.is_hit()).count()
    }

    /// Distinct ship ids on the board, in ascending order.
    pub fn ship_ids(&self) -> Vec<ShipId> {
        let mut ids: Vec<ShipId> = self.tiles.iter().filter_map(Tile::ship_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{}:", self.width, self.height)?;
        for row in self.rows() {
            for tile in row {
                let ch = if tile.is_hit() {
                    'X'
                } else if tile.is_miss() {
                    'o'
                } else {
                    tile.ship_piece().map_or('.', ShipPiece::glyph)
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
