//! Single board cell and the small value types stored in it.

use core::num::NonZeroU32;

/// Axis a ship is laid along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    /// 0°: the ship extends to the right of its origin.
    Horizontal,
    /// 90°: the ship extends downwards from its origin.
    Vertical,
}

impl Rotation {
    /// Parse a rotation given in degrees. Only 0 and 90 are recognised.
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::Horizontal),
            90 => Some(Rotation::Vertical),
            _ => None,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Horizontal => 0,
            Rotation::Vertical => 90,
        }
    }

    /// Step applied per ship segment, as `(dx, dy)`.
    pub(crate) fn step(self) -> (i32, i32) {
        match self {
            Rotation::Horizontal => (1, 0),
            Rotation::Vertical => (0, 1),
        }
    }
}

/// Identity of a ship, unique within a match. Ids start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(NonZeroU32);

impl ShipId {
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(ShipId)
    }

    /// The first id handed out in a match.
    pub fn first() -> Self {
        ShipId(NonZeroU32::MIN)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The id following this one.
    pub fn next(self) -> Self {
        ShipId(self.0.saturating_add(1))
    }
}

/// Shape tag of one ship segment, depending on its axis and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipPiece {
    /// Left end of a horizontal ship.
    Left,
    /// Interior of a horizontal ship.
    Horizontal,
    /// Right end of a horizontal ship.
    Right,
    /// Top end of a vertical ship.
    Top,
    /// Interior of a vertical ship.
    Vertical,
    /// Bottom end of a vertical ship.
    Bottom,
}

impl ShipPiece {
    /// Piece for segment `index` of a ship of `length` laid along `rotation`.
    ///
    /// A single-segment ship is all head.
    pub fn for_segment(rotation: Rotation, index: usize, length: usize) -> Self {
        let head = index == 0;
        let tail = index + 1 == length;
        match (rotation, head, tail) {
            (Rotation::Horizontal, true, _) => ShipPiece::Left,
            (Rotation::Horizontal, false, true) => ShipPiece::Right,
            (Rotation::Horizontal, false, false) => ShipPiece::Horizontal,
            (Rotation::Vertical, true, _) => ShipPiece::Top,
            (Rotation::Vertical, false, true) => ShipPiece::Bottom,
            (Rotation::Vertical, false, false) => ShipPiece::Vertical,
        }
    }

    /// Glyph used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            ShipPiece::Left => '<',
            ShipPiece::Horizontal => '-',
            ShipPiece::Right => '>',
            ShipPiece::Top => '^',
            ShipPiece::Vertical => '|',
            ShipPiece::Bottom => 'v',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mark {
    #[default]
    Untouched,
    Hit,
    Miss,
}

/// One cell of a board.
///
/// Hit and miss are kept as a single mark so they can never both be set, and
/// there is no way to clear a mark once it is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    ship: Option<(ShipId, ShipPiece)>,
    mark: Mark,
}

impl Tile {
    /// Open water, never shot.
    pub fn water() -> Self {
        Self::default()
    }

    /// Fresh, unhit ship segment.
    pub fn ship(id: ShipId, piece: ShipPiece) -> Self {
        Tile {
            ship: Some((id, piece)),
            mark: Mark::Untouched,
        }
    }

    pub fn ship_id(&self) -> Option<ShipId> {
        self.ship.map(|(id, _)| id)
    }

    pub fn ship_piece(&self) -> Option<ShipPiece> {
        self.ship.map(|(_, piece)| piece)
    }

    pub fn is_ship(&self) -> bool {
        self.ship.is_some()
    }

    pub fn is_hit(&self) -> bool {
        self.mark == Mark::Hit
    }

    pub fn is_miss(&self) -> bool {
        self.mark == Mark::Miss
    }

    /// True once the tile has been hit or missed.
    pub fn is_shot(&self) -> bool {
        self.mark != Mark::Untouched
    }

    /// Record a shot on this tile. Ship tiles become hit, water becomes miss.
    ///
    /// Returns `true` if a ship segment was hit. The board rejects repeated
    /// shots before they reach the tile.
    pub(crate) fn receive_shot(&mut self) -> bool {
        if self.is_ship() {
            self.mark = Mark::Hit;
            true
        } else {
            self.mark = Mark::Miss;
            false
        }
    }
}
