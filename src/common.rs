//! Common types for the arena: shot results, board errors and rule violations.

use core::fmt;

use crate::tile::Rotation;

/// Result of a resolved shot, as reported back to the shooter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotResult {
    /// Shot landed in open water.
    Miss,
    /// Shot hit a ship that still has unhit segments.
    Hit,
    /// Shot hit the last unhit segment of a ship.
    Sunk,
}

impl ShotResult {
    /// Numeric code handed to strategies: 0 miss, 1 hit, 2 hit and sunk.
    pub fn code(self) -> u8 {
        match self {
            ShotResult::Miss => 0,
            ShotResult::Hit => 1,
            ShotResult::Sunk => 2,
        }
    }

    /// Inverse of [`ShotResult::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ShotResult::Miss),
            1 => Some(ShotResult::Hit),
            2 => Some(ShotResult::Sunk),
            _ => None,
        }
    }

    /// True for both plain hits and sinking hits.
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by Board lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the board.
    OutOfBounds { x: i32, y: i32 },
    /// Tile was already hit or missed.
    AlreadyShot { x: usize, y: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => write!(f, "({}, {}) is out of bounds", x, y),
            BoardError::AlreadyShot { x, y } => write!(f, "({}, {}) was already shot", x, y),
        }
    }
}

/// A breach of the strategy contract. Ends the match as a loss for the offender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Returned a ship placement the validator rejects.
    InvalidPlacement {
        x: i32,
        y: i32,
        rotation: Rotation,
        length: usize,
    },
    /// Requested a shot outside the opponent's board.
    OutOfBounds { x: i32, y: i32 },
    /// Requested a shot at a tile that was already hit or missed.
    RepeatedShot { x: usize, y: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::InvalidPlacement {
                x,
                y,
                rotation,
                length,
            } => write!(
                f,
                "tried to place an invalid ship of length {} at ({}, {}) rotated {}",
                length,
                x,
                y,
                rotation.degrees()
            ),
            Violation::OutOfBounds { x, y } => {
                write!(f, "fired out of bounds at ({}, {})", x, y)
            }
            Violation::RepeatedShot { x, y } => {
                write!(f, "fired twice at ({}, {})", x, y)
            }
        }
    }
}
