//! Arena configuration: board size, fleet and frame rate.

use alloc::vec::Vec;
use core::fmt;

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 10;
/// Ship lengths placed by each player, in placement order.
pub const SHIPS: [usize; 5] = [5, 4, 3, 3, 2];
pub const FPS: u32 = 10;

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default, deny_unknown_fields))]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Ship lengths, placed in this order by both players.
    pub fleet: Vec<usize>,
    /// Frames rendered per second by the interactive runner.
    pub fps: u32,
    /// Start a new game automatically once a match has ended.
    pub auto_restart: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            fleet: SHIPS.to_vec(),
            fps: FPS,
            auto_restart: true,
        }
    }
}

/// Reasons a configuration is rejected at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is zero.
    EmptyBoard { width: usize, height: usize },
    /// Board has more tiles than shot coordinates can address.
    BoardTooLarge { width: usize, height: usize },
    /// No ships to place.
    EmptyFleet,
    /// A ship cannot fit on the board along either axis.
    ShipDoesNotFit { length: usize },
    /// Fleet has more ship tiles than the board has tiles.
    FleetTooLarge { tiles: usize, capacity: usize },
    /// Frame rate of zero.
    ZeroFps,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard { width, height } => {
                write!(f, "board dimensions must be non-zero, got {}x{}", width, height)
            }
            ConfigError::BoardTooLarge { width, height } => {
                write!(f, "board {}x{} is too large", width, height)
            }
            ConfigError::EmptyFleet => write!(f, "fleet must contain at least one ship"),
            ConfigError::ShipDoesNotFit { length } => {
                write!(f, "ship of length {} does not fit on the board", length)
            }
            ConfigError::FleetTooLarge { tiles, capacity } => write!(
                f,
                "fleet needs {} tiles but the board only has {}",
                tiles, capacity
            ),
            ConfigError::ZeroFps => write!(f, "fps must be at least 1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBoard { width, height });
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(ConfigError::BoardTooLarge { width, height });
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        let longest = width.max(height);
        if let Some(&length) = self.fleet.iter().find(|&&l| l == 0 || l > longest) {
            return Err(ConfigError::ShipDoesNotFit { length });
        }
        let capacity = width * height;
        if self.fleet_tiles() > capacity {
            return Err(ConfigError::FleetTooLarge {
                tiles: self.fleet_tiles(),
                capacity,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(())
    }

    /// Total number of ship tiles each player places.
    pub fn fleet_tiles(&self) -> usize {
        self.fleet.iter().sum()
    }

    /// Read a JSON config file. Missing fields take their default values.
    #[cfg(feature = "std")]
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }
}
