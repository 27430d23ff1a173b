//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Game, GameConfig, Placement, Rotation, Session, ShotResult, Strategy,
    StrategyAdapter, StrategyRegistry, TurnOutcome, Violation,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ui::render_frame};
