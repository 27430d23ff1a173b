#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
pub mod prelude;
mod session;
mod tile;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::{all_moves, first_valid_placement, neighbours, random_placement};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::*;
pub use player_ai::*;
pub use session::*;
pub use tile::*;
