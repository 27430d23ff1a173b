use alloc::boxed::Box;
use alloc::string::String;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{common::ShotResult, tile::Rotation};

/// Ship placement answered by a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub rotation: Rotation,
}

impl Placement {
    pub fn new(x: i32, y: i32, rotation: Rotation) -> Self {
        Self { x, y, rotation }
    }
}

/// Validity check handed to [`Strategy::place_ship`]: `(x, y, rotation, length)`.
pub type PlacementCheck<'a> = dyn Fn(i32, i32, Rotation, usize) -> bool + 'a;

/// Interface implemented by every pluggable AI.
///
/// The engine calls these synchronously and re-validates every answer; an
/// illegal answer loses the match on the spot.
pub trait Strategy {
    /// Choose where to put a ship of `length`. `is_valid` may be called any
    /// number of times and checks against this player's own board.
    fn place_ship(&mut self, length: usize, is_valid: &PlacementCheck<'_>) -> Placement;

    /// Choose the next coordinate to fire at. `last_result` is the outcome of
    /// this strategy's previous shot, `None` on the first move.
    fn get_move(&mut self, last_result: Option<ShotResult>) -> (i32, i32);
}

/// Builds a fresh strategy for a `width × height` board.
pub type StrategyBuilder = Box<dyn FnMut(usize, usize, SmallRng) -> Box<dyn Strategy>>;

/// Engine-side wrapper around one player's strategy.
///
/// `name` and `wins` survive [`StrategyAdapter::reset`]; the strategy itself
/// and `last_result` do not.
pub struct StrategyAdapter {
    name: String,
    wins: u32,
    last_result: Option<ShotResult>,
    width: usize,
    height: usize,
    builder: StrategyBuilder,
    rng: SmallRng,
    strategy: Box<dyn Strategy>,
}

impl StrategyAdapter {
    /// Wrap a strategy builder. `rng` seeds every instance the builder creates.
    pub fn new(
        name: impl Into<String>,
        width: usize,
        height: usize,
        mut builder: StrategyBuilder,
        mut rng: SmallRng,
    ) -> Self {
        let strategy = builder(width, height, SmallRng::from_rng(&mut rng));
        Self {
            name: name.into(),
            wins: 0,
            last_result: None,
            width,
            height,
            builder,
            rng,
            strategy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn last_result(&self) -> Option<ShotResult> {
        self.last_result
    }

    /// Replace the strategy with a fresh instance that remembers nothing.
    pub fn reset(&mut self) {
        let rng = SmallRng::from_rng(&mut self.rng);
        self.strategy = (self.builder)(self.width, self.height, rng);
        self.last_result = None;
    }

    pub fn place_ship(&mut self, length: usize, is_valid: &PlacementCheck<'_>) -> Placement {
        self.strategy.place_ship(length, is_valid)
    }

    /// Ask for a move, passing the result of this player's previous shot.
    pub fn get_move(&mut self) -> (i32, i32) {
        self.strategy.get_move(self.last_result)
    }

    pub(crate) fn record_result(&mut self, result: ShotResult) {
        self.last_result = Some(result);
    }

    pub(crate) fn record_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }
}

impl core::fmt::Debug for StrategyAdapter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StrategyAdapter")
            .field("name", &self.name)
            .field("wins", &self.wins)
            .field("last_result", &self.last_result)
            .finish_non_exhaustive()
    }
}
