use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::{
    ai,
    common::ShotResult,
    player::{Placement, PlacementCheck, Strategy, StrategyAdapter},
};

/// Places ships at random and sweeps the board row by row.
pub struct SequentialAi {
    width: usize,
    height: usize,
    rng: SmallRng,
    moves: VecDeque<(i32, i32)>,
}

impl SequentialAi {
    pub fn new(width: usize, height: usize, rng: SmallRng) -> Self {
        Self {
            width,
            height,
            rng,
            moves: ai::all_moves(width, height).into(),
        }
    }
}

impl Strategy for SequentialAi {
    fn place_ship(&mut self, length: usize, is_valid: &PlacementCheck<'_>) -> Placement {
        ai::random_placement(&mut self.rng, self.width, self.height, length, is_valid)
    }

    fn get_move(&mut self, _last_result: Option<ShotResult>) -> (i32, i32) {
        self.moves.pop_front().unwrap_or((0, 0))
    }
}

/// Places ships at random and fires at every tile once in random order.
pub struct RandomAi {
    width: usize,
    height: usize,
    rng: SmallRng,
    moves: Vec<(i32, i32)>,
}

impl RandomAi {
    pub fn new(width: usize, height: usize, mut rng: SmallRng) -> Self {
        let mut moves = ai::all_moves(width, height);
        moves.shuffle(&mut rng);
        Self {
            width,
            height,
            rng,
            moves,
        }
    }
}

impl Strategy for RandomAi {
    fn place_ship(&mut self, length: usize, is_valid: &PlacementCheck<'_>) -> Placement {
        ai::random_placement(&mut self.rng, self.width, self.height, length, is_valid)
    }

    fn get_move(&mut self, _last_result: Option<ShotResult>) -> (i32, i32) {
        self.moves.pop().unwrap_or((0, 0))
    }
}

/// Hunt/target player: fires on a checkerboard until it hits, then works
/// through the neighbours of every hit until the ship sinks.
pub struct HunterAi {
    width: usize,
    height: usize,
    rng: SmallRng,
    tried: Vec<bool>,
    hunt: Vec<(i32, i32)>,
    targets: Vec<(i32, i32)>,
    last_shot: Option<(i32, i32)>,
}

impl HunterAi {
    pub fn new(width: usize, height: usize, mut rng: SmallRng) -> Self {
        let mut hunt = ai::all_moves(width, height);
        hunt.shuffle(&mut rng);
        // Odd-parity tiles go to the front, so they are popped last.
        hunt.sort_by_key(|&(x, y)| (x + y) % 2 == 0);
        Self {
            width,
            height,
            rng,
            tried: alloc::vec![false; width * height],
            hunt,
            targets: Vec::new(),
            last_shot: None,
        }
    }

    fn is_tried(&self, (x, y): (i32, i32)) -> bool {
        self.tried[y as usize * self.width + x as usize]
    }
}

impl Strategy for HunterAi {
    fn place_ship(&mut self, length: usize, is_valid: &PlacementCheck<'_>) -> Placement {
        ai::random_placement(&mut self.rng, self.width, self.height, length, is_valid)
    }

    fn get_move(&mut self, last_result: Option<ShotResult>) -> (i32, i32) {
        match (last_result, self.last_shot) {
            (Some(ShotResult::Hit), Some((x, y))) => {
                let fresh: Vec<_> = ai::neighbours(x, y, self.width, self.height)
                    .filter(|&c| !self.is_tried(c))
                    .collect();
                self.targets.extend(fresh);
            }
            (Some(ShotResult::Sunk), _) => self.targets.clear(),
            _ => {}
        }

        let next = loop {
            let candidate = match self.targets.pop() {
                Some(c) => Some(c),
                None => self.hunt.pop(),
            };
            match candidate {
                Some(c) if self.is_tried(c) => continue,
                other => break other,
            }
        };
        let (x, y) = next.unwrap_or((0, 0));
        if let Some(slot) = self.tried.get_mut(y as usize * self.width + x as usize) {
            *slot = true;
        }
        self.last_shot = Some((x, y));
        (x, y)
    }
}

/// Constructor signature shared by every registered strategy.
pub type StrategyFn = fn(usize, usize, SmallRng) -> Box<dyn Strategy>;

fn build_sequential(width: usize, height: usize, rng: SmallRng) -> Box<dyn Strategy> {
    Box::new(SequentialAi::new(width, height, rng))
}

fn build_random(width: usize, height: usize, rng: SmallRng) -> Box<dyn Strategy> {
    Box::new(RandomAi::new(width, height, rng))
}

fn build_hunter(width: usize, height: usize, rng: SmallRng) -> Box<dyn Strategy> {
    Box::new(HunterAi::new(width, height, rng))
}

/// Named strategies that can be selected at startup.
pub struct StrategyRegistry {
    entries: Vec<(&'static str, StrategyFn)>,
}

impl StrategyRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registry holding `sequential`, `random` and `hunter`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("sequential", build_sequential);
        registry.register("random", build_random);
        registry.register("hunter", build_hunter);
        registry
    }

    /// Add a strategy, replacing any previous one with the same name.
    pub fn register(&mut self, name: &'static str, build: StrategyFn) {
        self.entries.retain(|(n, _)| *n != name);
        self.entries.push((name, build));
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub fn get(&self, name: &str) -> Option<StrategyFn> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, build)| *build)
    }

    /// Build an adapter for the named strategy, or `None` if it is unknown.
    pub fn adapter(
        &self,
        name: &str,
        width: usize,
        height: usize,
        rng: SmallRng,
    ) -> Option<StrategyAdapter> {
        let build = self.get(name)?;
        Some(StrategyAdapter::new(
            name,
            width,
            height,
            Box::new(build),
            rng,
        ))
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
