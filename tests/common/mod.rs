#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use battleship_arena::{
    GameConfig, Placement, PlacementCheck, Rotation, ShotResult, Strategy, StrategyAdapter,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Fixed answers replayed by a [`Scripted`] strategy.
#[derive(Clone, Default)]
pub struct Script {
    pub placements: Vec<Placement>,
    pub moves: Vec<(i32, i32)>,
    /// Asked through the validity callback on every placement request.
    pub probes: Vec<(i32, i32, Rotation, usize)>,
}

impl Script {
    pub fn new(placements: Vec<Placement>, moves: Vec<(i32, i32)>) -> Self {
        Self {
            placements,
            moves,
            probes: Vec::new(),
        }
    }
}

/// What the engine handed to a scripted strategy.
#[derive(Default, Debug)]
pub struct Record {
    pub seen: Vec<Option<ShotResult>>,
    pub probe_answers: Vec<bool>,
    /// Ship lengths asked for, in request order.
    pub lengths: Vec<usize>,
    pub builds: usize,
}

pub struct Scripted {
    placements: VecDeque<Placement>,
    moves: VecDeque<(i32, i32)>,
    probes: Vec<(i32, i32, Rotation, usize)>,
    record: Rc<RefCell<Record>>,
}

impl Strategy for Scripted {
    fn place_ship(&mut self, length: usize, is_valid: &PlacementCheck<'_>) -> Placement {
        self.record.borrow_mut().lengths.push(length);
        for &(x, y, r, l) in &self.probes {
            self.record.borrow_mut().probe_answers.push(is_valid(x, y, r, l));
        }
        self.placements
            .pop_front()
            .unwrap_or(Placement::new(0, 0, Rotation::Horizontal))
    }

    fn get_move(&mut self, last_result: Option<ShotResult>) -> (i32, i32) {
        self.record.borrow_mut().seen.push(last_result);
        self.moves.pop_front().unwrap_or((0, 0))
    }
}

/// Adapter replaying `script`; every reset starts the script over.
pub fn scripted(
    name: &str,
    config: &GameConfig,
    script: Script,
) -> (StrategyAdapter, Rc<RefCell<Record>>) {
    let record = Rc::new(RefCell::new(Record::default()));
    let shared = Rc::clone(&record);
    let adapter = StrategyAdapter::new(
        name,
        config.width,
        config.height,
        Box::new(move |_: usize, _: usize, _: SmallRng| -> Box<dyn Strategy> {
            shared.borrow_mut().builds += 1;
            Box::new(Scripted {
                placements: script.placements.clone().into(),
                moves: script.moves.clone().into(),
                probes: script.probes.clone(),
                record: Rc::clone(&shared),
            })
        }),
        SmallRng::seed_from_u64(0),
    );
    (adapter, record)
}

pub fn h(x: i32, y: i32) -> Placement {
    Placement::new(x, y, Rotation::Horizontal)
}

pub fn v(x: i32, y: i32) -> Placement {
    Placement::new(x, y, Rotation::Vertical)
}

/// Small config with the given board and fleet, no auto restart.
pub fn config(width: usize, height: usize, fleet: &[usize]) -> GameConfig {
    GameConfig {
        width,
        height,
        fleet: fleet.to_vec(),
        fps: 10,
        auto_restart: false,
    }
}
