//! Turn resolution: placement phase, shooting phase and end of match.

use alloc::format;
use alloc::string::String;
use rand::Rng;

use crate::{
    board::Board,
    common::{ShotResult, Violation},
    config::GameConfig,
    player::StrategyAdapter,
    tile::ShipId,
};

/// Index of the other player.
pub fn opponent(player: usize) -> usize {
    1 - player
}

/// Where a match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The given player is placing its fleet.
    Placement(usize),
    /// Players alternate shots.
    Shooting,
    /// Match is over. Nothing changes until a new game is built.
    Ended,
}

/// What a single call to [`Game::play_turn`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The match was not in the shooting phase; nothing happened.
    Idle,
    /// A legal shot was resolved.
    Shot {
        shooter: usize,
        x: usize,
        y: usize,
        result: ShotResult,
        game_over: bool,
    },
    /// The shooter broke the contract and lost the match.
    Forfeit { offender: usize, violation: Violation },
}

/// One match between two players.
///
/// Board `i` holds player `i`'s own fleet; player `i` fires at board
/// `opponent(i)`.
#[derive(Debug, Clone)]
pub struct Game {
    boards: [Board; 2],
    first: usize,
    current: usize,
    phase: Phase,
    winner: Option<usize>,
    violation: Option<(usize, Violation)>,
    message: String,
    hint: String,
    shots: usize,
    next_ship_id: ShipId,
}

impl Game {
    /// Build a match, flipping a coin for who places and shoots first, and
    /// run the placement phase for both players.
    pub fn new<R: Rng + ?Sized>(
        config: &GameConfig,
        players: &mut [StrategyAdapter; 2],
        rng: &mut R,
    ) -> Self {
        let first = rng.random_range(0..2);
        Self::with_first_player(config, players, first)
    }

    /// Like [`Game::new`] with a fixed first player. `first` is taken modulo 2.
    pub fn with_first_player(
        config: &GameConfig,
        players: &mut [StrategyAdapter; 2],
        first: usize,
    ) -> Self {
        let first = first % 2;
        let mut game = Game {
            boards: [
                Board::new(config.width, config.height),
                Board::new(config.width, config.height),
            ],
            first,
            current: first,
            phase: Phase::Placement(first),
            winner: None,
            violation: None,
            message: String::new(),
            hint: String::new(),
            shots: 0,
            next_ship_id: ShipId::first(),
        };
        log::info!(
            "new match {} vs {}, {} goes first",
            players[0].name(),
            players[1].name(),
            players[first].name()
        );

        for player in [first, opponent(first)] {
            game.phase = Phase::Placement(player);
            if let Err(violation) = game.place_fleet(player, &config.fleet, players) {
                game.forfeit(player, violation, players);
                return game;
            }
        }
        game.phase = Phase::Shooting;
        game
    }

    fn place_fleet(
        &mut self,
        player: usize,
        fleet: &[usize],
        players: &mut [StrategyAdapter; 2],
    ) -> Result<(), Violation> {
        for &length in fleet {
            let board = &self.boards[player];
            let check = |x, y, rotation, length| board.is_valid_placement(x, y, rotation, length);
            let placement = players[player].place_ship(length, &check);

            let board = &mut self.boards[player];
            if !board.is_valid_placement(placement.x, placement.y, placement.rotation, length) {
                return Err(Violation::InvalidPlacement {
                    x: placement.x,
                    y: placement.y,
                    rotation: placement.rotation,
                    length,
                });
            }
            // validated above, so both coordinates are non-negative
            board.place_ship(
                placement.x as usize,
                placement.y as usize,
                length,
                placement.rotation,
                self.next_ship_id,
            );
            log::debug!(
                "{} placed ship {} (length {}) at ({}, {}) rotated {}",
                players[player].name(),
                self.next_ship_id.get(),
                length,
                placement.x,
                placement.y,
                placement.rotation.degrees()
            );
            self.next_ship_id = self.next_ship_id.next();
        }
        Ok(())
    }

    /// Resolve one shot by the current player.
    ///
    /// Once the match has ended this is a no-op returning [`TurnOutcome::Idle`].
    pub fn play_turn(&mut self, players: &mut [StrategyAdapter; 2]) -> TurnOutcome {
        if self.phase != Phase::Shooting {
            return TurnOutcome::Idle;
        }
        let shooter = self.current;
        let target = opponent(shooter);
        let (x, y) = players[shooter].get_move();

        let board = &mut self.boards[target];
        if !board.in_bounds(x, y) {
            return self.forfeit(shooter, Violation::OutOfBounds { x, y }, players);
        }
        let (ux, uy) = (x as usize, y as usize);
        // bounds were checked above, so the only failure left is a repeat
        let Ok(result) = board.receive_shot(ux, uy) else {
            return self.forfeit(shooter, Violation::RepeatedShot { x: ux, y: uy }, players);
        };
        self.shots += 1;
        log::trace!(
            "{} fires at ({}, {}): {:?}",
            players[shooter].name(),
            ux,
            uy,
            result
        );

        let game_over = self.boards[target].all_ships_sunk();
        if game_over {
            self.finish(shooter, players);
            self.hint = format!(
                "{} sank every ship of {} after {} shots",
                players[shooter].name(),
                players[target].name(),
                self.shots
            );
        }
        players[shooter].record_result(result);
        self.current = target;

        TurnOutcome::Shot {
            shooter,
            x: ux,
            y: uy,
            result,
            game_over,
        }
    }

    fn forfeit(
        &mut self,
        offender: usize,
        violation: Violation,
        players: &mut [StrategyAdapter; 2],
    ) -> TurnOutcome {
        log::warn!("{} {}", players[offender].name(), violation);
        self.finish(opponent(offender), players);
        self.violation = Some((offender, violation));
        self.hint = format!("{} {}", players[offender].name(), violation);
        TurnOutcome::Forfeit {
            offender,
            violation,
        }
    }

    fn finish(&mut self, winner: usize, players: &mut [StrategyAdapter; 2]) {
        players[winner].record_win();
        self.winner = Some(winner);
        self.phase = Phase::Ended;
        self.message = format!("Winner: {}", players[winner].name());
        log::info!("{}", self.message);
    }

    /// Board holding `player`'s own fleet.
    pub fn board(&self, player: usize) -> &Board {
        &self.boards[player]
    }

    pub fn boards(&self) -> &[Board; 2] {
        &self.boards
    }

    /// Board the current player is firing at.
    pub fn target_board(&self) -> &Board {
        &self.boards[opponent(self.current)]
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> usize {
        self.current
    }

    /// Player chosen by the coin flip to place and shoot first.
    pub fn first_player(&self) -> usize {
        self.first
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Contract violation that ended the match, with the offending player.
    pub fn violation(&self) -> Option<(usize, Violation)> {
        self.violation
    }

    /// Winner announcement, empty while the match is running.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Why the match ended, empty while it is running.
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Number of legal shots resolved so far.
    pub fn shots(&self) -> usize {
        self.shots
    }
}
