//! Repeated matches between the same two players.

use alloc::string::String;
use rand::rngs::SmallRng;

use crate::{
    config::GameConfig,
    game::{Game, TurnOutcome},
    player::StrategyAdapter,
};

/// Result of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchSummary {
    pub winner: usize,
    pub winner_name: String,
    pub shots: usize,
    pub hint: String,
}

/// Owns both players for the whole process and the match currently played.
///
/// Win tallies live in the players and survive every [`Session::new_game`];
/// boards and strategy memory do not.
pub struct Session {
    config: GameConfig,
    players: [StrategyAdapter; 2],
    game: Game,
    rng: SmallRng,
    games_played: u64,
    counted: bool,
}

impl Session {
    /// Start a session and its first match.
    pub fn new(config: GameConfig, mut players: [StrategyAdapter; 2], mut rng: SmallRng) -> Self {
        let game = Game::new(&config, &mut players, &mut rng);
        let mut session = Self {
            config,
            players,
            game,
            rng,
            games_played: 0,
            counted: false,
        };
        session.count_if_over();
        session
    }

    /// Throw away the current match and start a fresh one.
    pub fn new_game(&mut self) {
        for player in self.players.iter_mut() {
            player.reset();
        }
        self.game = Game::new(&self.config, &mut self.players, &mut self.rng);
        self.counted = false;
        self.count_if_over();
    }

    /// Advance by one game-loop step.
    ///
    /// Resolves at most one shot. When the match is already over, starts a
    /// new one if `auto_restart` is set; that step fires no shot.
    pub fn tick(&mut self) -> TurnOutcome {
        if self.game.is_over() {
            if self.config.auto_restart {
                self.new_game();
            }
            return TurnOutcome::Idle;
        }
        let outcome = self.game.play_turn(&mut self.players);
        self.count_if_over();
        outcome
    }

    /// Play the current match to its end.
    pub fn play_match(&mut self) -> MatchSummary {
        loop {
            if let Some(summary) = self.summary() {
                return summary;
            }
            self.game.play_turn(&mut self.players);
            self.count_if_over();
        }
    }

    /// Summary of the current match if it has ended.
    pub fn summary(&self) -> Option<MatchSummary> {
        let winner = self.game.winner()?;
        Some(MatchSummary {
            winner,
            winner_name: String::from(self.players[winner].name()),
            shots: self.game.shots(),
            hint: String::from(self.game.hint()),
        })
    }

    // A match can end during placement or on any shot; count it exactly once.
    fn count_if_over(&mut self) {
        if self.game.is_over() && !self.counted {
            self.games_played += 1;
            self.counted = true;
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn players(&self) -> &[StrategyAdapter; 2] {
        &self.players
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Win tallies of both players.
    pub fn wins(&self) -> [u32; 2] {
        [self.players[0].wins(), self.players[1].wins()]
    }

    /// Number of matches that have finished.
    pub fn games_played(&self) -> u64 {
        self.games_played
    }
}
