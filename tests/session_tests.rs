mod common;

use battleship_arena::{Session, ShotResult, TurnOutcome};
use common::{config, h, scripted, Script};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Alpha always wins: it sinks beta's only ship with its first shot, and beta
/// forfeits with an off-grid shot if it fires first.
fn lopsided_session(auto_restart: bool, seed: u64) -> Session {
    let mut cfg = config(3, 3, &[1]);
    cfg.auto_restart = auto_restart;
    let (alpha, _) = scripted("alpha", &cfg, Script::new(vec![h(0, 0)], vec![(2, 2)]));
    let (beta, _) = scripted("beta", &cfg, Script::new(vec![h(2, 2)], vec![(-1, -1)]));
    Session::new(cfg, [alpha, beta], SmallRng::seed_from_u64(seed))
}

#[test]
fn test_tallies_survive_new_games() {
    let mut session = lopsided_session(false, 7);
    for played in 1..=4u32 {
        let summary = session.play_match();
        assert_eq!(summary.winner, 0);
        assert_eq!(summary.winner_name, "alpha");
        assert_eq!(session.wins(), [played, 0]);
        assert_eq!(session.games_played(), u64::from(played));
        session.new_game();
        assert!(!session.game().is_over());
        assert_eq!(session.game().shots(), 0);
    }
    assert_eq!(session.wins(), [4, 0]);
}

#[test]
fn test_new_game_resets_players() {
    let mut cfg = config(4, 4, &[1]);
    cfg.auto_restart = false;
    let (alpha, alpha_log) = scripted("alpha", &cfg, Script::new(vec![h(0, 0)], vec![(1, 1), (2, 2)]));
    let (beta, beta_log) = scripted("beta", &cfg, Script::new(vec![h(3, 3)], vec![(1, 1), (2, 2)]));
    let mut session = Session::new(cfg, [alpha, beta], SmallRng::seed_from_u64(1));
    assert_eq!(alpha_log.borrow().builds, 1);

    session.tick();
    session.tick();
    let first = session.game().first_player();
    assert_eq!(
        session.players()[first].last_result(),
        Some(ShotResult::Miss)
    );

    session.new_game();
    assert_eq!(alpha_log.borrow().builds, 2);
    assert_eq!(beta_log.borrow().builds, 2);
    assert_eq!(session.players()[0].last_result(), None);
    assert_eq!(session.players()[1].last_result(), None);
    assert_eq!(session.players()[0].name(), "alpha");
    assert_eq!(session.games_played(), 0);
}

#[test]
fn test_tick_restarts_after_end() {
    let mut session = lopsided_session(true, 3);
    let mut ticks = 0;
    while !session.game().is_over() {
        assert!(!matches!(session.tick(), TurnOutcome::Idle));
        ticks += 1;
        assert!(ticks <= 2);
    }
    assert_eq!(session.wins(), [1, 0]);
    assert_eq!(session.games_played(), 1);
    assert!(session.summary().is_some());

    // the next tick only swaps in a fresh game
    assert_eq!(session.tick(), TurnOutcome::Idle);
    assert!(!session.game().is_over());
    assert_eq!(session.game().shots(), 0);
    assert!(session.summary().is_none());
    assert_eq!(session.wins(), [1, 0]);
}

#[test]
fn test_tick_without_restart_is_sticky() {
    let mut session = lopsided_session(false, 11);
    session.play_match();
    for _ in 0..3 {
        assert_eq!(session.tick(), TurnOutcome::Idle);
        assert!(session.game().is_over());
    }
    assert_eq!(session.games_played(), 1);
    assert_eq!(session.wins(), [1, 0]);
}

#[test]
fn test_many_seeds_same_winner() {
    for seed in 0..16 {
        let mut session = lopsided_session(false, seed);
        let summary = session.play_match();
        assert_eq!(summary.winner, 0, "seed {}", seed);
        if session.game().first_player() == 1 {
            assert!(summary.hint.contains("out of bounds"));
            assert_eq!(summary.shots, 0);
        } else {
            assert_eq!(summary.shots, 1);
        }
    }
}
