#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    use battleship_arena::{init_logging, GameConfig, Session, StrategyRegistry};
    use clap::Parser;
    use rand::{rngs::SmallRng, SeedableRng};
    use serde_json::json;

    /// Play a batch of matches headless and print a JSON summary.
    #[derive(Parser)]
    struct Args {
        #[arg(long, default_value = "hunter")]
        ai1: String,
        #[arg(long, default_value = "random")]
        ai2: String,
        #[arg(long, default_value_t = 1)]
        games: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        config: Option<std::path::PathBuf>,
    }

    init_logging(log::LevelFilter::Error);
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    config.validate()?;

    let registry = StrategyRegistry::with_builtins();
    let build = |name: &str, offset: u64| {
        registry
            .adapter(
                name,
                config.width,
                config.height,
                SmallRng::seed_from_u64(args.seed.wrapping_add(offset)),
            )
            .ok_or_else(|| anyhow::anyhow!("unknown strategy '{}'", name))
    };
    let players = [build(&args.ai1, 1)?, build(&args.ai2, 2)?];
    let mut session = Session::new(config, players, SmallRng::seed_from_u64(args.seed));

    let mut shots = 0usize;
    let mut forfeits = 0u64;
    for game in 0..args.games {
        if game > 0 {
            session.new_game();
        }
        let summary = session.play_match();
        shots += summary.shots;
        if session.game().violation().is_some() {
            forfeits += 1;
        }
    }

    let wins = session.wins();
    let names = [session.players()[0].name(), session.players()[1].name()];
    let winner = match wins[0].cmp(&wins[1]) {
        std::cmp::Ordering::Greater => Some(names[0]),
        std::cmp::Ordering::Less => Some(names[1]),
        std::cmp::Ordering::Equal => None,
    };
    let result = json!({
        "player1": {"name": names[0], "wins": wins[0]},
        "player2": {"name": names[1], "wins": wins[1]},
        "games": session.games_played(),
        "shots": shots,
        "forfeits": forfeits,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
