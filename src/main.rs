#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_arena::{init_logging, ui, GameConfig, Session, StrategyRegistry};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::{io, path::PathBuf, thread, time::Duration};

#[cfg(feature = "std")]
#[derive(Parser)]
#[command(author, version, about = "Watch two battleship AIs play each other", long_about = None)]
struct Cli {
    /// Strategy for the first player (see --list).
    #[arg(long)]
    ai1: Option<String>,
    /// Strategy for the second player (see --list).
    #[arg(long)]
    ai2: Option<String>,
    /// How fast the game should update.
    #[arg(long)]
    fps: Option<u32>,
    /// JSON file with board size, fleet and frame rate.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    /// Stop after this many finished games.
    #[arg(long)]
    games: Option<u64>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Wait for Enter between games instead of restarting automatically.
    #[arg(long)]
    manual: bool,
    /// List the available strategies and exit.
    #[arg(long)]
    list: bool,
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>, offset: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(offset)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging(log::LevelFilter::Warn);
    let cli = Cli::parse();
    let registry = StrategyRegistry::with_builtins();

    if cli.list {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(fps) = cli.fps {
        config.fps = fps;
    }
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if cli.manual {
        config.auto_restart = false;
    }
    config.validate()?;

    let (Some(ai1), Some(ai2)) = (cli.ai1.as_deref(), cli.ai2.as_deref()) else {
        anyhow::bail!("You must provide two AIs! Use --ai1 and --ai2 (see --list)");
    };
    let build = |name: &str, offset: u64| {
        registry
            .adapter(name, config.width, config.height, seeded_rng(cli.seed, offset))
            .ok_or_else(|| anyhow::anyhow!("unknown strategy '{}'", name))
    };
    let players = [build(ai1, 1)?, build(ai2, 2)?];
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (games will be reproducible)", s);
    }

    let frame = Duration::from_secs(1) / config.fps;
    let mut session = Session::new(config, players, seeded_rng(cli.seed, 0));
    loop {
        session.tick();
        print!("\x1b[2J\x1b[H");
        print!("{}", ui::render_frame(session.game(), session.players()));
        println!("{}", ui::LEGEND);

        if session.game().is_over() {
            if cli.games.is_some_and(|n| session.games_played() >= n) {
                break;
            }
            if !session.config().auto_restart {
                println!("{}", ui::RESTART_PROMPT);
                if !ui::wait_for_restart(&mut io::stdin().lock())? {
                    break;
                }
                session.new_game();
                continue;
            }
        }
        thread::sleep(frame);
    }

    let wins = session.wins();
    println!(
        "\n{} games: {} {} - {} {}",
        session.games_played(),
        session.players()[0].name(),
        wins[0],
        wins[1],
        session.players()[1].name()
    );
    Ok(())
}
