use std::path::PathBuf;
use std::process;

use clap::Parser;
use netwise::{Game, RewardOverrides, load_catalog, load_game};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file describing the game to play
    #[arg(short, long)]
    game: PathBuf,

    /// Catalog file, used for the "up next" hint on the results screen
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Coins per correct answer, unless the game file pins its own value
    #[arg(long)]
    coins: Option<u32>,

    /// XP per correct answer, unless the game file pins its own value
    #[arg(long)]
    xp: Option<u32>,
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let spec = load_game(&args.game).expect("Failed to load game");
    let overrides = RewardOverrides {
        coins_per_correct: args.coins,
        xp_per_correct: args.xp,
    };

    let mut game = Game::with_rewards(spec, Some(overrides)).expect("Failed to build game");
    if let Some(path) = &args.catalog {
        let catalog = load_catalog(path).expect("Failed to load catalog");
        game = game.with_catalog(catalog);
    }

    if let Err(e) = game.run().await {
        eprintln!("Error running game: {}", e);
        process::exit(1);
    }
}
