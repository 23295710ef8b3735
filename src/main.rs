use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::json;
use uuid::Uuid;

use armada::{
    init_logging, render_board, Coord, GameService, GuessSubmission, MemoryStore, GRID_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a full game against a generated layout by random guessing.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = "cli")]
        player: String,
    },
    /// Replay a JSON guess-submission log into a fresh game and print the
    /// reconstructed state. Legacy field names are accepted.
    Replay {
        file: PathBuf,
        #[arg(long, help = "Fix RNG seed for a reproducible layout")]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sim { seed, player } => sim(seed, player).await,
        Commands::Replay { file, seed } => replay(file, seed).await,
    }
}

fn service_for(seed: Option<u64>) -> GameService<MemoryStore> {
    match seed {
        Some(seed) => GameService::with_seed(MemoryStore::new(), seed),
        None => GameService::new(MemoryStore::new()),
    }
}

async fn sim(seed: Option<u64>, player: String) -> anyhow::Result<()> {
    let service = service_for(seed);
    let game_id = service.create_game().await?;

    let mut coords: Vec<Coord> = (0..GRID_SIZE)
        .flat_map(|y| (0..GRID_SIZE).map(move |x| Coord::new(x, y)))
        .collect();
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(1)),
        None => SmallRng::from_os_rng(),
    };
    coords.shuffle(&mut rng);

    let mut guesses = 0usize;
    for coord in coords {
        let report = service
            .submit_guess(GuessSubmission {
                game_id,
                player_name: player.clone(),
                x: coord.x,
                y: coord.y,
            })
            .await?;
        guesses += 1;
        if report.state.game_over {
            println!("{}", render_board(&report.state.board));
            break;
        }
    }

    let history = service.history().await?;
    let scores = service.scores().await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "game_id": game_id,
            "guesses": guesses,
            "history": history,
            "scores": scores,
        }))?
    );
    Ok(())
}

async fn replay(file: PathBuf, seed: Option<u64>) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("reading {}", file.display()))?;
    let submissions: Vec<GuessSubmission> =
        serde_json::from_str(&text).context("parsing guess log")?;

    let service = service_for(seed);
    let game_id = Uuid::new_v4();
    let mut last = None;
    for mut submission in submissions {
        submission.game_id = game_id;
        match service.submit_guess(submission).await {
            Ok(report) => last = Some(report),
            // tolerate repeats and stray coordinates in hand-written logs
            Err(err) => eprintln!("skipping guess: {err}"),
        }
    }

    match last {
        Some(report) => {
            println!("{}", render_board(&report.state.board));
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        None => println!("log contained no usable guesses"),
    }
    Ok(())
}
