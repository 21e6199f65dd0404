//! Round simulator CLI - plays rounds headlessly with a simulated learner.
//!
//! Every card goes through the real gesture adapters, scoring engine and
//! completion timer, so runs double as an end-to-end check of a config
//! and question pool.

mod metrics;
mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use metrics::build_round_metrics;
use output::OutputWriter;
use simulator::{LearnerProfile, RoundOutcome, Simulator};
use tracing::{info, warn};
use trizone::config::load_pool;
use trizone::domain::{Rect, Size, TouchAdapter, Zone, ZoneLayout};
use trizone::{GameConfig, GameSession, JsonFileStore, KeyValueStore, MemoryStore};
use types::{ModalityChoice, OutputFormat};

/// Card face size in the simulated viewport.
const CARD_SIZE: Size = Size::new(160.0, 90.0);

#[derive(Parser)]
#[command(name = "round-simulator")]
#[command(about = "Headless round simulator for the three-zone card game")]
struct Args {
    /// Number of rounds to play
    #[arg(short, long, default_value = "1")]
    rounds: u32,

    /// Probability that the learner picks the correct zone (0.0..=1.0)
    #[arg(long, default_value = "0.8")]
    accuracy: f64,

    /// Input modality used to move cards
    #[arg(long, default_value = "mixed")]
    modality: ModalityChoice,

    /// Probability that a drag is released outside every zone (0.0..1.0)
    #[arg(long, default_value = "0.1")]
    miss_rate: f64,

    /// Session seed; overrides TRIZONE_SEED
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format for per-round metrics
    #[arg(long, value_enum, default_value_t = OutputFormat::All)]
    output_format: OutputFormat,

    /// Compress JSONL output
    #[arg(long)]
    compress: bool,

    /// High score file; overrides TRIZONE_HIGHSCORE_PATH
    #[arg(long)]
    highscore_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging - silent by default, only show warnings/errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if !(0.0..=1.0).contains(&args.accuracy) {
        return Err(format!("--accuracy must be within 0.0..=1.0, got {}", args.accuracy).into());
    }
    if !(0.0..1.0).contains(&args.miss_rate) {
        return Err(format!("--miss-rate must be within 0.0..1.0, got {}", args.miss_rate).into());
    }

    let mut config = GameConfig::from_env()?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.highscore_file.is_some() {
        config.highscore_path = args.highscore_file.clone();
    }
    let pool = load_pool(config.question_pool_path.as_deref())?;
    let touch = TouchAdapter::new(layout()?, CARD_SIZE);
    let profile = LearnerProfile {
        accuracy: args.accuracy,
        miss_rate: args.miss_rate,
        modality: args.modality,
    };

    if args.show_output {
        info!(
            rounds = args.rounds,
            accuracy = args.accuracy,
            modality = ?args.modality,
            "starting round simulator"
        );
    }

    match config.highscore_path.clone() {
        Some(path) => {
            let store = JsonFileStore::open(path)?;
            run(&args, GameSession::new(config, pool, store, touch)?, profile)
        }
        None => run(
            &args,
            GameSession::new(config, pool, MemoryStore::new(), touch)?,
            profile,
        ),
    }
}

/// Three drop zones side by side under the deck.
fn layout() -> Result<ZoneLayout, Box<dyn std::error::Error>> {
    Ok(ZoneLayout::new(vec![
        (Zone::Green, Rect::new(0.0, 600.0, 320.0, 240.0)),
        (Zone::Yellow, Rect::new(340.0, 600.0, 320.0, 240.0)),
        (Zone::Red, Rect::new(680.0, 600.0, 320.0, 240.0)),
    ])?)
}

fn run<S: KeyValueStore>(
    args: &Args,
    session: GameSession<S>,
    profile: LearnerProfile,
) -> Result<(), Box<dyn std::error::Error>> {
    let session_seed = session.session_seed();
    let starting_high_score = session.high_score();
    let mut simulator = Simulator::new(session, session_seed ^ 0x5EED, profile);
    let mut output_writer = OutputWriter::new(&args.output_dir, args.output_format, args.compress, session_seed)?;

    let start = Instant::now();
    let mut outcomes = Vec::new();
    let mut errors = 0;

    for round in 1..=args.rounds {
        match simulator.play_round() {
            Ok(outcome) => {
                match build_round_metrics(&outcome, session_seed, args.modality) {
                    Ok(metrics) => {
                        if let Err(e) = output_writer.write_round(&metrics) {
                            warn!("Failed to write metrics for round {}: {}", round, e);
                        }
                    }
                    Err(e) => warn!("Failed to build metrics for round {}: {}", round, e),
                }
                if args.verbose {
                    info!(
                        "Round {} completed: score={} correct={}/{}",
                        round,
                        outcome.summary.score,
                        outcome.summary.correct_count,
                        outcome.summary.total_cards
                    );
                }
                outcomes.push(outcome);
            }
            Err(e) => {
                errors += 1;
                warn!("Round {} failed: {}", round, e);
                // A round that cannot be generated will not recover.
                break;
            }
        }
    }

    let elapsed = start.elapsed();
    let outputs = output_writer.outputs();
    output_writer.finish()?;

    if args.show_output {
        for (label, path) in &outputs {
            info!("Wrote {} to: {}", label, path.display());
        }
        print_summary(
            &outcomes,
            errors,
            elapsed,
            args.rounds,
            starting_high_score,
            simulator.session().high_score(),
        );
    }

    Ok(())
}

fn print_summary(
    outcomes: &[RoundOutcome],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
    starting_high_score: u32,
    final_high_score: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Rounds completed: {}/{}", outcomes.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    println!(
        "High score: {} -> {}",
        starting_high_score, final_high_score
    );

    if outcomes.is_empty() {
        return;
    }

    let rounds = outcomes.len() as f64;
    let total_score: u64 = outcomes.iter().map(|o| o.summary.score as u64).sum();
    let correct: usize = outcomes.iter().map(|o| o.summary.correct_count).sum();
    let cards: usize = outcomes.iter().map(|o| o.summary.total_cards).sum();
    let returned: u32 = outcomes.iter().map(|o| o.returned_gestures).sum();
    let pointer: u32 = outcomes.iter().map(|o| o.pointer_drops).sum();
    let touch: u32 = outcomes.iter().map(|o| o.touch_drops).sum();

    println!("\n=== Results ===");
    println!("Average score: {:.1}", total_score as f64 / rounds);
    if cards > 0 {
        println!(
            "Overall accuracy: {:.1}%",
            correct as f64 * 100.0 / cards as f64
        );
    }
    println!("Drops: pointer={} touch={} returned={}", pointer, touch, returned);
}
