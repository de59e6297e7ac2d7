use clap::{Parser, Subcommand};

use notenrechner::grading::{evaluate, validate, CalculationInput, ScoringMode};
use notenrechner::output;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Grade a score on the official IHK 100-point key
    Ihk {
        /// Achieved points (0-100, or 0-MAX with --max-points)
        points: u32,

        /// Scale an arbitrary maximum onto the 100-point key first
        #[arg(long)]
        max_points: Option<u32>,
    },
    /// Grade a score on a linear key over an arbitrary maximum
    Custom {
        /// Achieved points
        points: u32,

        /// Maximum achievable points (must be positive)
        max_points: u32,
    },
    /// Interactive session with in-memory history (default if no subcommand)
    Session,
}

#[derive(Parser, Debug)]
#[command(name = "notenrechner")]
#[command(about = "Point-score to grade calculator (IHK and custom scales)", long_about = None)]
#[command(version)]
struct Cli {
    /// Emit the result as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Session);

    match command {
        Commands::Ihk { points, max_points } => {
            run_calculation(ScoringMode::Ihk, points, max_points, cli.json)
        }
        Commands::Custom { points, max_points } => {
            run_calculation(ScoringMode::Custom, points, Some(max_points), cli.json)
        }
        Commands::Session => {
            if let Err(e) = notenrechner::session::run() {
                eprintln!("Session error: {}", e);
                std::process::exit(1);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// One-shot calculation: validate, evaluate, print, exit.
fn run_calculation(mode: ScoringMode, points: u32, max_points: Option<u32>, json: bool) {
    let input = CalculationInput {
        mode,
        points,
        max_points,
    };

    // Caller-side contract: refuse out-of-range input instead of letting the
    // engine clamp it.
    if let Err(errors) = validate(&input) {
        eprintln!("Invalid input:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_INPUT);
    }

    let result = evaluate(&input);

    if json {
        match output::result_json(&input, &result) {
            Ok(payload) => println!("{}", payload),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        // Plain IHK scores are always out of 100 for the percentage line.
        let display_max = match (mode, max_points) {
            (_, Some(max)) => Some(max),
            (ScoringMode::Ihk, None) => Some(100),
            (ScoringMode::Custom, None) => None,
        };
        let use_colors = output::should_use_colors();
        println!(
            "{}",
            output::format_result(points, display_max, &result, use_colors)
        );
    }
}
