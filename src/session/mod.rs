//! Interactive calculation session.
//!
//! The session owns the history ledger for its lifetime; nothing is
//! persisted when the loop exits. The engine stays pure, all state lives
//! here in the calling layer.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use uuid::Uuid;

use crate::grading::{evaluate, validate, CalculationInput, ScoringMode};
use crate::history::{HistoryLedger, HistoryRecord};
use crate::output;

/// A parsed session command.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Nothing,
    Help,
    Quit,
    History,
    Clear,
    /// 1-based index into the most-recent-first history listing.
    Remove(usize),
    Calculate(CalculationInput),
}

const HELP_TEXT: &str = "\
Commands:
  ihk <points>            grade on the official IHK 100-point key
  ihk <points> <max>      scale an arbitrary maximum onto the IHK key
  custom <points> <max>   grade on a linear key over <max> points
  history                 show past calculations, newest first
  remove <index>          drop one history entry by its listed index
  clear                   drop the whole history
  help                    show this text
  quit                    leave the session";

/// Run the interactive read-eval loop until `quit` or end of input.
pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut ledger = HistoryLedger::new();
    let use_colors = output::should_use_colors();

    println!("notenrechner interactive session. Type 'help' for commands.");
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match parse_command(line.trim()) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(command, &mut ledger, use_colors),
            Err(message) => eprintln!("{}", message),
        }
    }
    Ok(())
}

fn execute(command: Command, ledger: &mut HistoryLedger, use_colors: bool) {
    match command {
        Command::Nothing | Command::Quit => {}
        Command::Help => println!("{}", HELP_TEXT),
        Command::History => {
            let newest_first: Vec<&HistoryRecord> = ledger.records().rev().collect();
            println!("{}", output::format_history(&newest_first, use_colors));
        }
        Command::Clear => {
            ledger.clear();
            println!("History cleared.");
        }
        Command::Remove(index) => {
            // Resolve the displayed index against the current listing order.
            let ids: Vec<Uuid> = ledger.records().rev().map(|r| r.id).collect();
            match index.checked_sub(1).and_then(|i| ids.get(i)) {
                Some(id) => {
                    ledger.remove(id);
                    println!("Removed entry {}.", index);
                }
                None => eprintln!(
                    "Invalid index {}. History has {} entries.",
                    index,
                    ids.len()
                ),
            }
        }
        Command::Calculate(input) => {
            if let Err(errors) = validate(&input) {
                eprintln!("Invalid input:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                return;
            }
            let result = evaluate(&input);
            let display_max = effective_max(&input);
            println!(
                "{}",
                output::format_result(input.points, display_max, &result, use_colors)
            );
            ledger.append(HistoryRecord::new(
                input.mode,
                input.points,
                input.max_points,
                &result,
            ));
        }
    }
}

/// Maximum to show percentages against. Plain IHK is always out of 100.
fn effective_max(input: &CalculationInput) -> Option<u32> {
    match (input.mode, input.max_points) {
        (_, Some(max)) => Some(max),
        (ScoringMode::Ihk, None) => Some(100),
        (ScoringMode::Custom, None) => None,
    }
}

fn parse_command(line: &str) -> Result<Command, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Ok(Command::Nothing),
        ["help"] => Ok(Command::Help),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        ["history"] => Ok(Command::History),
        ["clear"] => Ok(Command::Clear),
        ["remove", index] => {
            let index: usize = index
                .parse()
                .map_err(|_| format!("remove: '{}' is not an index", index))?;
            if index == 0 {
                return Err("remove: indices start at 1".to_string());
            }
            Ok(Command::Remove(index))
        }
        ["ihk", points] => Ok(Command::Calculate(CalculationInput {
            mode: ScoringMode::Ihk,
            points: parse_points(points, "points")?,
            max_points: None,
        })),
        ["ihk", points, max] => Ok(Command::Calculate(CalculationInput {
            mode: ScoringMode::Ihk,
            points: parse_points(points, "points")?,
            max_points: Some(parse_points(max, "max points")?),
        })),
        ["custom", points, max] => Ok(Command::Calculate(CalculationInput {
            mode: ScoringMode::Custom,
            points: parse_points(points, "points")?,
            max_points: Some(parse_points(max, "max points")?),
        })),
        _ => Err(format!(
            "Unknown command '{}'. Type 'help' for commands.",
            line
        )),
    }
}

fn parse_points(token: &str, name: &str) -> Result<u32, String> {
    token
        .parse()
        .map_err(|_| format!("{}: '{}' is not a non-negative integer", name, token))
}
