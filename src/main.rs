//! # Platforge CLI
//!
//! Loads, validates, and expands level files, and can author a small sample
//! level through the designer to demonstrate the from-scratch path.

use clap::{Parser, Subcommand};
use platforge::{
    expand, stage_level, validate, Designer, LevelRecord, Palette, PlatforgeResult, RecordingHost,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments for the platforge CLI.
#[derive(Parser, Debug)]
#[command(name = "platforge")]
#[command(about = "Grid-based level authoring, validation, and world expansion")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a level file and report every problem found
    Validate {
        /// Path to a level JSON file
        file: PathBuf,
    },
    /// Validate and expand a level file into world placements
    Expand {
        /// Path to a level JSON file
        file: PathBuf,

        /// Print the placement set as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Author a sample level through the designer and print its record
    Demo,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> PlatforgeResult<ExitCode> {
    match args.command {
        Command::Validate { file } => {
            let record = LevelRecord::load(&file)?;
            let errors = validate(&record);
            if errors.is_empty() {
                println!("{}: ok", file.display());
                Ok(ExitCode::SUCCESS)
            } else {
                for error in &errors {
                    println!("{}: {}", file.display(), error);
                }
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Expand { file, json } => {
            let record = LevelRecord::load(&file)?;
            let errors = validate(&record);
            if !errors.is_empty() {
                // Validation failures are expected for user-authored content;
                // report all of them and refuse to expand.
                for error in &errors {
                    eprintln!("{}: {}", file.display(), error);
                }
                return Ok(ExitCode::FAILURE);
            }

            let placements = expand(&record)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&placements)?);
            } else {
                let mut host = RecordingHost::new();
                stage_level(&mut host, &placements);
                println!(
                    "{}: spawn ({:.1}, {:.1}, {:.1}), goal ({:.1}, {:.1}, {:.1}), {} blocks, {} enemies, {} host calls",
                    file.display(),
                    placements.spawn.x,
                    placements.spawn.y,
                    placements.spawn.z,
                    placements.goal.x,
                    placements.goal.y,
                    placements.goal.z,
                    placements.blocks.len(),
                    placements.enemies.len(),
                    host.calls.len()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Demo => {
            let record = demo_level()?;
            println!("{}", record.to_json()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Builds the walled 5x5 sample level: border blocks, spawn in the middle,
/// goal on the south wall, one enemy.
fn demo_level() -> PlatforgeResult<LevelRecord> {
    let mut designer = Designer::new(5, 5);
    for i in 0..5 {
        designer.set_block(i, 0)?;
        designer.set_block(i, 4)?;
        designer.set_block(0, i)?;
        designer.set_block(4, i)?;
    }
    designer.set_spawn(2, 2)?;
    designer.set_goal(2, 4)?;
    designer.add_enemy(1, 3)?;
    designer.set_theme("classic");
    designer.set_palette(Palette {
        background: Some("#000000".to_string()),
        primary: Some("#4040ff".to_string()),
        accent: Some("#ffff00".to_string()),
    });
    Ok(designer.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_level_is_valid_and_expandable() {
        let record = demo_level().unwrap();
        assert!(validate(&record).is_empty());

        let placements = expand(&record).unwrap();
        // 16 border blocks, minus the goal cell carved out of the south wall
        assert_eq!(placements.blocks.len(), 15);
        assert_eq!(placements.enemies.len(), 1);
    }
}
