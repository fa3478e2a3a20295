use badminton_elo::console::{clear_screen, parse_number, pause, prompt};
use badminton_elo::constants::*;
use badminton_elo::{generate_pairings, report, Store};
use clap::Parser;
use color_eyre::eyre::Result;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Generate balanced doubles pairings from the tracker's ratings.
#[derive(Parser)]
#[command(name = "pairer", version)]
struct Args {
    /// Data file written by the tracker
    #[arg(long, env = DATA_FILE_ENV, default_value = DATA_FILE)]
    data_file: PathBuf,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let store = match Store::require(args.data_file) {
        Ok(store) => store,
        Err(e) => {
            println!("\nError: {e}");
            pause("\nPress Enter to exit...")?;
            return Ok(ExitCode::FAILURE);
        }
    };

    loop {
        clear_screen()?;
        println!("\n=== Tournament Pairing Generator ===");
        println!("1. Generate Pairings");
        println!("2. View All Players");
        println!("0. Exit");
        println!("=================================");

        let choice = prompt("\nEnter your choice (0-2): ")?;
        clear_screen()?;
        let res = match choice.as_str() {
            "1" => pairings(&store),
            "2" => list_players(&store),
            "0" => {
                println!("\nThank you for using Tournament Pairing Generator!");
                break;
            }
            _ => {
                println!("\nInvalid choice! Please try again.");
                Ok(())
            }
        };
        if let Err(e) = res {
            println!("\nError: {e}");
        }
        pause("\nPress Enter to continue...")?;
    }

    Ok(ExitCode::SUCCESS)
}

fn pairings(store: &Store) -> Result<()> {
    println!("=== Generate Pairings ===");
    let n = parse_number(&prompt("\nHow many matches to generate? ")?)?;
    let pairings = generate_pairings(store.all(), n)?;

    println!("\nGenerated pairings:");
    println!("===================");
    report::write_pairings(&mut io::stdout(), &pairings, store.all())?;
    Ok(())
}

fn list_players(store: &Store) -> Result<()> {
    println!("=== All Players ===\n");
    report::write_rankings(&mut io::stdout(), store.all())?;
    Ok(())
}
