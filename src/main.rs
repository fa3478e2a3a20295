use badminton_elo::console::{clear_screen, parse_number, pause, prompt};
use badminton_elo::constants::*;
use badminton_elo::{report, Store};
use clap::Parser;
use color_eyre::eyre::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Record badminton doubles results and track player ratings.
#[derive(Parser)]
#[command(name = "badminton", version)]
struct Args {
    /// Data file shared with the pairer
    #[arg(long, env = DATA_FILE_ENV, default_value = DATA_FILE)]
    data_file: PathBuf,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut store = Store::load(args.data_file)?;

    loop {
        clear_screen()?;
        println!("\n=== Badminton Match Tracker ===");
        println!("1. Add Player");
        println!("2. Record Match");
        println!("3. View Player Stats");
        println!("4. View All Players");
        println!("5. View Match History");
        println!("6. Export Rankings (CSV)");
        println!("0. Exit");
        println!("==============================");

        let choice = prompt("\nEnter your choice (0-6): ")?;
        clear_screen()?;
        let res = match choice.as_str() {
            "1" => add_player(&mut store),
            "2" => record_match(&mut store),
            "3" => player_stats(&store),
            "4" => list_players(&store),
            "5" => history(&store),
            "6" => export(&store),
            "0" => {
                println!("\nThank you for using Badminton Match Tracker!");
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

    Ok(())
}

fn add_player(store: &mut Store) -> Result<()> {
    println!("=== Add New Player ===");
    let name = prompt("Enter player name: ")?;
    if name.is_empty() {
        return Ok(());
    }
    if store.ensure_player(&name)? {
        println!("\nPlayer '{name}' added successfully!");
    } else {
        println!("\nPlayer '{name}' already exists!");
    }
    Ok(())
}

fn record_match(store: &mut Store) -> Result<()> {
    println!("=== Record Match ===");
    if store.all().len() < PLAYERS_PER_MATCH {
        println!("\nNot enough players! Please add more players first.");
        return Ok(());
    }

    println!("\nAvailable players:");
    for name in store.all().keys() {
        println!("- {name}");
    }

    println!("\nTeam 1:");
    let p1 = prompt("Enter first player name: ")?;
    let p2 = prompt("Enter second player name: ")?;
    println!("\nTeam 2:");
    let p3 = prompt("Enter first player name: ")?;
    let p4 = prompt("Enter second player name: ")?;

    for name in [&p1, &p2, &p3, &p4] {
        store.get(name)?;
    }

    println!("\nEnter scores:");
    let score1 = parse_number(&prompt("Team 1 score: ")?)?;
    let score2 = parse_number(&prompt("Team 2 score: ")?)?;

    let delta = store.record_match(
        [p1.as_str(), p2.as_str()],
        [p3.as_str(), p4.as_str()],
        score1,
        score2,
    )?;
    println!("\nMatch recorded successfully! Rating change: {delta:+.1}");
    Ok(())
}

fn player_stats(store: &Store) -> Result<()> {
    println!("=== Player Statistics ===");
    let name = prompt("\nEnter player name: ")?;
    let player = store.get(&name)?;
    println!();
    report::write_player_stats(&mut io::stdout(), &name, player)?;
    Ok(())
}

fn export(store: &Store) -> Result<()> {
    println!("=== Export Rankings ===");
    let path = prompt(&format!("\nOutput file [{RANKINGS_FILE}]: "))?;
    let path = if path.is_empty() {
        PathBuf::from(RANKINGS_FILE)
    } else {
        PathBuf::from(path)
    };
    report::export_csv(store.all(), &path)?;
    println!("\nRankings written to {}", path.display());
    Ok(())
}

fn list_players(store: &Store) -> Result<()> {
    println!("=== All Players ===\n");
    report::write_rankings(&mut io::stdout(), store.all())?;
    Ok(())
}

fn history(store: &Store) -> Result<()> {
    println!("=== Match History ===");
    report::write_history(&mut io::stdout(), store)?;
    Ok(())
}
