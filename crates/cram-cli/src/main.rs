//! `cram` — spaced-repetition flashcards in your terminal, graded by a chat
//! model.
//!
//! Subcommands: `practice` runs a review session over a deck's due cards,
//! `add` appends a card, `list` prints the deck, and `configure` sets up the
//! model provider credentials.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Local;
use clap::{Parser, Subcommand};
use cram::{Deck, ReviewSession};
use cram_quiz::{Config, Provider, Quiz};
use tracing::info;

/// Spaced-repetition flashcards graded by a chat model.
#[derive(Parser, Debug)]
#[command(name = "cram")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Practice the due cards in a deck
    Practice {
        /// Path to the deck file (.csv)
        deck: PathBuf,
    },
    /// Add a card to a deck
    Add {
        /// Path to the deck file (.csv)
        deck: PathBuf,
        /// Content of the new card
        content: String,
    },
    /// List the cards in a deck, one per line
    List {
        /// Path to the deck file (.csv)
        deck: PathBuf,
    },
    /// Configure the provider, API key, and model used for grading
    Configure,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Practice { deck } => practice(&deck).await,
        Command::Add { deck, content } => add(&deck, &content),
        Command::List { deck } => list(&deck),
        Command::Configure => configure(),
    }
}

async fn practice(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // The grader must be configured before any deck work begins.
    let config = Config::load(&Config::default_path()?)?;

    let mut deck = Deck::open(path)?;
    let today = Local::now().date_naive();
    let name = deck.name().to_string();

    let due = cram::scheduler::due_cards(deck.cards(), today).count();
    if due == 0 {
        println!("Nothing due today.");
        return Ok(());
    }
    info!(due, deck = %name, "starting practice session");

    let mut quiz = Quiz::new(&config, name.as_str());
    let report = ReviewSession::new(&mut quiz, today)
        .run(&mut deck, |err| {
            eprintln!("{err}");
            confirm("Failure in model response; try again?").unwrap_or(false)
        })
        .await?;

    println!(
        "\nReviewed {} cards: {} remembered, {} forgotten.",
        report.reviewed, report.remembered, report.forgotten
    );
    Ok(())
}

fn add(path: &Path, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut deck = Deck::open(path)?;
    deck.add(content, Local::now().date_naive())?;
    println!("Added \"{content}\" to {}", path.display());
    Ok(())
}

fn list(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let deck = Deck::open(path)?;
    for card in deck.cards() {
        println!("{}", card.content);
    }
    Ok(())
}

fn configure() -> Result<(), Box<dyn std::error::Error>> {
    let path = Config::default_path()?;

    let provider = prompt_provider()?;
    let api_key = prompt_required(&format!("{provider} API key"))?;
    let model = prompt_with_default("Model", provider.supported_models()[0])?;

    let config = Config {
        provider,
        api_key,
        model,
    };
    config.save(&path)?;
    println!("Config saved to {}", path.display());
    Ok(())
}

fn prompt_provider() -> io::Result<Provider> {
    let options: Vec<String> = Provider::ALL.iter().map(|p| p.to_string()).collect();
    loop {
        let raw = prompt_with_default(&format!("Provider ({})", options.join("/")), &options[0])?;
        match raw.parse() {
            Ok(provider) => return Ok(provider),
            Err(err) => eprintln!("{err}"),
        }
    }
}

fn prompt_required(label: &str) -> io::Result<String> {
    loop {
        let value = prompt(label)?;
        if !value.is_empty() {
            return Ok(value);
        }
        eprintln!("A value is required.");
    }
}

fn prompt_with_default(label: &str, default: &str) -> io::Result<String> {
    let value = prompt(&format!("{label} [{default}]"))?;
    if value.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(value)
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn confirm(label: &str) -> io::Result<bool> {
    let answer = prompt(&format!("{label} [y/N]"))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}
