use anyhow::Context;
use billdeck::logging::{self, Verbosity};
use billdeck::prelude::*;
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Swipe through legislative bills one card at a time
#[derive(Parser, Debug)]
#[command(name = "billdeck")]
#[command(about = "Navigate a deck of legislative bills and emit view models as JSON lines")]
#[command(version)]
struct Args {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(ClapArgs, Debug)]
struct GlobalArgs {
    /// Configuration file (YAML, or TOML with a .toml extension)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Navigation policy: wrap or clamp (can also use BILLDECK_POLICY env var)
    #[arg(long, global = true)]
    policy: Option<String>,

    /// Daily quota: a positive integer or "collection" (can also use BILLDECK_QUOTA env var)
    #[arg(long, global = true)]
    quota: Option<String>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only show errors on stderr
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the view model for the first bill
    Show {
        /// Bill file (.json, .yaml or .yml)
        #[arg(long)]
        bills: PathBuf,
    },

    /// Apply commands in order and print one update per command
    Swipe {
        /// Bill file (.json, .yaml or .yml)
        #[arg(long)]
        bills: PathBuf,

        /// Commands to apply: back, dislike, skip, like
        #[arg(num_args = 0..)]
        commands: Vec<String>,

        /// Read commands from stdin (one per line) after the positional ones
        /// Useful for stdio pipelines: cat moves.txt | billdeck swipe --bills bills.json --stdin
        #[arg(long)]
        stdin: bool,
    },

    /// Print every bill as a card for a scrolling list
    Cards {
        /// Bill file (.json, .yaml or .yml)
        #[arg(long)]
        bills: PathBuf,
    },

    /// Classify status labels into advisory categories
    Classify {
        /// Status labels, e.g. "Senate Floor"
        #[arg(required = true)]
        statuses: Vec<String>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Classification<'a> {
    status: &'a str,
    category: Category,
    advisory_message: Option<&'static str>,
    emphasis: bool,
}

fn print_available_commands() {
    println!("Available commands:");
    println!("  show      Print the view model for the first bill");
    println!("  swipe     Apply commands in order and print one update per command");
    println!("  cards     Print every bill as a card for a scrolling list");
    println!("  classify  Classify status labels into advisory categories");
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

fn resolve_config(global: &GlobalArgs) -> anyhow::Result<Config> {
    // Flag first, then environment variable, then config file, then default
    let base = match &global.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => Config::default(),
    };
    let mut builder = ConfigBuilder::from_config(base);

    let policy = global
        .policy
        .clone()
        .or_else(|| std::env::var("BILLDECK_POLICY").ok());
    if let Some(policy) = policy {
        builder = builder.policy_str(&policy)?;
    }

    let quota = global
        .quota
        .clone()
        .or_else(|| std::env::var("BILLDECK_QUOTA").ok());
    if let Some(quota) = quota {
        builder = builder.quota_str(&quota)?;
    }

    let config = builder.build()?;
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

fn load_engine(bills: &Path, config: &Config) -> anyhow::Result<BillCardEngine> {
    let deck = BillDeck::from_path(bills)
        .with_context(|| format!("Failed to load bills: {}", bills.display()))?;
    Ok(BillCardEngine::new(deck, config)?)
}

fn run_show_command(bills: &Path, config: &Config) -> anyhow::Result<()> {
    let engine = load_engine(bills, config)?;
    print_json(&engine.view()?)
}

fn run_swipe_command(
    bills: &Path,
    commands: Vec<String>,
    stdin: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let mut engine = load_engine(bills, config)?;
    if engine.deck().is_empty() {
        return Err(billdeck::Error::EmptyCollection.into());
    }

    // Commands are applied strictly in arrival order
    for raw in &commands {
        apply_raw_command(&mut engine, raw)?;
    }

    if stdin {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read command from stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            apply_raw_command(&mut engine, &line)?;
        }
    }

    Ok(())
}

/// Parse and dispatch one command; unknown commands are reported and skipped
fn apply_raw_command(engine: &mut BillCardEngine, raw: &str) -> anyhow::Result<()> {
    let command: billdeck::Command = match raw.parse() {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(());
        }
    };
    let update = engine.dispatch(command)?;
    print_json(&update)
}

fn run_cards_command(bills: &Path, config: &Config) -> anyhow::Result<()> {
    let engine = load_engine(bills, config)?;
    if engine.deck().is_empty() {
        return Err(billdeck::Error::EmptyCollection.into());
    }
    for card in engine.cards() {
        print_json(&card)?;
    }
    Ok(())
}

fn run_classify_command(statuses: &[String]) -> anyhow::Result<()> {
    for status in statuses {
        let category = classify(status);
        print_json(&Classification {
            status,
            category,
            advisory_message: category.advisory(),
            emphasis: category.needs_emphasis(),
        })?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_subscriber(Verbosity::from_flags(args.global.verbose, args.global.quiet));

    let Some(command) = args.command else {
        print_available_commands();
        return Ok(());
    };

    match command {
        Command::Show { bills } => {
            let config = resolve_config(&args.global)?;
            run_show_command(&bills, &config)
        }
        Command::Swipe {
            bills,
            commands,
            stdin,
        } => {
            let config = resolve_config(&args.global)?;
            run_swipe_command(&bills, commands, stdin, &config)
        }
        Command::Cards { bills } => {
            let config = resolve_config(&args.global)?;
            run_cards_command(&bills, &config)
        }
        Command::Classify { statuses } => run_classify_command(&statuses),
    }
}
