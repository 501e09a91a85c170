//! Binary entrypoint for the dexroll CLI.
//!
//! Commands:
//! - `roll [--json] [--seed <n>]` - roll once and print the card (or JSON)
//! - `session [--seed <n>]` - interactive roller with history
//! - `init` - write a starter `config.toml`
//!
//! See the library crate docs for module-level details: `dexroll::`.
use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use dexroll::config::Config;
use dexroll::dex::render::{render_card, render_history};
use dexroll::dex::{PokeApiClient, Roller, RollerState};
use dexroll::metrics;

#[derive(Parser)]
#[command(name = "dexroll")]
#[command(about = "Roll a random creature and keep a history of past rolls")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll one creature and print it
    Roll {
        /// Print the record as JSON instead of a card
        #[arg(long)]
        json: bool,
        /// Fixed RNG seed (overrides roll.seed in the config)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Interactive roller: Enter rolls, h shows history, q quits
    Session {
        /// Fixed RNG seed (overrides roll.seed in the config)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write a default configuration file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            init_logging(&None, cli.verbose);
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Roll { json, seed } => {
            let config = load_config(&cli.config, seed, cli.verbose).await?;
            let client = PokeApiClient::new(&config.api);
            let mut roller = Roller::new(client, config.roll.clone());
            let record = roller.roll().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", render_card(Some(&record)));
            }
        }
        Commands::Session { seed } => {
            let config = load_config(&cli.config, seed, cli.verbose).await?;
            run_session(&config).await?;
        }
    }

    Ok(())
}

/// Load the config (defaults when the file is absent), apply a CLI seed, and start logging.
async fn load_config(path: &str, seed: Option<u64>, verbosity: u8) -> Result<Config> {
    let mut config = Config::load_or_default(path).await?;
    if seed.is_some() {
        config.roll.seed = seed;
    }
    init_logging(&Some(config.clone()), verbosity);
    Ok(config)
}

async fn run_session(config: &Config) -> Result<()> {
    info!("Starting dexroll session v{}", env!("CARGO_PKG_VERSION"));
    let client = PokeApiClient::new(&config.api);
    let mut roller = Roller::new(client, config.roll.clone());
    let mut state = RollerState::new(config.roll.history_capacity);

    println!("Random Creature Roller");
    println!("{}", render_card(state.current()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("[Enter/r] roll  [h] history  [c] card  [q] quit > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "r" | "roll" => match roller.roll_into(&mut state).await {
                Ok(()) => println!("{}", render_card(state.current())),
                // Screen keeps the previous card and history.
                Err(e) => error!("Roll failed: {}", e),
            },
            "h" | "history" => match render_history(state.history()) {
                Some(view) => println!("{}", view),
                None => println!("No rolls yet."),
            },
            "c" | "card" => println!("{}", render_card(state.current())),
            "q" | "quit" | "exit" => break,
            other => println!("Unknown command '{}'", other),
        }
    }

    info!("Session finished: {}", metrics::snapshot().summary());
    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|cfg| cfg.logging.level_filter())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.file.as_ref())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    if let Some(file) = log_file {
        let sink = std::sync::Mutex::new(file);
        // Echo to the console only in an interactive terminal
        let is_tty = atty::is(atty::Stream::Stdout);
        builder.format(move |fmt, record| {
            let line = format!(
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            );
            if let Ok(mut guard) = sink.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
