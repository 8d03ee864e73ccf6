use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use keycalc::{CalculatorEngine, CalculatorState, Config, DisplayItem, logging, parse_keys};

#[derive(Parser)]
#[command(name = "keycalc")]
#[command(about = "A scientific calculator driven by key presses")]
#[command(version)]
struct Cli {
    /// Keys to press, e.g. `2 + 3 × =` or `inv 1 sin`.
    /// Starts an interactive session when omitted.
    keys: Vec<String>,

    /// Print the full calculator state as JSON
    #[arg(long)]
    json: bool,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, overrides the config file (e.g. `debug`)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    logging::init(cli.log_level.as_deref().unwrap_or(&config.log_level));
    debug!(?config, "Starting keycalc");

    let mut engine = CalculatorEngine::with_state(config.initial_state());

    if cli.keys.is_empty() {
        run_interactive(&mut engine, cli.json)
    } else {
        let script = cli.keys.join(" ");
        let keys = parse_keys(&script).with_context(|| format!("Invalid keys: {}", script))?;
        let state = engine.press_all(keys);
        println!("{}", render(state, cli.json)?);
        Ok(())
    }
}

/// Read key scripts line by line, printing the display after each.
fn run_interactive(engine: &mut CalculatorEngine, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", render(engine.state(), json)?)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();

        if matches!(line, "quit" | "exit") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match parse_keys(line) {
            Ok(keys) => {
                let state = engine.press_all(keys);
                writeln!(stdout, "{}", render(state, json)?)?;
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    info!("Session ended");
    Ok(())
}

fn render(state: &CalculatorState, json: bool) -> Result<String> {
    if json {
        serde_json::to_string(state).context("Failed to serialize state")
    } else {
        Ok(DisplayItem::from_state(state).to_line())
    }
}
