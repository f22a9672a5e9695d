use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gridrun_engine::{ScenarioConfig, Session};
use tracing::info;

mod console;

use console::Console;

#[derive(Parser, Debug)]
#[command(name = "gridrun")]
#[command(about = "Simulate cars driving on a bounded grid until they finish or collide")]
struct Args {
    /// Field width; skips the dimension prompt together with --height
    #[arg(long, requires = "height")]
    width: Option<i32>,

    /// Field height; skips the dimension prompt together with --width
    #[arg(long, requires = "width")]
    height: Option<i32>,

    /// Run a scenario file instead of the interactive menu
    #[arg(short, long, conflicts_with_all = ["width", "height"])]
    scenario: Option<PathBuf>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if let Some(path) = &args.scenario {
        return run_scenario(path, &mut io::stdout().lock());
    }

    let dims = args.width.zip(args.height);
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock(), dims);
    console.run().context("console I/O failed")
}

/// Batch mode: parse, validate and run a scenario file, then print the
/// roster and the results.
fn run_scenario(path: &Path, out: &mut impl Write) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;
    let config = ScenarioConfig::parse(&text)
        .with_context(|| format!("failed to parse scenario {}", path.display()))?;
    let mut session = Session::from_config(&config).context("invalid scenario")?;
    info!(path = %path.display(), vehicles = config.vehicles.len(), "running scenario");

    writeln!(out, "Your current list of cars are:")?;
    for entry in session.roster() {
        writeln!(out, "{entry}")?;
    }
    session.run()?;
    writeln!(out, "After simulation, the result is:")?;
    for outcome in session.outcomes() {
        writeln!(out, "{outcome}")?;
    }
    Ok(())
}
