use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use bent_four::config::GameConfig;
use bent_four::console::StdConsole;
use bent_four::game::{ControllerKind, Game};

/// Play a game of Bent Four on the terminal.
#[derive(Parser)]
#[command(name = "bent_four", about = "Connect-style console game won by bent shapes")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "game.toml")]
    config: PathBuf,

    /// Override the number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override the number of board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Controller for Cross: human, random, greedy or lookahead
    #[arg(long)]
    cross: Option<String>,

    /// Controller for Circle: human, random, greedy or lookahead
    #[arg(long)]
    circle: Option<String>,
}

fn parse_controller(name: &str) -> Result<ControllerKind> {
    Ok(match name {
        "human" => ControllerKind::Human,
        "random" => ControllerKind::Random,
        "greedy" => ControllerKind::Greedy,
        "lookahead" => ControllerKind::Lookahead,
        other => bail!(
            "unknown controller '{}' (expected 'human', 'random', 'greedy', or 'lookahead')",
            other
        ),
    })
}

fn main() -> Result<()> {
    // Logs go to stderr so the board on stdout stays clean.
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?
        .log_to_stderr()
        .start()?;

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.cols = cols;
    }
    if let Some(name) = cli.cross.as_deref() {
        config.cross = parse_controller(name)?;
    }
    if let Some(name) = cli.circle.as_deref() {
        config.circle = parse_controller(name)?;
    }
    config.validate()?;

    let mut game = Game::new(&config)?;
    let mut console = StdConsole::new();
    game.run(&mut console)?;

    Ok(())
}
