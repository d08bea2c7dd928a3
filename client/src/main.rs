mod board_view;
mod config;
mod terminal_runner;

use std::io;
use std::path::{Path, PathBuf};
use clap::Parser;
use common::config::ConfigManager;
use common::games::SessionRng;
use common::games::tictactoe::TicTacToeGameState;
use common::{log, logger};

use config::{FirstPlayer, get_config_manager};
use terminal_runner::TerminalRunner;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a computer that never loses")]
struct Args {
    /// YAML config file; defaults to tictactoe_client_config.yaml next to the binary
    #[arg(long)]
    config: Option<PathBuf>,

    /// Who moves first; overrides the config file
    #[arg(long, value_enum)]
    first: Option<FirstPlayer>,

    /// Seed for the computer's opening move and the random starter
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let config = config_manager.get_config()?;

    let prefix = if args.use_log_prefix || config.log.use_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.log.file.as_deref().map(Path::new))?;

    let first_player = args.first.unwrap_or(config.game.first_player);
    let rng = SessionRng::from_optional_seed(args.seed.or(config.game.seed));
    let mut state = TicTacToeGameState::new(first_player.into(), rng);

    println!("Tic-tac-toe: you are X, the computer is O.");
    println!("Type a cell number (1-9) to move, h or c to restart, q to quit.");

    let stdin = io::stdin();
    let mut runner = TerminalRunner::new(stdin.lock(), io::stdout().lock(), config.game.highlight_winner);
    runner.run(&mut state)?;

    log!("Client shut down");
    Ok(())
}
