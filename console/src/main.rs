mod config;
mod game;
mod input;

use clap::Parser;
use tictactoe_engine::logger;

use config::{BotStrength, Config, FirstPlayer, OpponentKind, Validate};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: String,

    /// Board size, overrides the config file.
    #[arg(long)]
    dimension: Option<usize>,

    /// Squares in a row needed to win, overrides the config file.
    #[arg(long)]
    win_count: Option<usize>,

    /// Opponent kind, overrides the config file.
    #[arg(long, value_enum)]
    opponent: Option<OpponentKind>,

    /// Computer strength, overrides the config file.
    #[arg(long, value_enum)]
    bot: Option<BotStrength>,

    /// Who takes the opening move in a CPU game.
    #[arg(long, value_enum)]
    first_player: Option<FirstPlayer>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = Config::load(&args.config)?;
    if let Some(dimension) = args.dimension {
        config.dimension = Some(dimension);
    }
    if let Some(win_count) = args.win_count {
        config.win_count = win_count;
    }
    if let Some(opponent) = args.opponent {
        config.opponent = Some(opponent);
    }
    if let Some(bot) = args.bot {
        config.bot = bot;
    }
    if let Some(first_player) = args.first_player {
        config.first_player = first_player;
    }
    config
        .validate()
        .map_err(|e| format!("Config validation error: {e}"))?;

    game::run(&config)?;

    Ok(())
}
