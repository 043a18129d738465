mod config;
mod game_loop;
mod render;
mod score;

use std::path::PathBuf;

use clap::Parser;
use tictactoe_engine::{Difficulty, Mark, SessionRng, log, logger};

use config::{CONFIG_FILE, Config};
use game_loop::GameOptions;

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Bot difficulty: easy, medium or unbeatable
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Mark played by the human: X or O
    #[arg(long)]
    human_mark: Option<Mark>,

    /// Delay before each bot move, in milliseconds
    #[arg(long)]
    bot_delay_ms: Option<u64>,

    /// Seed for the bot's random source, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the YAML config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = match Config::load_or_default(&args.config) {
        Ok(config) => config,
        Err(message) => {
            log!("{}", message);
            std::process::exit(1);
        }
    };

    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(human_mark) = args.human_mark {
        config.human_mark = human_mark;
    }
    if let Some(bot_delay_ms) = args.bot_delay_ms {
        config.bot_delay_ms = bot_delay_ms;
    }

    if let Err(message) = config.validate() {
        log!("Config validation error: {}", message);
        std::process::exit(1);
    }

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let options = GameOptions {
        difficulty: config.difficulty,
        human_mark: config.human_mark,
        bot_delay_ms: config.bot_delay_ms,
    };
    game_loop::run(&options, &mut rng);
}
