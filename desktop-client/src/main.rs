mod colors;
mod config;
mod offline;
mod state;
mod ui;

use clap::Parser;
use snake_common::config::Validate;
use snake_common::games::SessionRng;
use snake_common::games::snake::SessionCommand;
use snake_common::storage::FileStore;
use snake_common::{log, logger};
use tokio::sync::mpsc;

use config::{get_config_manager, DEFAULT_CONFIG_FILE};
use offline::spawn_local_game;
use state::{CommandSender, SharedState};
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_desktop_client", version, about = "Classic single-player snake")]
struct Args {
    /// Path to the YAML config; created with defaults if missing
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Overrides the configured board size
    #[arg(long)]
    board_size: Option<u32>,

    /// Overrides the configured tick interval in milliseconds
    #[arg(long)]
    tick_interval_ms: Option<u32>,

    /// Fixes the random seed for food and start positions
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let mut config = get_config_manager(&args.config).get_or_create_config()?;
    if let Some(board_size) = args.board_size {
        config.game.board_size = board_size;
    }
    if let Some(tick_interval_ms) = args.tick_interval_ms {
        config.game.tick_interval_ms = tick_interval_ms;
    }
    config.validate()?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let game_thread = spawn_local_game(
        config.game.board_size,
        config.game.tick_interval(),
        FileStore::new(&config.high_score_file),
        rng,
        shared_state.clone(),
        command_rx,
    )?;

    let cell_size = config.display.cell_size as f32;
    let board_side = config.game.board_size as f32 * cell_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_side + 40.0, board_side + 160.0])
            .with_title("Snake"),
        ..Default::default()
    };

    let command_sender = CommandSender::new(command_tx);
    let app_sender = command_sender.clone();
    let board_size = config.game.board_size;

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SnakeApp::new(
                shared_state,
                app_sender,
                board_size,
                cell_size,
            )))
        }),
    )?;

    command_sender.send(SessionCommand::Shutdown);
    drop(command_sender);
    if game_thread.join().is_err() {
        log!("Game loop thread panicked");
    }

    Ok(())
}
