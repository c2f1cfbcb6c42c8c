use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use snake_common::games::snake::{run_local_game, GameEngine, GameSession, SessionCommand};
use snake_common::games::SessionRng;
use snake_common::log;
use snake_common::storage::FileStore;
use tokio::sync::mpsc;

use crate::state::SharedState;
use super::LocalBroadcaster;

/// Runs the game loop on its own runtime thread. The thread ends on
/// `SessionCommand::Shutdown` or when every command sender is dropped.
pub fn spawn_local_game(
    board_size: u32,
    tick_interval: Duration,
    store: FileStore,
    rng: SessionRng,
    shared_state: SharedState,
    command_rx: mpsc::UnboundedReceiver<SessionCommand>,
) -> std::io::Result<JoinHandle<()>> {
    log!("Session seed: {}", rng.seed());
    log!("High score file: {}", store.file_path().display());
    let engine = GameEngine::new(board_size, Arc::new(store), rng);
    let session = GameSession::new(engine);
    let broadcaster = LocalBroadcaster::new(shared_state);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    std::thread::Builder::new()
        .name("snake-game-loop".to_string())
        .spawn(move || {
            runtime.block_on(run_local_game(session, tick_interval, command_rx, broadcaster));
        })
}
