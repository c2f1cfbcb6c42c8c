use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use crate::games::FrameBroadcaster;
use crate::storage::KeyValueStore;
use crate::{debug_log, log};
use super::session::{GameSession, TickOutcome};
use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Start,
    Turn(Direction),
    Shutdown,
}

/// Drives a session until `Shutdown` arrives or every sender is dropped.
///
/// Ticks are only scheduled while a game is running; between games the task
/// just waits for the next command. Returns the session for inspection.
pub async fn run_local_game<S, B>(
    mut session: GameSession<S>,
    tick_interval: Duration,
    mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
    broadcaster: B,
) -> GameSession<S>
where
    S: KeyValueStore,
    B: FrameBroadcaster,
{
    broadcaster.broadcast_frame(session.frame()).await;

    while let Some(command) = command_rx.recv().await {
        match command {
            SessionCommand::Start => {
                if !session.start() {
                    continue;
                }
                log!(
                    "Game started on a {0}x{0} board",
                    session.engine().board_size()
                );
                let keep_running = play_until_end(
                    &mut session,
                    tick_interval,
                    &mut command_rx,
                    &broadcaster,
                )
                .await;
                if !keep_running {
                    break;
                }
            }
            SessionCommand::Turn(_) => {}
            SessionCommand::Shutdown => break,
        }
    }

    log!("Game loop stopped");
    session
}

/// Returns `false` when the loop as a whole should stop.
async fn play_until_end<S, B>(
    session: &mut GameSession<S>,
    tick_interval: Duration,
    command_rx: &mut mpsc::UnboundedReceiver<SessionCommand>,
    broadcaster: &B,
) -> bool
where
    S: KeyValueStore,
    B: FrameBroadcaster,
{
    let mut tick_timer = interval(tick_interval);
    tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = tick_timer.tick() => {
                match session.tick() {
                    Some(TickOutcome::Continue(frame)) => {
                        broadcaster.broadcast_frame(frame).await;
                    }
                    Some(TickOutcome::Ended(frame)) => {
                        log!("Game over ({:?}), score {}", frame.mode, frame.score);
                        broadcaster.broadcast_game_end(frame).await;
                        return true;
                    }
                    None => return true,
                }
            }
            command = command_rx.recv() => {
                match command {
                    Some(SessionCommand::Turn(direction)) => {
                        if !session.turn(direction) {
                            debug_log!("Ignored turn {:?}", direction);
                        }
                    }
                    Some(SessionCommand::Start) => {}
                    Some(SessionCommand::Shutdown) | None => return false,
                }
            }
        }
    }
}
