use std::sync::{Arc, Mutex};

use snake_common::games::snake::{Frame, GameMode, SessionCommand};
use tokio::sync::mpsc;

/// What the window shows. `board` is the last frame that was actually drawn,
/// so the final position stays visible under the end-of-game overlay. The
/// start screen has no board.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub mode: GameMode,
    pub board: Option<Frame>,
    pub score: u32,
    pub high_score: u32,
}

#[derive(Clone)]
pub struct SharedState {
    view: Arc<Mutex<ViewState>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            view: Arc::new(Mutex::new(ViewState {
                mode: GameMode::Start,
                board: None,
                score: 0,
                high_score: 0,
            })),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn get_view(&self) -> ViewState {
        self.view.lock().unwrap().clone()
    }

    pub fn show_frame(&self, frame: Frame) {
        {
            let mut view = self.view.lock().unwrap();
            view.mode = frame.mode;
            view.score = frame.score;
            view.high_score = frame.high_score;
            view.board = match frame.mode {
                GameMode::Start => None,
                _ => Some(frame),
            };
        }
        self.request_repaint();
    }

    pub fn show_game_end(&self, frame: &Frame) {
        {
            let mut view = self.view.lock().unwrap();
            view.mode = frame.mode;
            view.score = frame.score;
            view.high_score = frame.high_score;
        }
        self.request_repaint();
    }

    pub fn has_context(&self) -> bool {
        self.context.lock().unwrap().is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.context.lock().unwrap() = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.context.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }
}

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<SessionCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<SessionCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, command: SessionCommand) {
        let _ = self.tx.send(command);
    }
}
