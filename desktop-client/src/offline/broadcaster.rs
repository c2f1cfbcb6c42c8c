use snake_common::games::FrameBroadcaster;
use snake_common::games::snake::Frame;

use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl FrameBroadcaster for LocalBroadcaster {
    async fn broadcast_frame(&self, frame: Frame) {
        self.shared_state.show_frame(frame);
    }

    async fn broadcast_game_end(&self, frame: Frame) {
        self.shared_state.show_game_end(&frame);
    }
}
