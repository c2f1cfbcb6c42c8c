use std::future::Future;

use super::snake::Frame;

/// Receives what the presentation layer needs to draw.
pub trait FrameBroadcaster: Send + Sync + Clone + 'static {
    /// A renderable frame: the start screen, or a tick that kept the game going.
    fn broadcast_frame(&self, frame: Frame) -> impl Future<Output = ()> + Send;

    /// The tick that ended the game. Not drawn as a board frame.
    fn broadcast_game_end(&self, frame: Frame) -> impl Future<Output = ()> + Send;
}
