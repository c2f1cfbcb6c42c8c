use snake_common::games::snake::{Direction, GameMode, SessionCommand};

use crate::state::{CommandSender, SharedState};
use super::board::render_board;
use super::overlay::render_overlay;
use super::scoreboard::render_scoreboard;

pub struct SnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    board_size: u32,
    cell_size: f32,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        board_size: u32,
        cell_size: f32,
    ) -> Self {
        Self {
            shared_state,
            command_sender,
            board_size,
            cell_size,
        }
    }

    fn handle_input(&self, ctx: &egui::Context) {
        let direction = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::W) {
                Some(Direction::Up)
            } else if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::S) {
                Some(Direction::Down)
            } else if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                Some(Direction::Left)
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                Some(Direction::Right)
            } else {
                None
            }
        });

        if let Some(direction) = direction {
            self.command_sender.send(SessionCommand::Turn(direction));
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.command_sender.send(SessionCommand::Shutdown);
        }

        let view = self.shared_state.get_view();

        if view.mode == GameMode::Playing {
            self.handle_input(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                render_scoreboard(ui, view.score, view.high_score);
                ui.add_space(16.0);

                let board_rect =
                    render_board(ui, self.board_size, self.cell_size, view.board.as_ref());
                if render_overlay(ui, ctx, board_rect, view.mode) {
                    self.command_sender.send(SessionCommand::Start);
                }
            });
        });
    }
}
