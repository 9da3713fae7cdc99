//! Terminal presentation. Reads a [`WorldView`] and draws it; owns no game state.

pub mod flappy_scene;
pub mod game_common;

use crate::sim::WorldView;
use ratatui::Frame;

/// Draw one frame of the game.
pub fn draw(frame: &mut Frame, view: &WorldView, demo: bool) {
    let area = frame.size();
    flappy_scene::render_flappy(frame, area, view, demo);
}
