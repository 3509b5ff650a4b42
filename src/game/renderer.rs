use std::time::Duration;

use crate::board::Color;
use crate::game::display::{search_stats, side_label, GameDisplay};
use crate::game::session::GameSession;

pub trait GameRenderer {
    fn render(&self, ui: &mut GameDisplay, session: &GameSession, notice: Option<&str>);
    fn frame_delay(&self) -> Option<Duration>;
}

fn prompt(session: &GameSession) {
    if session.is_over() {
        return;
    }
    println!(
        "{} to move. Enter a move (a3b4), a square (b4) or quit:",
        side_label(session.turn())
    );
}

/// Two humans at the same terminal.
pub struct SimpleRenderer;

impl GameRenderer for SimpleRenderer {
    fn render(&self, ui: &mut GameDisplay, session: &GameSession, notice: Option<&str>) {
        ui.render_game_state(session, None, notice);
        prompt(session);
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

/// Computer against itself.
pub struct StatsRenderer {
    /// The searcher is fast at low depths, a pause keeps the game watchable.
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(&self, ui: &mut GameDisplay, session: &GameSession, notice: Option<&str>) {
        let stats = search_stats(session);
        ui.render_game_state(session, Some(&stats), notice);
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

/// A human against the computer.
pub struct ConditionalStatsRenderer {
    pub human_color: Color,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(&self, ui: &mut GameDisplay, session: &GameSession, notice: Option<&str>) {
        let stats = search_stats(session);
        ui.render_game_state(session, Some(&stats), notice);
        if session.turn() == self.human_color {
            prompt(session);
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}
