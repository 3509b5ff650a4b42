use termion::{clear, cursor};

use crate::board::{Color, Square};
use crate::game::session::GameSession;

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer
            .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
    }

    /// Clears the screen and prints the board, the side to move, the counts
    /// and whatever extra lines the caller passes.
    pub fn render_game_state(
        &mut self,
        session: &GameSession,
        stats: Option<&str>,
        notice: Option<&str>,
    ) {
        self.clear();
        self.draw(session, stats, notice);
        print!("{}", self.buffer);
    }

    fn draw(&mut self, session: &GameSession, stats: Option<&str>, notice: Option<&str>) {
        let board = session.board();
        let hints = session.hints();

        self.buffer.push_str("    a   b   c   d   e   f   g   h\n");
        self.buffer
            .push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in 0..8u8 {
            self.buffer.push_str(&format!("{} │", row + 1));
            for col in 0..8u8 {
                let square = Square::new(row, col);
                let cell = match board.get(square) {
                    Some(piece) if session.selected() == Some(square) => {
                        format!("[{}]", piece.to_unicode_piece_char())
                    }
                    Some(piece) => format!(" {} ", piece.to_unicode_piece_char()),
                    None if hints.contains(&square) => " * ".to_string(),
                    None if square.is_dark_square() => " · ".to_string(),
                    None => "   ".to_string(),
                };
                self.buffer.push_str(&cell);
                self.buffer.push('│');
            }
            self.buffer.push_str(&format!(" {}\n", row + 1));

            if row < 7 {
                self.buffer
                    .push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            } else {
                self.buffer
                    .push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
            }
        }

        self.buffer
            .push_str("    a   b   c   d   e   f   g   h\n\n");

        match session.winner() {
            Some(winner) => self.buffer.push_str(&format!("Winner: {}\n", winner)),
            None => self.buffer.push_str(&format!("Turn: {}\n", session.turn())),
        }
        self.buffer.push_str(&session.status_line());
        self.buffer.push('\n');

        if session.in_chain() {
            if let Some(square) = session.selected() {
                self.buffer
                    .push_str(&format!("Keep jumping with the piece on {}\n", square));
            }
        }

        if let Some(stats) = stats {
            self.buffer.push_str(&format!("\n{}\n", stats));
        }

        if let Some(notice) = notice {
            self.buffer.push_str(&format!("\n{}\n", notice));
        }
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}

/// Search statistics of the last computer move, one line each.
pub fn search_stats(session: &GameSession) -> String {
    let searcher = session.searcher();
    format!(
        "* Score: {}\n* Positions searched: {} (depth: {}, {})\n* Move took: {}",
        searcher
            .last_score()
            .map_or("-".to_string(), |score| score.to_string()),
        searcher.searched_position_count(),
        session.config().search_depth(),
        searcher.difficulty(),
        searcher
            .last_search_duration()
            .map_or("-".to_string(), |duration| format!("{:?}", duration))
    )
}

/// Label used when announcing whose move it is.
pub fn side_label(color: Color) -> &'static str {
    match color {
        Color::Light => "Light (o)",
        Color::Dark => "Dark (x)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_draws_hints_and_selection() {
        let mut session = GameSession::new();
        let c6 = Square::from_algebraic("c6").unwrap();
        session.select(c6).unwrap();

        let mut display = GameDisplay::new();
        display.draw(&session, None, Some("error: nope"));
        let frame = display.buffer();

        let row_6 = frame
            .lines()
            .find(|line| line.starts_with("6 "))
            .unwrap()
            .to_string();
        assert!(row_6.contains("[⛂]"));

        let row_5 = frame.lines().find(|line| line.starts_with("5 ")).unwrap();
        assert_eq!(row_5.matches(" * ").count(), 2);

        assert!(frame.contains("Turn: dark"));
        assert!(frame.contains("light: 12 (0 kings)  dark: 12 (0 kings)"));
        assert!(frame.ends_with("\nerror: nope\n"));
    }

    #[test]
    fn test_clear_resets_the_frame() {
        let mut display = GameDisplay::new();
        display.draw(&GameSession::new(), None, Some("stale"));
        display.clear();
        assert_eq!(
            display.buffer(),
            format!("{}{}", cursor::Goto(1, 1), clear::All)
        );
    }

    #[test]
    fn test_search_stats_before_any_search() {
        let session = GameSession::new();
        let stats = search_stats(&session);
        assert!(stats.starts_with("* Score: -"));
        assert!(stats.contains("depth: 2, medium"));
    }
}
