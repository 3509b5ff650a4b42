use log::{error, info};
use thiserror::Error;

use crate::board::Color;
use crate::game::display::{side_label, GameDisplay};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::game::session::{GameSession, SessionConfig, SessionError, Selection};
use crate::input_handler::{InputError, MoveInput};

#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    #[error("input error: {error}")]
    InputError { error: InputError },
    #[error("session error: {error}")]
    SessionError { error: SessionError },
}

impl From<InputError> for GameError {
    fn from(error: InputError) -> Self {
        GameError::InputError { error }
    }
}

impl From<SessionError> for GameError {
    fn from(error: SessionError) -> Self {
        GameError::SessionError { error }
    }
}

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    session: GameSession,
    ui: GameDisplay,
    input: I,
    renderer: R,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input: I, renderer: R, config: SessionConfig) -> Result<Self, SessionError> {
        Ok(Self {
            session: GameSession::with_config(config)?,
            ui: GameDisplay::new(),
            input,
            renderer,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Plays until one side wins or the player quits. Returns the winner, if
    /// any. A rejected human move is shown as a notice, a failed computer
    /// move ends the game with an error.
    pub fn run(&mut self) -> Result<Option<Color>, GameError> {
        let mut notice: Option<String> = None;

        loop {
            self.renderer
                .render(&mut self.ui, &self.session, notice.as_deref());
            notice = None;

            if let Some(winner) = self.session.winner() {
                println!("Game over. {} wins!", side_label(winner));
                return Ok(Some(winner));
            }

            let input = match self.input.get_move(self.session.turn()) {
                Ok(Some(input)) => input,
                Ok(None) => {
                    notice = Some("Invalid input".to_string());
                    continue;
                }
                Err(InputError::UserExit) => {
                    info!("player quit");
                    return Ok(None);
                }
                Err(error) => return Err(error.into()),
            };

            let by_engine = input == MoveInput::UseEngine;
            match self.apply(input) {
                Ok(Selection::TurnEnded { .. }) => {
                    if let Some(delay) = self.renderer.frame_delay() {
                        std::thread::sleep(delay);
                    }
                }
                Ok(_) => {}
                Err(error) if by_engine => {
                    error!("computer could not move: {}", error);
                    return Err(error.into());
                }
                Err(error) => notice = Some(format!("error: {}", error)),
            }
        }
    }

    fn apply(&mut self, input: MoveInput) -> Result<Selection, SessionError> {
        match input {
            MoveInput::Coordinate { from, to } => self.session.make_move(from, to),
            MoveInput::Select { square } => self.session.select(square),
            MoveInput::UseEngine => self.session.make_computer_move(),
        }
    }
}
