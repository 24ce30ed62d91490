//! Feeds wire lines into a [`Game`] and records what happened to each.
//!
//! The engine keeps accepting moves after a terminal result; the "game over"
//! lock lives here instead.

use std::fmt;

use chess_core::MoveCommand;
use chess_engine::{Game, MoveResult};
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// 1-based line number in the input.
    pub line: usize,
    /// The line as read, trimmed.
    pub input: String,
    /// Engine result, absent when the line did not parse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'static str>,
    /// Parse error, absent when the line parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Side to move after this line.
    pub to_move: &'static str,
    /// True if the side to move is in check after this line.
    pub check: bool,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> ", self.line, self.input)?;
        match (&self.result, &self.error) {
            (Some(result), _) => write!(f, "{}", result)?,
            (None, Some(error)) => write!(f, "parse error: {}", error)?,
            (None, None) => write!(f, "?")?,
        }
        if self.check {
            write!(f, " ({} in check)", self.to_move)?;
        }
        Ok(())
    }
}

/// A game driven line by line.
#[derive(Debug)]
pub struct Replay {
    game: Game,
    continue_after_end: bool,
    outcome: Option<MoveResult>,
    applied: usize,
}

impl Replay {
    pub fn new(continue_after_end: bool) -> Self {
        Replay {
            game: Game::new(),
            continue_after_end,
            outcome: None,
            applied: 0,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The first terminal result seen, if any.
    pub fn outcome(&self) -> Option<MoveResult> {
        self.outcome
    }

    /// Number of moves the engine applied.
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Returns true once no further lines should be fed.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some() && !self.continue_after_end
    }

    /// Handles one input line. Blank lines and `#` comments yield `None`.
    pub fn feed(&mut self, line: usize, raw: &str) -> Option<MoveRecord> {
        let input = raw.trim();
        if input.is_empty() || input.starts_with('#') {
            return None;
        }

        let (result, error) = match MoveCommand::parse(input) {
            Ok(command) => {
                let result = self.game.apply_command(&command);
                if result.is_applied() {
                    self.applied += 1;
                }
                if result.is_terminal() && self.outcome.is_none() {
                    self.outcome = Some(result);
                }
                debug!(line, %command, %result, "line replayed");
                (Some(result.as_str()), None)
            }
            Err(err) => {
                warn!(line, input, error = %err, "skipping unparsable line");
                (None, Some(err.to_string()))
            }
        };

        Some(MoveRecord {
            line,
            input: input.to_string(),
            result,
            error,
            to_move: self.game.player_in_turn().tag_name(),
            check: self.game.is_check(),
        })
    }
}
