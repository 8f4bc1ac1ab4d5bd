use super::*;
use crate::league::LeagueError;

/// Failures surfaced by a game session.
#[derive(Debug)]
pub enum SessionError {
    /// `attempted` is not valid while the session is in `phase`.
    Transition {
        phase: Phase,
        attempted: &'static str,
    },
    /// The winner could not be persisted.
    League(LeagueError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transition { phase, attempted } => {
                write!(f, "cannot {} a game that is {}", attempted, phase)
            }
            Self::League(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transition { .. } => None,
            Self::League(e) => Some(e),
        }
    }
}

impl From<LeagueError> for SessionError {
    fn from(e: LeagueError) -> Self {
        Self::League(e)
    }
}
