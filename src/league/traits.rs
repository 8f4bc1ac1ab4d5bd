use super::*;
use crate::Wins;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Win count lookup. Unknown players have zero wins.
pub trait ScoreReader {
    fn score(&self, name: &str) -> Wins;
}

/// The only way to change a league: one more win for `name`.
pub trait WinRecorder {
    fn record_win(&mut self, name: &str) -> Result<(), LeagueError>;
}

/// Players ranked by wins, most first, ties in stored order.
pub trait LeagueProvider {
    fn league(&self) -> Vec<Player>;
}

/// Everything the HTTP layer needs from a league.
pub trait PlayerStore: ScoreReader + WinRecorder + LeagueProvider {}

impl<T> PlayerStore for T where T: ScoreReader + WinRecorder + LeagueProvider {}

impl<T> ScoreReader for &T
where
    T: ScoreReader + ?Sized,
{
    fn score(&self, name: &str) -> Wins {
        (**self).score(name)
    }
}

impl<T> ScoreReader for &mut T
where
    T: ScoreReader + ?Sized,
{
    fn score(&self, name: &str) -> Wins {
        (**self).score(name)
    }
}

impl<T> WinRecorder for &mut T
where
    T: WinRecorder + ?Sized,
{
    fn record_win(&mut self, name: &str) -> Result<(), LeagueError> {
        (**self).record_win(name)
    }
}

impl<T> LeagueProvider for &T
where
    T: LeagueProvider + ?Sized,
{
    fn league(&self) -> Vec<Player> {
        (**self).league()
    }
}

impl<T> LeagueProvider for &mut T
where
    T: LeagueProvider + ?Sized,
{
    fn league(&self) -> Vec<Player> {
        (**self).league()
    }
}

// Shared handles for hosts that drive one league from several tasks.
// Poisoned locks are recovered; an upsert completes before any I/O.

impl<T> ScoreReader for Arc<Mutex<T>>
where
    T: ScoreReader,
{
    fn score(&self, name: &str) -> Wins {
        self.lock().unwrap_or_else(PoisonError::into_inner).score(name)
    }
}

impl<T> WinRecorder for Arc<Mutex<T>>
where
    T: WinRecorder,
{
    fn record_win(&mut self, name: &str) -> Result<(), LeagueError> {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record_win(name)
    }
}

impl<T> LeagueProvider for Arc<Mutex<T>>
where
    T: LeagueProvider,
{
    fn league(&self) -> Vec<Player> {
        self.lock().unwrap_or_else(PoisonError::into_inner).league()
    }
}
