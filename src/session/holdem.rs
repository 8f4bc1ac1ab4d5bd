use super::*;
use crate::league::WinRecorder;

/// One table's lifecycle as seen by the console and websocket drivers.
pub trait Game {
    /// Schedules every blind alert for `players` and begins the game.
    fn start(&mut self, players: u32) -> Result<(), SessionError>;
    /// Ends the game and records one win for `winner`.
    fn finish(&mut self, winner: &str) -> Result<(), SessionError>;
}

/// Texas Hold'em session: announces blinds on start, credits the winner
/// on finish. Transitions only move forward and are never retried.
#[derive(Debug)]
pub struct Holdem<W, A> {
    recorder: W,
    alerts: A,
    phase: Phase,
}

impl<W, A> Holdem<W, A>
where
    W: WinRecorder,
    A: AlertSink,
{
    pub fn new(recorder: W, alerts: A) -> Self {
        Self {
            recorder,
            alerts,
            phase: Phase::NotStarted,
        }
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    fn guard(&self, phase: Phase, attempted: &'static str) -> Result<(), SessionError> {
        match self.phase == phase {
            true => Ok(()),
            false => Err(SessionError::Transition {
                phase: self.phase,
                attempted,
            }),
        }
    }
}

impl<W, A> Game for Holdem<W, A>
where
    W: WinRecorder,
    A: AlertSink,
{
    fn start(&mut self, players: u32) -> Result<(), SessionError> {
        self.guard(Phase::NotStarted, "start")?;
        for alert in schedule(players) {
            self.alerts.schedule_alert_at(alert.delay, alert.amount);
        }
        self.phase = Phase::InProgress;
        Ok(())
    }

    /// The session is finished even if persisting the win fails; the
    /// league already holds the win in memory.
    fn finish(&mut self, winner: &str) -> Result<(), SessionError> {
        self.guard(Phase::InProgress, "finish")?;
        self.phase = Phase::Finished;
        self.recorder.record_win(winner)?;
        Ok(())
    }
}
