use crate::BLIND_BASE_MINUTES;
use crate::BLINDS;
use crate::Chips;
use std::time::Duration;

/// A blind increase due `delay` after the session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAlert {
    pub delay: Duration,
    pub amount: Chips,
}

impl From<(Duration, Chips)> for ScheduledAlert {
    fn from((delay, amount): (Duration, Chips)) -> Self {
        Self { delay, amount }
    }
}

/// Time between blind increases: one extra minute per player.
pub fn increment(players: u32) -> Duration {
    Duration::from_secs((BLIND_BASE_MINUTES + players as u64) * 60)
}

/// Full blind timetable for a table of `players`, first alert at zero.
pub fn schedule(players: u32) -> Vec<ScheduledAlert> {
    let step = increment(players);
    BLINDS
        .iter()
        .zip(0u32..)
        .map(|(&amount, i)| ScheduledAlert::from((step * i, amount)))
        .collect()
}
