use crate::Chips;
use std::time::Duration;

/// Registers one-shot blind alerts with whatever clock the host runs.
/// Registration returns immediately; the sink fires the alert later.
pub trait AlertSink {
    fn schedule_alert_at(&mut self, delay: Duration, amount: Chips);
}

impl<F> AlertSink for F
where
    F: FnMut(Duration, Chips),
{
    fn schedule_alert_at(&mut self, delay: Duration, amount: Chips) {
        self(delay, amount)
    }
}
