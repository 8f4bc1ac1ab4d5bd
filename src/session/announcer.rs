use super::*;
use crate::Chips;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Alert sink backed by tokio timers. Each registration spawns a task that
/// sleeps for the delay and then pushes `Blind is now {amount}` into the
/// channel. Alerts still pending when the receiver is dropped are discarded.
#[derive(Debug, Clone)]
pub struct Announcer {
    handle: Handle,
    tx: UnboundedSender<String>,
}

impl Announcer {
    /// Must be called from within a tokio runtime.
    pub fn new(tx: UnboundedSender<String>) -> Self {
        Self {
            handle: Handle::current(),
            tx,
        }
    }
    /// Announcer plus the receiving end of its messages.
    pub fn channel() -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = unbounded_channel();
        (Self::new(tx), rx)
    }
    pub fn message(amount: Chips) -> String {
        format!("Blind is now {}\n", amount)
    }
}

impl AlertSink for Announcer {
    fn schedule_alert_at(&mut self, delay: Duration, amount: Chips) {
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            tx.send(Self::message(amount))
                .inspect_err(|_| log::debug!("blind alert {} dropped, no listener", amount))
                .ok();
        });
    }
}
