mod alert;
#[cfg(feature = "server")]
mod announcer;
mod error;
mod holdem;
mod phase;
mod schedule;

pub use alert::*;
#[cfg(feature = "server")]
pub use announcer::*;
pub use error::*;
pub use holdem::*;
pub use phase::*;
pub use schedule::*;
