mod codec;
mod error;
mod league;
mod player;
mod tape;
mod traits;

pub use codec::*;
pub use error::*;
pub use league::*;
pub use player::*;
pub use tape::*;
pub use traits::*;
