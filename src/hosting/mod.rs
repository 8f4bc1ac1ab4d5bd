mod server;
mod table;

pub use server::*;
pub use table::*;
