//! League Server Binary
//!
//! Serves player scores and the ranked league over HTTP.
//! Supports WebSocket connections for playing a game.

use clap::Parser;
use pokerleague::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log("webserver")?;
    kys();
    let config = config::ServerConfig::parse();
    let league = league::League::from_path(&config.file)?;
    log::info!("loaded league from {}", league.source());
    hosting::Server::run(league, &config.bind).await?;
    Ok(())
}
