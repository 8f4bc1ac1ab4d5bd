//! Console Game Binary
//!
//! Plays one game against the league file and prints blind alerts
//! to stdout as they come due.

use clap::Parser;
use pokerleague::*;
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log("cli")?;
    kys();
    let config = config::ConsoleConfig::parse();
    let league = league::League::from_path(&config.file)?;
    log::info!("loaded league from {}", league.source());
    let (announcer, mut alerts) = session::Announcer::channel();
    tokio::spawn(async move {
        while let Some(alert) = alerts.recv().await {
            print!("{}", alert);
            std::io::stdout().flush().ok();
        }
    });
    println!("Let's play poker");
    println!("Type {{Name}} wins to record a win");
    tokio::task::spawn_blocking(move || {
        let game = session::Holdem::new(league, announcer);
        cli::Console::new(std::io::stdin().lock(), std::io::stdout(), game).play()
    })
    .await??;
    Ok(())
}
