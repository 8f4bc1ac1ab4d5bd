//! File-backed poker league ledger and blind-alert game sessions.
//!
//! The ledger keeps win counts for every player who has ever won a game and
//! rewrites its backing file in full after each recorded win. A game session
//! schedules the blind increases for a table and, once the table is done,
//! records the declared winner.

pub mod cli;
pub mod league;
pub mod session;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Blind amounts announced during a session.
pub type Chips = u32;
/// Number of recorded wins for a player.
pub type Wins = u32;

// ============================================================================
// BLIND SCHEDULE
// Real tournament progression, not evenly spaced.
// ============================================================================
/// Blind amounts in the order they are announced.
pub const BLINDS: [Chips; 11] = [100, 200, 300, 400, 500, 600, 800, 1000, 2000, 4000, 8000];
/// Minutes between blind increases before adding one minute per player.
pub const BLIND_BASE_MINUTES: u64 = 5;

// ============================================================================
// PROCESS DEFAULTS
// ============================================================================
/// Backing file for the league when none is configured.
pub const LEAGUE_FILE: &str = "game.db.json";
/// Listen address for the webserver when none is configured.
pub const BIND_ADDR: &str = "0.0.0.0:5000";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Terminal logging at INFO on stderr, so stdout stays free for prompts
/// and alerts, plus DEBUG to `logs/{program}-{unix}.log`.
#[cfg(feature = "server")]
pub fn log(program: &str) -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let path = format!("logs/{}-{}.log", program, time);
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(&path)?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    log::debug!("{} logging to {}", program, path);
    Ok(())
}

/// Register Ctrl+C handler for immediate termination.
/// Pending blind alerts are dropped with the runtime.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
