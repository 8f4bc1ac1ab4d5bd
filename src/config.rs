use clap::Parser;
use std::path::PathBuf;

/// Options for the console game.
#[derive(Debug, Parser)]
#[command(about = "Play one poker game and record the winner")]
pub struct ConsoleConfig {
    /// League file, created if missing.
    #[arg(long, env = "LEAGUE_FILE", default_value = crate::LEAGUE_FILE)]
    pub file: PathBuf,
}

/// Options for the league webserver.
#[derive(Debug, Parser)]
#[command(about = "Serve league scores and websocket games over HTTP")]
pub struct ServerConfig {
    /// League file, created if missing.
    #[arg(long, env = "LEAGUE_FILE", default_value = crate::LEAGUE_FILE)]
    pub file: PathBuf,
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = crate::BIND_ADDR)]
    pub bind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::try_parse_from(["webserver"]).unwrap();
        assert_eq!(config.file, PathBuf::from(crate::LEAGUE_FILE));
        assert_eq!(config.bind, crate::BIND_ADDR);
    }

    #[test]
    fn overrides() {
        let config =
            ConsoleConfig::try_parse_from(["cli", "--file", "/tmp/league.json"]).unwrap();
        assert_eq!(config.file, PathBuf::from("/tmp/league.json"));
    }
}
