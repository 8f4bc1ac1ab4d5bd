/// Failures surfaced by the league store.
#[derive(Debug)]
pub enum LeagueError {
    /// Persisted content is not a league. Never treated as an empty league.
    Decode {
        source: String,
        error: serde_json::Error,
    },
    /// The player already holds the most wins a league can count.
    Overflow { name: String },
    /// The backing resource failed to stat, seek, read or write.
    Resource(std::io::Error),
}

impl std::fmt::Display for LeagueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode { source, error } => write!(f, "malformed league in {}: {}", source, error),
            Self::Overflow { name } => write!(f, "{} cannot win more than {} games", name, crate::Wins::MAX),
            Self::Resource(e) => write!(f, "league resource: {}", e),
        }
    }
}

impl std::error::Error for LeagueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { error, .. } => Some(error),
            Self::Overflow { .. } => None,
            Self::Resource(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LeagueError {
    fn from(e: std::io::Error) -> Self {
        Self::Resource(e)
    }
}
