use crate::Wins;

/// A league entry. Identity is the exact, case-sensitive name.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Player {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Wins")]
    pub wins: Wins,
}

impl Player {
    pub fn new(name: &str, wins: Wins) -> Self {
        Self {
            name: name.to_string(),
            wins,
        }
    }
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}
