use super::*;
use serde::de::Error;
use std::collections::HashSet;
use std::io::Read;

/// Reads a JSON array of `{"Name", "Wins"}` objects in stored order.
/// No bytes (or only whitespace) is a league nobody has won yet.
/// `source` names the resource in decode errors.
pub fn decode<R>(mut reader: R, source: &str) -> Result<Vec<Player>, LeagueError>
where
    R: Read,
{
    let ref mut bytes = Vec::new();
    reader.read_to_end(bytes)?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let malformed = |error: serde_json::Error| LeagueError::Decode {
        source: source.to_string(),
        error,
    };
    let players = serde_json::from_slice::<Vec<Player>>(bytes).map_err(malformed)?;
    let mut seen = HashSet::with_capacity(players.len());
    if let Some(player) = players.iter().find(|p| !seen.insert(p.name.as_str())) {
        let duplicate = format!("duplicate player {:?}", player.name);
        return Err(malformed(serde_json::Error::custom(duplicate)));
    }
    Ok(players)
}

/// Writes players as a compact JSON array, preserving the given order.
pub fn encode(players: &[Player]) -> Vec<u8> {
    serde_json::to_vec(players).expect("players serialize to json")
}
