use super::*;
use crate::Wins;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Seek;
use std::io::SeekFrom;
use std::path::Path;

/// Win counts for every player who has won, kept in memory and mirrored to
/// a single resource. The resource holds the players in the order they first
/// won; ranking happens on read and is never written back.
///
/// Exclusively owns its resource. A write failure is returned to the caller
/// but the in-memory win stays recorded, so memory and resource may disagree
/// until the next successful write.
#[derive(Debug)]
pub struct League<R> {
    source: String,
    players: Vec<Player>,
    tape: Tape<R>,
}

impl<R> League<R>
where
    R: Resource,
{
    /// Loads the league from `resource`, writing `[]` first if it is empty.
    /// `source` identifies the resource in error messages.
    pub fn open(resource: R, source: &str) -> Result<Self, LeagueError> {
        let mut tape = Tape::from(resource);
        if tape.inner_mut().seek(SeekFrom::End(0))? == 0 {
            tape.overwrite(&encode(&[]))?;
        }
        tape.inner_mut().seek(SeekFrom::Start(0))?;
        let players = decode(tape.inner_mut(), source)?;
        Ok(Self {
            source: source.to_string(),
            players,
            tape,
        })
    }
}

impl League<File> {
    /// Opens (creating if needed) the league file at `path`.
    pub fn from_path<P>(path: P) -> Result<Self, LeagueError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        Self::open(file, &path.display().to_string())
    }
}

impl<R> League<R> {
    pub fn source(&self) -> &str {
        &self.source
    }
    /// Players in stored order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn into_inner(self) -> R {
        self.tape.into_inner()
    }
}

impl<R> ScoreReader for League<R> {
    fn score(&self, name: &str) -> Wins {
        self.players
            .iter()
            .find(|p| p.is(name))
            .map(|p| p.wins)
            .unwrap_or(0)
    }
}

impl<R> WinRecorder for League<R>
where
    R: Resource,
{
    fn record_win(&mut self, name: &str) -> Result<(), LeagueError> {
        match self.players.iter_mut().find(|p| p.is(name)) {
            Some(player) => {
                player.wins = player.wins.checked_add(1).ok_or_else(|| {
                    LeagueError::Overflow {
                        name: name.to_string(),
                    }
                })?
            }
            None => self.players.push(Player::new(name, 1)),
        }
        self.tape.overwrite(&encode(&self.players))?;
        Ok(())
    }
}

impl<R> LeagueProvider for League<R> {
    fn league(&self) -> Vec<Player> {
        let mut ranked = self.players.clone();
        ranked.sort_by(|a, b| b.wins.cmp(&a.wins));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::Truncate;
    use std::io::Cursor;
    use std::io::Read;
    use std::io::Write;

    fn memory(json: &str) -> League<Cursor<Vec<u8>>> {
        League::open(Cursor::new(json.as_bytes().to_vec()), "memory").unwrap()
    }

    fn contents(league: League<Cursor<Vec<u8>>>) -> String {
        String::from_utf8(league.into_inner().into_inner()).unwrap()
    }

    /// Cursor whose writes start failing once jammed.
    struct Jammed {
        cursor: Cursor<Vec<u8>>,
        jammed: bool,
    }

    impl Read for Jammed {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.cursor.read(buf)
        }
    }
    impl Write for Jammed {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            match self.jammed {
                true => Err(std::io::Error::other("disk full")),
                false => self.cursor.write(buf),
            }
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
    impl Seek for Jammed {
        fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
            self.cursor.seek(pos)
        }
    }
    impl Truncate for Jammed {
        fn truncate(&mut self, len: u64) -> std::io::Result<()> {
            self.cursor.truncate(len)
        }
    }

    #[test]
    fn empty_resource_becomes_empty_array() {
        let league = memory("");
        assert!(league.players().is_empty());
        assert!(league.league().is_empty());
        assert_eq!(contents(league), "[]");
    }

    #[test]
    fn league_from_a_reader() {
        let league = memory(
            r#"[
            {"Name": "Cleo", "Wins": 10},
            {"Name": "Chris", "Wins": 33}]"#,
        );
        assert_eq!(
            league.players(),
            &[Player::new("Cleo", 10), Player::new("Chris", 33)]
        );
    }

    #[test]
    fn get_player_score() {
        let league = memory(r#"[{"Name": "Cleo", "Wins": 10}, {"Name": "Chris", "Wins": 33}]"#);
        assert_eq!(league.score("Chris"), 33);
        assert_eq!(league.score("Cleo"), 10);
        assert_eq!(league.score("chris"), 0);
        assert_eq!(league.score("Apollo"), 0);
    }

    #[test]
    fn store_win_for_existing_player() {
        let mut league = memory(r#"[{"Name": "Cleo", "Wins": 10}, {"Name": "Chris", "Wins": 33}]"#);
        league.record_win("Chris").unwrap();
        assert_eq!(league.score("Chris"), 34);
        assert_eq!(league.players().len(), 2);
        assert_eq!(
            contents(league),
            r#"[{"Name":"Cleo","Wins":10},{"Name":"Chris","Wins":34}]"#
        );
    }

    #[test]
    fn store_win_for_new_player() {
        let mut league = memory(r#"[{"Name": "Cleo", "Wins": 10}, {"Name": "Chris", "Wins": 33}]"#);
        league.record_win("Pepper").unwrap();
        assert_eq!(league.score("Pepper"), 1);
        assert_eq!(
            contents(league),
            r#"[{"Name":"Cleo","Wins":10},{"Name":"Chris","Wins":33},{"Name":"Pepper","Wins":1}]"#
        );
    }

    #[test]
    fn wins_count_calls_per_name() {
        let mut league = memory("");
        let calls = ["Cleo", "Chris", "Cleo", "Tiest", "Cleo", "Chris", "cleo"];
        for name in calls {
            league.record_win(name).unwrap();
        }
        for name in calls {
            let expected = calls.iter().filter(|n| **n == name).count() as Wins;
            assert_eq!(league.score(name), expected);
            assert_eq!(league.players().iter().filter(|p| p.is(name)).count(), 1);
        }
        assert_eq!(league.players().len(), 4);
    }

    #[test]
    fn league_sorted_by_wins_stably() {
        let league = memory(
            r#"[{"Name": "Chris", "Wins": 20},
                {"Name": "Cleo", "Wins": 32},
                {"Name": "Tiest", "Wins": 14}]"#,
        );
        assert_eq!(
            league.league(),
            vec![
                Player::new("Cleo", 32),
                Player::new("Chris", 20),
                Player::new("Tiest", 14),
            ]
        );
        let ties = memory(
            r#"[{"Name": "Ann", "Wins": 3},
                {"Name": "Bob", "Wins": 5},
                {"Name": "Cat", "Wins": 3}]"#,
        );
        let names = ties.league().into_iter().map(|p| p.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["Bob", "Ann", "Cat"]);
    }

    #[test]
    fn ranking_is_not_persisted() {
        let json = r#"[{"Name":"Chris","Wins":20},{"Name":"Cleo","Wins":32}]"#;
        let league = memory(json);
        let _ = league.league();
        assert_eq!(contents(league), json);
    }

    #[test]
    fn non_array_fails_with_source() {
        let resource = Cursor::new(br#"{"bad": true}"#.to_vec());
        match League::open(resource, "game.db.json") {
            Err(e @ LeagueError::Decode { .. }) => assert!(e.to_string().contains("game.db.json")),
            other => panic!("expected decode error, got {:?}", other.map(|l| l.players().to_vec())),
        }
    }

    #[test]
    fn write_failure_keeps_memory_win() {
        let resource = Jammed {
            cursor: Cursor::new(br#"[{"Name":"Cleo","Wins":1}]"#.to_vec()),
            jammed: false,
        };
        let mut league = League::open(resource, "jammed").unwrap();
        league.tape.inner_mut().jammed = true;
        assert!(matches!(
            league.record_win("Cleo"),
            Err(LeagueError::Resource(_))
        ));
        assert_eq!(league.score("Cleo"), 2);
    }

    #[test]
    fn win_past_max_is_refused() {
        let json = r#"[{"Name":"Cleo","Wins":4294967295}]"#;
        let mut league = memory(json);
        match league.record_win("Cleo") {
            Err(e @ LeagueError::Overflow { .. }) => assert!(e.to_string().contains("Cleo")),
            other => panic!("expected overflow, got {:?}", other),
        }
        assert_eq!(league.score("Cleo"), Wins::MAX);
        league.record_win("Chris").unwrap();
        assert_eq!(league.score("Chris"), 1);
        assert_eq!(
            contents(league),
            r#"[{"Name":"Cleo","Wins":4294967295},{"Name":"Chris","Wins":1}]"#
        );
    }

    #[test]
    fn file_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.db.json");
        let mut league = League::from_path(&path).unwrap();
        league.record_win("Chris").unwrap();
        league.record_win("Cleo").unwrap();
        league.record_win("Chris").unwrap();
        drop(league);
        let league = League::from_path(&path).unwrap();
        assert_eq!(league.score("Chris"), 2);
        assert_eq!(league.score("Cleo"), 1);
        assert_eq!(league.source(), path.display().to_string());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"[{"Name":"Chris","Wins":2},{"Name":"Cleo","Wins":1}]"#
        );
    }

    #[test]
    fn new_file_is_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.json");
        let league = League::from_path(&path).unwrap();
        assert!(league.players().is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn corrupt_file_is_not_empty_league() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"Name\": ").unwrap();
        assert!(matches!(
            League::from_path(file.path()),
            Err(LeagueError::Decode { .. })
        ));
    }
}
