use crate::session::Game;
use std::io::BufRead;
use std::io::Write;

pub const PLAYER_PROMPT: &str = "Please enter the number of players: ";
pub const BAD_PLAYER_INPUT: &str =
    "Bad value received for number of players, please try again with a number";
pub const BAD_WINNER_INPUT: &str = "Bad value received for winner, expected \"{Name} wins\"";

/// Line-based driver for one game: asks for the table size, starts the
/// game, then waits for a `"{Name} wins"` line to finish it.
pub struct Console<R, W, G> {
    input: R,
    output: W,
    game: G,
}

impl<R, W, G> Console<R, W, G>
where
    R: BufRead,
    W: Write,
    G: Game,
{
    pub fn new(input: R, output: W, game: G) -> Self {
        Self {
            input,
            output,
            game,
        }
    }

    pub fn play(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", PLAYER_PROMPT)?;
        self.output.flush()?;
        let players = match self.read_line()?.trim().parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => return Ok(writeln!(self.output, "{}", BAD_PLAYER_INPUT)?),
        };
        self.game.start(players)?;
        log::info!("game started with {} players", players);
        let line = self.read_line()?;
        match winner(&line) {
            Some(name) => {
                self.game.finish(name)?;
                log::info!("recorded win for {}", name);
                Ok(())
            }
            None => Ok(writeln!(self.output, "{}", BAD_WINNER_INPUT)?),
        }
    }

    pub fn into_inner(self) -> (R, W, G) {
        (self.input, self.output, self.game)
    }

    fn read_line(&mut self) -> std::io::Result<String> {
        let ref mut line = String::new();
        self.input.read_line(line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// `"Chris wins"` names Chris; anything else names nobody.
pub fn winner(line: &str) -> Option<&str> {
    line.trim()
        .strip_suffix(" wins")
        .map(str::trim)
        .filter(|name| !name.is_empty())
}
