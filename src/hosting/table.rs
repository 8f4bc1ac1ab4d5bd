use crate::cli::BAD_PLAYER_INPUT;
use crate::league::WinRecorder;
use crate::session::AlertSink;
use crate::session::Announcer;
use crate::session::Game;
use crate::session::Holdem;
use crate::session::Phase;
use futures::StreamExt;
use std::sync::Arc;
use std::sync::Mutex;
use tokio::sync::mpsc::UnboundedReceiver;

pub const WS_BAD_WINNER_INPUT: &str = "Bad value received for winner, expected a player name";

/// What the table sends back after a client frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Keep listening, nothing to say.
    Wait,
    /// Tell the client and keep listening.
    Retry(String),
    /// Game over; close the socket.
    Done,
    /// Tell the client, then close the socket.
    Abort(String),
}

/// One websocket client running one game. The first text frame is the
/// number of players, the next is the winner's name. Blind alerts are
/// pushed to the client as text frames while the game is in progress.
pub struct Table<W> {
    game: Holdem<W, Announcer>,
    alerts: UnboundedReceiver<String>,
    session: actix_ws::Session,
    stream: actix_ws::MessageStream,
}

impl<L> Table<Arc<Mutex<L>>>
where
    L: WinRecorder,
{
    pub fn new(
        league: Arc<Mutex<L>>,
        session: actix_ws::Session,
        stream: actix_ws::MessageStream,
    ) -> Self {
        let (announcer, alerts) = Announcer::channel();
        Self {
            game: Holdem::new(league, announcer),
            alerts,
            session,
            stream,
        }
    }
}

impl<W> Table<W>
where
    W: WinRecorder,
{
    pub async fn run(self) {
        let Self {
            mut game,
            mut alerts,
            mut session,
            mut stream,
        } = self;
        let reason = 'sesh: loop {
            tokio::select! {
                biased;
                msg = alerts.recv() => match msg {
                    Some(text) => if session.text(text).await.is_err() { break 'sesh "client gone" },
                    None => break 'sesh "alerts closed",
                },
                msg = stream.next() => match msg {
                    Some(Ok(actix_ws::Message::Text(text))) => match respond(&mut game, &text) {
                        Reply::Wait => continue 'sesh,
                        Reply::Retry(message) => if session.text(message).await.is_err() { break 'sesh "client gone" },
                        Reply::Done => break 'sesh "game finished",
                        Reply::Abort(message) => {
                            session.text(message).await.ok();
                            break 'sesh "game aborted"
                        }
                    },
                    Some(Ok(actix_ws::Message::Ping(bytes))) => if session.pong(&bytes).await.is_err() { break 'sesh "client gone" },
                    Some(Ok(actix_ws::Message::Close(_))) => break 'sesh "client closed",
                    Some(Err(_)) => break 'sesh "protocol error",
                    None => break 'sesh "client gone",
                    _ => continue 'sesh,
                },
            }
        };
        log::info!("table closed ({}) while {}", reason, game.phase());
        session.close(None).await.ok();
    }
}

/// Applies one client frame to the game.
pub fn respond<W, A>(game: &mut Holdem<W, A>, text: &str) -> Reply
where
    W: WinRecorder,
    A: AlertSink,
{
    match game.phase() {
        Phase::NotStarted => match text.trim().parse::<u32>() {
            Ok(players) if players > 0 => match game.start(players) {
                Ok(()) => {
                    log::info!("table started with {} players", players);
                    Reply::Wait
                }
                Err(e) => Reply::Abort(e.to_string()),
            },
            _ => Reply::Retry(BAD_PLAYER_INPUT.to_string()),
        },
        Phase::InProgress => match text.trim() {
            "" => Reply::Retry(WS_BAD_WINNER_INPUT.to_string()),
            winner => match game.finish(winner) {
                Ok(()) => {
                    log::info!("table recorded win for {}", winner);
                    Reply::Done
                }
                Err(e) => {
                    log::error!("table failed to record win for {}: {}", winner, e);
                    Reply::Abort(e.to_string())
                }
            },
        },
        Phase::Finished => Reply::Done,
    }
}
