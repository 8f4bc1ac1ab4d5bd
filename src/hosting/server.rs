use super::*;
use crate::league::LeagueProvider;
use crate::league::PlayerStore;
use crate::league::ScoreReader;
use crate::league::WinRecorder;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Mutex;

pub struct Server;

impl Server {
    pub async fn run<L>(league: L, bind: &str) -> Result<(), std::io::Error>
    where
        L: PlayerStore + Send + 'static,
    {
        let state = web::Data::new(Mutex::new(league));
        log::info!("starting league server on {}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .configure(routes::<L>)
        })
        .workers(4)
        .bind(bind)?
        .run()
        .await
    }
}

/// League routes. Expects `web::Data<Mutex<L>>` in app data.
pub fn routes<L>(cfg: &mut web::ServiceConfig)
where
    L: PlayerStore + Send + 'static,
{
    cfg.route("/players/{name}", web::get().to(score::<L>))
        .route("/players/{name}", web::post().to(win::<L>))
        .route("/league", web::get().to(league::<L>))
        .route("/ws", web::get().to(game::<L>));
}

/// Unknown players answer 404 with a zero score.
async fn score<L>(store: web::Data<Mutex<L>>, path: web::Path<String>) -> impl Responder
where
    L: PlayerStore + Send + 'static,
{
    match store.into_inner().score(&path.into_inner()) {
        0 => HttpResponse::NotFound().body("0"),
        n => HttpResponse::Ok().body(n.to_string()),
    }
}

async fn win<L>(store: web::Data<Mutex<L>>, path: web::Path<String>) -> impl Responder
where
    L: PlayerStore + Send + 'static,
{
    let name = path.into_inner();
    let mut league = store.into_inner();
    let winner = name.clone();
    match web::block(move || league.record_win(&winner)).await {
        Ok(Ok(())) => HttpResponse::Accepted().finish(),
        Ok(Err(e)) => {
            log::error!("failed to record win for {}: {}", name, e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
        Err(e) => {
            log::error!("win for {} never ran: {}", name, e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

async fn league<L>(store: web::Data<Mutex<L>>) -> impl Responder
where
    L: PlayerStore + Send + 'static,
{
    HttpResponse::Ok().json(store.into_inner().league())
}

async fn game<L>(store: web::Data<Mutex<L>>, body: web::Payload, req: HttpRequest) -> impl Responder
where
    L: PlayerStore + Send + 'static,
{
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            log::info!("table opened");
            actix_web::rt::spawn(Table::new(store.into_inner(), session, stream).run());
            response.map_into_left_body()
        }
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}
