use actix::{Actor, ActorContext, Addr, AsyncContext, Handler, StreamHandler};
use actix_web::{HttpRequest, HttpResponse, web, Error, error};
use actix_web_actors::ws;
use log::{debug, warn};
use uuid::Uuid;

use crate::server::game_session::server::{CreateGame, EndGame, GameSession, GameSessionManager};
use crate::server::game_session::messages::{ClientAction, ProcessClientMessage, RegisterClient, ServerEvent};
use crate::server::ws_error::ws_error_message;

/// WebSocket bridge between one browser client and its game session.
pub struct GameSessionActor {
    pub game_id: Uuid,
    pub session_addr: Addr<GameSession>,
    pub manager: Addr<GameSessionManager>,
}

impl Actor for GameSessionActor {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.session_addr.do_send(RegisterClient { addr: ctx.address().recipient() });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.manager.do_send(EndGame { game_id: self.game_id });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                let msg: ClientAction = match serde_json::from_str(&text) {
                    Ok(m) => m,
                    Err(e) => {
                        debug!("[GameSessionActor] Invalid command '{}': {}", text, e);
                        let context = self.game_id.to_string();
                        ctx.text(ws_error_message("INVALID_COMMAND", "Invalid command", Some(&context)));
                        return;
                    }
                };
                self.session_addr.do_send(ProcessClientMessage { msg });
            }
            Ok(ws::Message::Ping(bytes)) => ctx.pong(&bytes),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                warn!("[GameSessionActor] Protocol error on game_id={}: {}", self.game_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<ServerEvent> for GameSessionActor {
    type Result = ();

    fn handle(&mut self, msg: ServerEvent, ctx: &mut Self::Context) -> Self::Result {
        match msg {
            ServerEvent::StateUpdate(update) => match serde_json::to_string(&update) {
                Ok(text) => ctx.text(text),
                Err(_) => ctx.text(ws_error_message("SERIALIZATION_FAILED", "Failed to serialize game state", None)),
            },
            ServerEvent::Rejected { code, message } => {
                let context = self.game_id.to_string();
                ctx.text(ws_error_message(code, &message, Some(&context)));
            }
        }
    }
}

/// Open a WebSocket and start a fresh game for it.
pub async fn ws_game(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    // Reject non-upgrade requests before any game exists for them.
    ws::handshake(&req)?;

    let manager = data.game_session_manager.clone();
    let (game_id, session_addr) = manager
        .send(CreateGame)
        .await
        .map_err(error::ErrorInternalServerError)?;

    debug!("[GameSessionActor] Client connected to game_id={}", game_id);
    ws::start(
        GameSessionActor {
            game_id,
            session_addr,
            manager,
        },
        &req,
        stream,
    )
}

#[cfg(test)]
mod tests {
    use actix::Actor;
    use actix_web::{App, http::StatusCode, test, web};

    use crate::server::game_session::server::{ActiveGames, GameSessionManager};
    use crate::server::state::AppState;

    #[actix_web::test]
    async fn test_plain_get_creates_no_game() {
        let manager = GameSessionManager::new().start();
        let state = web::Data::new(AppState::new(manager.clone()));
        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(crate::server::router::config)
        ).await;

        for _ in 0..3 {
            let req = test::TestRequest::get().uri("/ws/game").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }
        assert_eq!(manager.send(ActiveGames).await.unwrap(), 0);
    }
}
