use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_card_handler, get_card_handler, health_handler, pool_signup_handler,
    track_event_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .nest(
                "/api",
                Router::new()
                    .route("/cards", post(create_card_handler))
                    .route("/cards/{code}", get(get_card_handler))
                    .route("/bingo-pool", post(pool_signup_handler))
                    .route("/analytics", post(track_event_handler)),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
