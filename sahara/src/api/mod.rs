//! HTTP surface: auth, chat and health routes, served at the root and under `/api`.

mod auth;
mod chat;
mod error;
mod health;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use error::ApiError;

fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/chat", post(chat::chat))
        .route("/health", get(health::health))
}

/// Builds the application router. `cors_origin` of `None` allows any origin.
pub fn create_router(state: AppState, cors_origin: Option<HeaderValue>) -> Router {
    let allow_origin = match cors_origin {
        Some(origin) => AllowOrigin::exact(origin),
        None => AllowOrigin::from(Any),
    };

    Router::new()
        .merge(routes())
        .nest("/api", routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(allow_origin)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
