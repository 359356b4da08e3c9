pub mod health;
pub mod index;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use health::healthz;
use index::index;

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
}
