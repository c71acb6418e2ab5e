//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use clientele_app::ports::CustomerRepository;

use crate::state::AppState;

/// Body of the liveness probe at `/`.
pub const LIVENESS_MESSAGE: &str = "Service is up!";

/// Build the top-level axum [`Router`].
///
/// Serves the liveness probe at `/` and the customer routes next to it.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: CustomerRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(liveness))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}
