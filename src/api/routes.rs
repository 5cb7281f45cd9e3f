use crate::api::api_error::APIError;
use crate::api::model::VerifyParams;
use crate::api::server::AppState;
use crate::verify::Verification;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::Router;
use axum_extra::extract::WithRejection;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub(super) fn new(state: AppState) -> Router {
    Router::new()
        .route("/", get(verify))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.api_timeout))
        .with_state(state)
}

async fn verify(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<VerifyParams>, APIError>,
) -> Verification {
    state.verifier.verify(params.domain.as_deref()).await
}
