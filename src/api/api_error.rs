use crate::verify::Verification;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub(crate) struct APIError(anyhow::Error);

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        let any_err = self.0;
        if let Some(rejection) = any_err.downcast_ref::<QueryRejection>() {
            tracing::debug!("rejected query: {rejection}");
            return Verification::Disallowed.into_response();
        }
        tracing::error!("error handling request: {any_err:?}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

impl<E> From<E> for APIError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
