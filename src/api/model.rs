use crate::verify::Verification;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub(super) struct VerifyParams {
    pub domain: Option<String>,
}

impl Verification {
    pub fn status_code(self) -> StatusCode {
        match self {
            Verification::Valid => StatusCode::OK,
            Verification::Invalid | Verification::ResolutionFailed => StatusCode::FORBIDDEN,
            Verification::Disallowed => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for Verification {
    fn into_response(self) -> Response {
        (self.status_code(), self.message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(Verification::Valid.status_code(), StatusCode::OK);
        assert_eq!(Verification::Invalid.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            Verification::ResolutionFailed.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            Verification::Disallowed.status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
