//! Error translation middleware.
//!
//! The single interception point turning failures into structured
//! [`ErrorResponse`] bodies. Handlers return [`AppError`] values that ride
//! response extensions to this layer; extractor rejections (non-numeric path
//! id, malformed JSON) arrive as bare error statuses and are translated by
//! status code. Either way, the client sees the same body shape and never an
//! internal message.

use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::{AppError, ErrorResponse};

/// Wraps a route, rewriting every failed response into an [`ErrorResponse`]
/// carrying the originating request path.
pub async fn layer(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    let (status, error) = match response.extensions_mut().remove::<AppError>() {
        Some(err) => {
            tracing::warn!(path = %path, status = %err.status(), message = %err, "request failed");
            (err.status(), err.label().to_owned())
        }
        None => {
            let status = response.status();
            if !status.is_client_error() && !status.is_server_error() {
                return response;
            }
            translate_status(status)
        }
    };

    (status, Json(ErrorResponse::new(status, error, path))).into_response()
}

/// Maps a bare error status (no [`AppError`] attached) to the response shape.
///
/// Extractor rejections land here: axum answers 400 for a bad path segment,
/// 415/422 for body decoding problems. All collapse to a 400 "Bad Request";
/// unclassified server failures collapse to 500.
fn translate_status(status: StatusCode) -> (StatusCode, String) {
    match status {
        StatusCode::BAD_REQUEST
        | StatusCode::UNPROCESSABLE_ENTITY
        | StatusCode::UNSUPPORTED_MEDIA_TYPE => (StatusCode::BAD_REQUEST, "Bad Request".to_owned()),
        s if s.is_server_error() => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_owned(),
        ),
        s => (s, s.canonical_reason().unwrap_or("Error").to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_rejection_statuses_to_bad_request() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::UNPROCESSABLE_ENTITY,
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ] {
            let (mapped, label) = translate_status(status);
            assert_eq!(mapped, StatusCode::BAD_REQUEST);
            assert_eq!(label, "Bad Request");
        }
    }

    #[test]
    fn test_translate_server_errors_collapse_to_500() {
        let (mapped, label) = translate_status(StatusCode::BAD_GATEWAY);
        assert_eq!(mapped, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(label, "Internal Server Error");
    }

    #[test]
    fn test_translate_other_client_errors_keep_status() {
        let (mapped, label) = translate_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(mapped, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(label, "Method Not Allowed");
    }
}
