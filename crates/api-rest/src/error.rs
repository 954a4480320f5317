use api_shared::ErrorRes;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use notes_core::NoteError;

/// A core error on its way out of a handler.
///
/// - `InvalidInput` → 400 with the message
/// - `NotFound` → 404 with an empty body
/// - anything else → 500 with a generic message; the cause is logged, not returned
#[derive(Debug)]
pub struct ApiError(pub NoteError);

impl From<NoteError> for ApiError {
    fn from(e: NoteError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            NoteError::InvalidInput(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorRes { error: message })).into_response()
            }
            NoteError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            other => {
                tracing::error!("Internal error: {:?}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorRes {
                        error: "Internal error".into(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
