use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, warn};

use crate::domain::{ChatReply, ChatRequest, DomainError, ErrorBody};

use super::super::Container;

pub const MESSAGE_REQUIRED_ERROR: &str = "Message is required";
pub const UPSTREAM_FAILED_ERROR: &str = "NilAI API call failed";

/// Error responses of the proxy.
///
/// Domain failures map onto fixed bodies; only the status and a fixed
/// message reach the caller, the error's own text is dropped. A body that
/// could not be read at all (too large, aborted) keeps axum's own status.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    Body(JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Domain(err) if err.is_missing_field() => StatusCode::BAD_REQUEST,
            Self::Domain(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Body(rejection) => rejection.status(),
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            Self::Domain(err) if err.is_missing_field() => ErrorBody::new(MESSAGE_REQUIRED_ERROR),
            Self::Domain(_) => ErrorBody::new(UPSTREAM_FAILED_ERROR),
            Self::Body(rejection) => ErrorBody::new(rejection.body_text()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

/// `POST /chat`
///
/// A body that is not valid JSON, or lacks a string `message`, is treated
/// the same as an absent message. A body that cannot be buffered is
/// rejected with axum's status, e.g. 413 past the default 2 MB limit.
pub async fn chat(
    State(container): State<Arc<Container>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection @ JsonRejection::BytesRejection(_)) => {
            warn!("Could not read chat body: {}", rejection);
            return Err(ApiError::Body(rejection));
        }
        Err(rejection) => {
            debug!("Rejected chat body: {}", rejection);
            ChatRequest::default()
        }
    };

    let reply = container
        .relay_use_case()
        .execute(request.message())
        .await?;

    Ok(Json(ChatReply { reply }))
}
