//! JSON extractor whose rejections use the API error envelope

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiErrorType};

/// Wrapper around `axum::Json` that reports deserialization failures as the
/// same JSON error shape every other endpoint failure uses, instead of
/// axum's plain-text rejection bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// JSON rejection carrying the original status and a cleaned-up message
#[derive(Debug)]
pub struct JsonRejection {
    status: StatusCode,
    message: String,
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        ApiError::new(self.status, ApiErrorType::InvalidRequestError, self.message)
            .with_code("json_parse_error")
            .into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(JsonRejection {
                status: rejection.status(),
                message: rejection_message(&rejection),
            }),
        }
    }
}

/// Turn an axum rejection into a message that names the actual problem
fn rejection_message(rejection: &axum::extract::rejection::JsonRejection) -> String {
    use axum::extract::rejection::JsonRejection::*;

    match rejection {
        // The serde message carries the offending field and position
        JsonDataError(err) => format!(
            "Request body does not match the expected shape: {}",
            err.body_text()
        ),
        JsonSyntaxError(err) => format!("Request body is not valid JSON: {}", err.body_text()),
        MissingJsonContentType(_) => {
            "Expected a JSON body with 'Content-Type: application/json'".to_string()
        }
        BytesRejection(err) => format!("Could not read the request body: {}", err.body_text()),
        _ => "Malformed JSON request".to_string(),
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}
