use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpResponse};
use serde::Serialize;

/// Envelope every JSON endpoint answers with.
#[derive(Debug, Serialize)]
pub(crate) struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) list: Option<Vec<T>>,
}

pub(crate) struct JsonResponseBuilder<T>
where
    T: Serialize,
{
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: Serialize,
{
    pub(crate) fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub(crate) fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn into_response(self, code: StatusCode, message: &str) -> JsonResponse<T> {
        let status = if code.is_success() { "OK" } else { "Error" };
        let fallback = code.canonical_reason().unwrap_or("Unknown");
        let message = if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message.to_string()
        };

        JsonResponse {
            status: status.to_string(),
            message,
            code: code.as_u16(),
            item: self.item,
            list: self.list,
        }
    }

    pub(crate) fn ok(self, message: &str) -> web::Json<JsonResponse<T>> {
        web::Json(self.into_response(StatusCode::OK, message))
    }

    fn error(self, code: StatusCode, message: &str) -> Error {
        let body = self.into_response(code, message);
        tracing::debug!(code = body.code, message = %body.message, "Responding with error");
        InternalError::from_response(
            body.message.clone(),
            HttpResponse::build(code).json(body),
        )
        .into()
    }

    pub(crate) fn bad_request(self, message: &str) -> Error {
        self.error(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn form_error(self, message: String) -> Error {
        self.error(StatusCode::BAD_REQUEST, &message)
    }

    pub(crate) fn not_found(self, message: &str) -> Error {
        self.error(StatusCode::NOT_FOUND, message)
    }
}
