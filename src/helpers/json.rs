use actix_web::error::{Error, InternalError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde_derive::Serialize;

#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<T>>,
}

pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn to_json_response(self, message: &str) -> JsonResponse<T> {
        JsonResponse {
            message: message.to_string(),
            item: self.item,
            list: self.list,
        }
    }

    pub fn ok(self, message: &str) -> web::Json<JsonResponse<T>> {
        web::Json(self.to_json_response(message))
    }

    pub fn created(self, message: &str) -> HttpResponse {
        HttpResponse::Created().json(self.to_json_response(message))
    }

    fn error(self, message: &str, status: StatusCode) -> Error {
        let body = HttpResponse::build(status).json(self.to_json_response(message));
        InternalError::from_response(message.to_string(), body).into()
    }

    pub fn not_found(self, message: &str) -> Error {
        self.error(message, StatusCode::NOT_FOUND)
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            item: None,
            list: None,
        }
    }
}
