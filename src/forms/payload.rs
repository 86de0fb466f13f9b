use actix_web::{dev, web, FromRequest, HttpMessage, HttpRequest};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::Pin;

/// Request body read as an urlencoded form or as JSON, picked by
/// `Content-Type`. Failures go through `FormConfig` or `JsonConfig`
/// respectively.
#[derive(Debug)]
pub struct Payload<T>(pub T);

impl<T> Payload<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for Payload<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut dev::Payload) -> Self::Future {
        if req.content_type() == "application/x-www-form-urlencoded" {
            let form = web::Form::<T>::from_request(req, payload);
            Box::pin(async move { Ok(Payload(form.await?.into_inner())) })
        } else {
            let json = web::Json::<T>::from_request(req, payload);
            Box::pin(async move { Ok(Payload(json.await?.into_inner())) })
        }
    }
}
