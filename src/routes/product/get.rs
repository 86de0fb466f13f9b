use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::ProductService;
use actix_web::{get, web, Responder, Result};
use uuid::Uuid;

#[tracing::instrument(name = "Get product.", skip(service))]
#[get("/product/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    service: web::Data<ProductService>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    match service.get(id).await? {
        Some(product) => Ok(JsonResponse::build().set_item(product).ok("Result is found")),
        None => Err(JsonResponse::<models::Product>::build().not_found("product is not found.")),
    }
}

/// `?price=v` narrows the list; see [`models::PriceFilterMode`] for how.
#[tracing::instrument(name = "Get all products.", skip(service))]
#[get("/products")]
pub async fn list(
    query: web::Query<forms::ListQuery>,
    service: web::Data<ProductService>,
) -> Result<impl Responder> {
    let products = service.list(query.price.as_deref()).await?;
    if products.is_empty() {
        return Err(JsonResponse::<models::Product>::build().not_found("product is not found."));
    }

    Ok(JsonResponse::build().set_list(products).ok("OK"))
}
