use crate::helpers::JsonResponse;
use crate::models;
use crate::services::ProductService;
use actix_web::{delete, web, Responder, Result};
use uuid::Uuid;

#[tracing::instrument(name = "Delete product.", skip(service))]
#[delete("/delete/product/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    service: web::Data<ProductService>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    match service.delete(id).await? {
        true => Ok(JsonResponse::<models::Product>::build().ok("product deleted successfully.")),
        false => Err(JsonResponse::<models::Product>::build().not_found("product is not found.")),
    }
}
