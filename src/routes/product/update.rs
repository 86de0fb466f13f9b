use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::ProductService;
use actix_web::{put, web, Responder, Result};
use uuid::Uuid;

#[tracing::instrument(name = "Update product description.", skip(form, service))]
#[put("/update/product/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    form: forms::Payload<forms::DescriptionForm>,
    service: web::Data<ProductService>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    match service.update_description(id, form.into_inner()).await? {
        Some(product) => Ok(JsonResponse::build()
            .set_item(product)
            .ok("product updated successfully.")),
        None => Err(JsonResponse::<models::Product>::build().not_found("Product id is not found.")),
    }
}
