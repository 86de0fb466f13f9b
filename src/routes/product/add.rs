use crate::forms;
use crate::helpers::JsonResponse;
use crate::services::ProductService;
use actix_web::{post, web, Responder, Result};

#[tracing::instrument(name = "Add product.", skip_all)]
#[post("/product")]
pub async fn add(
    payload: forms::Payload<forms::ProductForm>,
    service: web::Data<ProductService>,
) -> Result<impl Responder> {
    let form = payload.into_inner();
    let product = service.create(&form).await?;

    Ok(JsonResponse::build().set_item(product).created("success"))
}
