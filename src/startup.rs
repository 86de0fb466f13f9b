use crate::configuration::Settings;
use crate::db::ProductStore;
use crate::helpers::ProductValidator;
use crate::routes;
use crate::services::ProductService;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpResponse, HttpServer};
use serde_json::json;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    store: Arc<dyn ProductStore>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    tracing::info!(
        validation = ?settings.product.validation,
        price_filter = ?settings.product.price_filter,
        "Product policy"
    );

    let service = web::Data::new(ProductService::new(
        store,
        ProductValidator::new(settings.product.validation),
        settings.product.price_filter,
    ));

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid JSON at line {} column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            _ => err.to_string(),
        };
        let response = HttpResponse::build(http::StatusCode::BAD_REQUEST)
            .json(json!({ "message": msg }));
        error::InternalError::from_response(err, response).into()
    });

    let server = HttpServer::new(move || {
        // FormConfig holds an Rc and is !Send, so it is built per worker.
        let form_config = web::FormConfig::default().error_handler(|err, _req| {
            let msg = err.to_string();
            let response = HttpResponse::build(http::StatusCode::BAD_REQUEST)
                .json(json!({ "message": msg }));
            error::InternalError::from_response(err, response).into()
        });
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(routes::hello)
            .service(web::scope("/health_check").service(routes::health_check))
            .service(routes::product::add::add)
            .service(routes::product::get::list)
            .service(routes::product::get::item)
            .service(routes::product::update::item)
            .service(routes::product::delete::item)
            .app_data(json_config.clone())
            .app_data(form_config)
            .app_data(service.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
