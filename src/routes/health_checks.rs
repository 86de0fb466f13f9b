use actix_web::{get, HttpResponse};

#[get("")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[get("/")]
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().body("Hello world")
}
