use actix_web::{get, HttpResponse};

#[get("/api/forms/ping")]
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().finish()
}
