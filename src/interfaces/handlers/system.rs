use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;

use crate::constants::START_TIME;

#[get("/health")]
pub async fn health_check() -> impl Responder {
    let uptime = Utc::now().signed_duration_since(*START_TIME);

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": uptime.num_seconds(),
    }))
}
