use actix_web::{get, HttpResponse, Responder};
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;

use crate::constants::START_TIME;

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    version: String,
}

#[get("/health")]
pub async fn health_check() -> impl Responder {
    let now_utc = chrono::Utc::now();
    let uptime_secs = now_utc
        .signed_duration_since(*START_TIME)
        .num_seconds()
        .max(0) as u64;
    let human_uptime = format_duration(Duration::from_secs(uptime_secs));

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
