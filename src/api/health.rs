use actix_web::{web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Identifies the process in health responses.
#[derive(Debug, Clone, Copy)]
pub struct ServiceInfo {
    pub name: &'static str,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    service: &'static str,
    timestamp: DateTime<Utc>,
}

pub async fn health_handler(info: web::Data<ServiceInfo>) -> impl Responder {
    HttpResponse::Ok().json(HealthBody {
        status: "healthy",
        service: info.name,
        timestamp: Utc::now(),
    })
}
