use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

use crate::api::schemas::TestResponse;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
}

/// Liveness check
/// - No I/O
/// - No DB
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// Readiness check
/// - Checks the database connection
#[get("/ready")]
pub async fn readiness(db: web::Data<Arc<DatabaseConnection>>) -> impl Responder {
    let outcome = db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await;

    match outcome {
        Ok(_) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database: "ok",
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                database: "unhealthy",
            })
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/test",
    tag = "health",
    responses(
        (status = 200, description = "Backend is reachable", body = TestResponse)
    )
)]
#[get("/api/test")]
pub async fn api_test() -> impl Responder {
    HttpResponse::Ok().json(TestResponse {
        message: "Backend is working!".to_string(),
        timestamp: Utc::now(),
    })
}
