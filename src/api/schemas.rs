// src/api/schemas.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Body returned by every failed request.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Product not found")]
    pub message: String,
}

/// Connectivity check payload.
#[derive(Serialize, ToSchema)]
pub struct TestResponse {
    #[schema(example = "Backend is working!")]
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
