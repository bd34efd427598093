use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_only_0123456789";
pub const TEST_ISSUER: &str = "grocify-test";

pub fn test_token_provider() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_SECRET.to_string(),
        issuer: TEST_ISSUER.to_string(),
        access_token_expiry: 3600,
    })
}

/// Token provider registered the same way `start()` registers it.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_token_provider());
    web::Data::new(provider)
}

pub fn bearer_header(user_id: Uuid) -> (&'static str, String) {
    let token = test_token_provider()
        .generate_access_token(user_id)
        .expect("test token");
    ("Authorization", format!("Bearer {}", token))
}
