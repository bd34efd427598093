use crate::api::schemas::{ErrorResponse, TestResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::auth::application::use_cases::login_user::LoginBody;
use crate::auth::application::use_cases::register_user::{AuthSession, RegistrationBody};

// Product
use crate::product::adapter::incoming::web::routes::{
    CreateProductRequest, DeleteProductResponse, PatchProductRequest,
};
use crate::product::application::domain::Product;

// Order
use crate::order::adapter::incoming::web::routes::{
    CreateOrderRequest, OrderItemRequest, UpdateOrderStatusRequest,
};
use crate::order::application::domain::{OrderItemView, OrderOwner, OrderUser, OrderView};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Grocery API",
        version = "1.0.0",
        description = "API documentation for the grocery storefront backend"
    ),
    paths(
        crate::health::api_test,

        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::get_user_profile_handler,

        // Product endpoints
        crate::product::adapter::incoming::web::routes::get_products_handler,
        crate::product::adapter::incoming::web::routes::get_single_product_handler,
        crate::product::adapter::incoming::web::routes::create_product_handler,
        crate::product::adapter::incoming::web::routes::patch_product_handler,
        crate::product::adapter::incoming::web::routes::delete_product_handler,

        // Order endpoints
        crate::order::adapter::incoming::web::routes::create_order_handler,
        crate::order::adapter::incoming::web::routes::get_user_orders_handler,
        crate::order::adapter::incoming::web::routes::get_single_order_handler,
        crate::order::adapter::incoming::web::routes::update_order_status_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            TestResponse,

            // Auth DTOs
            RegistrationBody,
            LoginBody,
            AuthSession,
            UserProfile,
            UserId,

            // Product DTOs
            Product,
            CreateProductRequest,
            PatchProductRequest,
            DeleteProductResponse,

            // Order DTOs
            CreateOrderRequest,
            OrderItemRequest,
            UpdateOrderStatusRequest,
            OrderView,
            OrderItemView,
            OrderUser,
            OrderOwner,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Connectivity checks"),
        (name = "users", description = "Registration, login and profile"),
        (name = "products", description = "Catalog management"),
        (name = "orders", description = "Order placement and tracking"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by register or login"))
                        .build(),
                ),
            )
        }
    }
}
