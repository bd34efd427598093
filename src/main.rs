pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::order;
pub use modules::product;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::{
    fetch_profile::{FetchUserProfileService, FetchUserProfileUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};

use crate::order::adapter::outgoing::{
    CatalogAdapter, OrderQueryPostgres, OrderRepositoryPostgres, UserDirectoryAdapter,
};
use crate::order::application::domain::OrderPolicy;
use crate::order::application::order_use_cases::OrderUseCases;
use crate::order::application::ports::outgoing::{OrderOwnerDirectory, ProductCatalog};
use crate::order::application::service::{
    CreateOrderService, GetSingleOrderService, GetUserOrdersService, UpdateOrderStatusService,
};

use crate::product::adapter::outgoing::{
    ProductArchiverPostgres, ProductQueryPostgres, ProductRepositoryPostgres,
};
use crate::product::application::product_use_cases::ProductUseCases;
use crate::product::application::service::{
    CreateProductService, DeleteProductService, GetProductsService, GetSingleProductService,
    PatchProductService,
};

use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::cors::AllowedOrigins;
use crate::shared::policy::PolicyConfig;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub fetch_user_profile_use_case: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    pub product: ProductUseCases,
    pub order: OrderUseCases,
    pub policy: PolicyConfig,
}

fn required_var(key: &str) -> anyhow::Result<String> {
    env::var(key).with_context(|| format!("{key} is not set in .env file"))
}

fn password_hasher_from_env() -> anyhow::Result<Arc<dyn PasswordHasher>> {
    let hasher: Arc<dyn PasswordHasher> = match env::var("PASSWORD_HASHER").as_deref() {
        Ok("bcrypt") => Arc::new(BcryptHasher::new()),
        Ok("argon2") | Err(_) => {
            let argon2 = Argon2Hasher::from_env()
                .map_err(|e| anyhow::anyhow!("Invalid ARGON2_* parameters: {e}"))?;
            Arc::new(argon2)
        }
        Ok(other) => anyhow::bail!("Unsupported PASSWORD_HASHER value: {other}"),
    };
    Ok(hasher)
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = required_var("DATABASE_URL")?;
    let host = required_var("HOST")?;
    let port = required_var("PORT")?;
    let server_url = format!("{host}:{port}");

    let policy = PolicyConfig::from_env();
    if policy != PolicyConfig::default() {
        info!(?policy, "Strict policy flags enabled");
    }

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if env::var("RUN_MIGRATIONS").as_deref() == Ok("true") {
        info!("Running pending migrations");
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
    }

    let db_arc = Arc::new(conn);

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env()?);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(jwt_service.clone());
    let password_hasher = password_hasher_from_env()?;

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    let register_user_use_case = RegisterUserUseCase::new(
        user_query.clone(),
        user_repo,
        Arc::clone(&password_hasher),
        Arc::new(jwt_service.clone()),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        password_hasher,
        Arc::new(jwt_service),
    );
    let fetch_user_profile_use_case = FetchUserProfileService::new(user_query.clone());

    // Product
    let product_repo = ProductRepositoryPostgres::new(Arc::clone(&db_arc));
    let product_query = ProductQueryPostgres::new(Arc::clone(&db_arc));
    let product_archiver = ProductArchiverPostgres::new(Arc::clone(&db_arc));

    let product = ProductUseCases {
        create: Arc::new(CreateProductService::new(product_repo.clone())),
        get_list: Arc::new(GetProductsService::new(product_query.clone())),
        get_single: Arc::new(GetSingleProductService::new(product_query.clone())),
        patch: Arc::new(PatchProductService::new(product_repo)),
        delete: Arc::new(DeleteProductService::new(product_archiver)),
    };

    // Order
    let order_repo = OrderRepositoryPostgres::new(Arc::clone(&db_arc));
    let order_query = OrderQueryPostgres::new(Arc::clone(&db_arc));
    let catalog: Arc<dyn ProductCatalog> = Arc::new(CatalogAdapter::new(product_query));
    let owners: Arc<dyn OrderOwnerDirectory> = Arc::new(UserDirectoryAdapter::new(user_query));
    let order_policy = OrderPolicy::from(&policy);

    let order = OrderUseCases {
        create: Arc::new(CreateOrderService::new(
            order_repo.clone(),
            Arc::clone(&catalog),
            order_policy,
        )),
        list_for_user: Arc::new(GetUserOrdersService::new(
            order_query.clone(),
            Arc::clone(&catalog),
        )),
        get_single: Arc::new(GetSingleOrderService::new(
            order_query.clone(),
            Arc::clone(&catalog),
            owners,
            order_policy,
        )),
        update_status: Arc::new(UpdateOrderStatusService::new(
            order_query,
            order_repo,
            catalog,
            order_policy,
        )),
    };

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        fetch_user_profile_use_case: Arc::new(fetch_user_profile_use_case),
        product,
        order,
        policy,
    };

    if !policy.product_writes_require_auth {
        warn!("Product writes are open to unauthenticated callers");
    }

    let allowed_origins = AllowedOrigins::from_env();
    if allowed_origins == AllowedOrigins::Any {
        warn!("ALLOWED_ORIGINS not restricted; accepting requests from any origin");
    }

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(allowed_origins.to_cors())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::health::api_test);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_user_profile_handler);
    // Product
    cfg.service(crate::product::adapter::incoming::web::routes::get_products_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::get_single_product_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::create_product_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::patch_product_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::delete_product_handler);
    // Order
    cfg.service(crate::order::adapter::incoming::web::routes::create_order_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::get_user_orders_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::get_single_order_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::update_order_status_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
