use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::auth::application::use_cases::fetch_profile::{FetchUserError, FetchUserProfileUseCase};
use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginError, LoginRequest};
use crate::auth::application::use_cases::register_user::{
    AuthSession, IRegisterUserUseCase, RegisterUserError, RegistrationRequest,
};
use crate::modules::order::application::domain::OrderView;
use crate::modules::order::application::ports::incoming::use_cases::{
    CreateOrderError, CreateOrderInput, CreateOrderUseCase, GetSingleOrderError,
    GetSingleOrderUseCase, GetUserOrdersError, GetUserOrdersUseCase, UpdateOrderStatusError,
    UpdateOrderStatusUseCase,
};
use crate::modules::order::application::ports::outgoing::{ProductCatalog, ProductCatalogError};
use crate::modules::product::application::domain::Product;
use crate::modules::product::application::ports::incoming::use_cases::{
    CreateProductError, CreateProductInput, CreateProductUseCase, DeleteProductError,
    DeleteProductOutcome, DeleteProductUseCase, GetProductsError, GetProductsUseCase,
    GetSingleProductError, GetSingleProductUseCase, PatchProductError, PatchProductUseCase,
};
use crate::modules::product::application::ports::outgoing::{PatchProductData, ProductListFilter};

// ============================================================================
// Auth
// ============================================================================

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _request: RegistrationRequest,
    ) -> Result<AuthSession, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<AuthSession, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchUserProfileUseCase;

#[async_trait]
impl FetchUserProfileUseCase for StubFetchUserProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserProfile, FetchUserError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Product
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCreateProductUseCase;

#[async_trait]
impl CreateProductUseCase for StubCreateProductUseCase {
    async fn execute(&self, _input: CreateProductInput) -> Result<Product, CreateProductError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProductsUseCase;

#[async_trait]
impl GetProductsUseCase for StubGetProductsUseCase {
    async fn execute(&self, _filter: ProductListFilter) -> Result<Vec<Product>, GetProductsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleProductUseCase;

#[async_trait]
impl GetSingleProductUseCase for StubGetSingleProductUseCase {
    async fn execute(&self, _product_id: Uuid) -> Result<Product, GetSingleProductError> {
        Err(GetSingleProductError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubPatchProductUseCase;

#[async_trait]
impl PatchProductUseCase for StubPatchProductUseCase {
    async fn execute(
        &self,
        _product_id: Uuid,
        _data: PatchProductData,
    ) -> Result<Product, PatchProductError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProductUseCase;

#[async_trait]
impl DeleteProductUseCase for StubDeleteProductUseCase {
    async fn execute(
        &self,
        _product_id: Uuid,
        _permanent: bool,
    ) -> Result<DeleteProductOutcome, DeleteProductError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Order
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCreateOrderUseCase;

#[async_trait]
impl CreateOrderUseCase for StubCreateOrderUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _input: CreateOrderInput,
    ) -> Result<OrderView, CreateOrderError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetUserOrdersUseCase;

#[async_trait]
impl GetUserOrdersUseCase for StubGetUserOrdersUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<Vec<OrderView>, GetUserOrdersError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleOrderUseCase;

#[async_trait]
impl GetSingleOrderUseCase for StubGetSingleOrderUseCase {
    async fn execute(
        &self,
        _requester: UserId,
        _order_id: Uuid,
    ) -> Result<OrderView, GetSingleOrderError> {
        Err(GetSingleOrderError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateOrderStatusUseCase;

#[async_trait]
impl UpdateOrderStatusUseCase for StubUpdateOrderStatusUseCase {
    async fn execute(
        &self,
        _requester: UserId,
        _order_id: Uuid,
        _status: String,
    ) -> Result<OrderView, UpdateOrderStatusError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Ports
// ============================================================================

/// In-memory catalog that records the size of every lookup.
#[derive(Default)]
pub struct StaticProductCatalog {
    products: Vec<Product>,
    lookups: Mutex<Vec<usize>>,
}

impl StaticProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn lookups(&self) -> Vec<usize> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductCatalog for StaticProductCatalog {
    async fn find_products(&self, product_ids: &[Uuid]) -> Result<Vec<Product>, ProductCatalogError> {
        self.lookups.lock().unwrap().push(product_ids.len());
        Ok(self
            .products
            .iter()
            .filter(|p| product_ids.contains(&p.id))
            .cloned()
            .collect())
    }
}
