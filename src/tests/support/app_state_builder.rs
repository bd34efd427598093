use std::sync::Arc;

use actix_web::web;

use crate::auth::application::use_cases::fetch_profile::FetchUserProfileUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::modules::order::application::order_use_cases::OrderUseCases;
use crate::modules::order::application::ports::incoming::use_cases::{
    CreateOrderUseCase, GetSingleOrderUseCase, GetUserOrdersUseCase, UpdateOrderStatusUseCase,
};
use crate::modules::product::application::ports::incoming::use_cases::{
    CreateProductUseCase, DeleteProductUseCase, GetProductsUseCase, GetSingleProductUseCase,
    PatchProductUseCase,
};
use crate::modules::product::application::product_use_cases::ProductUseCases;
use crate::shared::policy::PolicyConfig;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    fetch_user_profile: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    product: ProductUseCases,
    order: OrderUseCases,
    policy: PolicyConfig,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            fetch_user_profile: Arc::new(StubFetchUserProfileUseCase),
            product: ProductUseCases {
                create: Arc::new(StubCreateProductUseCase),
                get_list: Arc::new(StubGetProductsUseCase),
                get_single: Arc::new(StubGetSingleProductUseCase),
                patch: Arc::new(StubPatchProductUseCase),
                delete: Arc::new(StubDeleteProductUseCase),
            },
            order: OrderUseCases {
                create: Arc::new(StubCreateOrderUseCase),
                list_for_user: Arc::new(StubGetUserOrdersUseCase),
                get_single: Arc::new(StubGetSingleOrderUseCase),
                update_status: Arc::new(StubUpdateOrderStatusUseCase),
            },
            policy: PolicyConfig::default(),
        }
    }
}

impl TestAppStateBuilder {
    // Auth

    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_fetch_user_profile(
        mut self,
        uc: impl FetchUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_user_profile = Arc::new(uc);
        self
    }

    // Product

    pub fn with_create_product(
        mut self,
        uc: impl CreateProductUseCase + Send + Sync + 'static,
    ) -> Self {
        self.product.create = Arc::new(uc);
        self
    }

    pub fn with_get_products(mut self, uc: impl GetProductsUseCase + Send + Sync + 'static) -> Self {
        self.product.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_product(
        mut self,
        uc: impl GetSingleProductUseCase + Send + Sync + 'static,
    ) -> Self {
        self.product.get_single = Arc::new(uc);
        self
    }

    pub fn with_patch_product(
        mut self,
        uc: impl PatchProductUseCase + Send + Sync + 'static,
    ) -> Self {
        self.product.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_product(
        mut self,
        uc: impl DeleteProductUseCase + Send + Sync + 'static,
    ) -> Self {
        self.product.delete = Arc::new(uc);
        self
    }

    // Order

    pub fn with_create_order(mut self, uc: impl CreateOrderUseCase + Send + Sync + 'static) -> Self {
        self.order.create = Arc::new(uc);
        self
    }

    pub fn with_get_user_orders(
        mut self,
        uc: impl GetUserOrdersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.order.list_for_user = Arc::new(uc);
        self
    }

    pub fn with_get_single_order(
        mut self,
        uc: impl GetSingleOrderUseCase + Send + Sync + 'static,
    ) -> Self {
        self.order.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_order_status(
        mut self,
        uc: impl UpdateOrderStatusUseCase + Send + Sync + 'static,
    ) -> Self {
        self.order.update_status = Arc::new(uc);
        self
    }

    pub fn with_policy(mut self, policy: PolicyConfig) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            fetch_user_profile_use_case: self.fetch_user_profile,
            product: self.product,
            order: self.order,
            policy: self.policy,
        })
    }
}
