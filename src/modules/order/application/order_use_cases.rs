use std::sync::Arc;

use crate::modules::order::application::ports::incoming::use_cases::{
    CreateOrderUseCase, GetSingleOrderUseCase, GetUserOrdersUseCase, UpdateOrderStatusUseCase,
};

#[derive(Clone)]
pub struct OrderUseCases {
    pub create: Arc<dyn CreateOrderUseCase + Send + Sync>,
    pub list_for_user: Arc<dyn GetUserOrdersUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleOrderUseCase + Send + Sync>,
    pub update_status: Arc<dyn UpdateOrderStatusUseCase + Send + Sync>,
}
