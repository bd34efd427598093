use std::sync::Arc;

use crate::modules::product::application::ports::incoming::use_cases::{
    CreateProductUseCase, DeleteProductUseCase, GetProductsUseCase, GetSingleProductUseCase,
    PatchProductUseCase,
};

#[derive(Clone)]
pub struct ProductUseCases {
    pub create: Arc<dyn CreateProductUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetProductsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProductUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchProductUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProductUseCase + Send + Sync>,
}
