use async_trait::async_trait;

use crate::modules::product::application::domain::Product;
use crate::modules::product::application::ports::incoming::use_cases::{
    GetProductsError, GetProductsUseCase,
};
use crate::modules::product::application::ports::outgoing::{ProductListFilter, ProductQuery};

pub struct GetProductsService<Q>
where
    Q: ProductQuery,
{
    query: Q,
}

impl<Q> GetProductsService<Q>
where
    Q: ProductQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProductsUseCase for GetProductsService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    async fn execute(&self, filter: ProductListFilter) -> Result<Vec<Product>, GetProductsError> {
        self.query
            .list_products(filter)
            .await
            .map_err(|e| GetProductsError::RepositoryError(e.to_string()))
    }
}
