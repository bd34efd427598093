use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::product::application::domain::Product;
use crate::modules::product::application::ports::incoming::use_cases::{
    GetSingleProductError, GetSingleProductUseCase,
};
use crate::modules::product::application::ports::outgoing::ProductQuery;

pub struct GetSingleProductService<Q>
where
    Q: ProductQuery,
{
    query: Q,
}

impl<Q> GetSingleProductService<Q>
where
    Q: ProductQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProductUseCase for GetSingleProductService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    async fn execute(&self, product_id: Uuid) -> Result<Product, GetSingleProductError> {
        self.query
            .get_product(product_id)
            .await
            .map_err(|e| GetSingleProductError::RepositoryError(e.to_string()))?
            .ok_or(GetSingleProductError::NotFound)
    }
}
