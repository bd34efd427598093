use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::order::application::ports::outgoing::{ProductCatalog, ProductCatalogError};
use crate::modules::product::application::domain::Product;
use crate::modules::product::application::ports::outgoing::ProductQuery;

/// Exposes the product module's query port to the order services.
#[derive(Clone)]
pub struct CatalogAdapter<Q>
where
    Q: ProductQuery,
{
    products: Q,
}

impl<Q> CatalogAdapter<Q>
where
    Q: ProductQuery,
{
    pub fn new(products: Q) -> Self {
        Self { products }
    }
}

#[async_trait]
impl<Q> ProductCatalog for CatalogAdapter<Q>
where
    Q: ProductQuery + Send + Sync,
{
    async fn find_products(&self, product_ids: &[Uuid]) -> Result<Vec<Product>, ProductCatalogError> {
        self.products
            .find_by_ids(product_ids)
            .await
            .map_err(|e| ProductCatalogError::LookupFailed(e.to_string()))
    }
}
