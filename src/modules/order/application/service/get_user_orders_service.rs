use async_trait::async_trait;
use std::sync::Arc;

use super::order_hydration::{index_products, to_owner_id_view};
use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::OrderView;
use crate::modules::order::application::ports::incoming::use_cases::{
    GetUserOrdersError, GetUserOrdersUseCase,
};
use crate::modules::order::application::ports::outgoing::{OrderQuery, ProductCatalog};

pub struct GetUserOrdersService<Q>
where
    Q: OrderQuery,
{
    query: Q,
    catalog: Arc<dyn ProductCatalog>,
}

impl<Q> GetUserOrdersService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q, catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { query, catalog }
    }
}

#[async_trait]
impl<Q> GetUserOrdersUseCase for GetUserOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Vec<OrderView>, GetUserOrdersError> {
        let orders = self
            .query
            .list_for_user(user_id.value())
            .await
            .map_err(|e| GetUserOrdersError::RepositoryError(e.to_string()))?;

        let products = index_products(
            self.catalog.as_ref(),
            orders.iter().flat_map(|order| order.product_ids()),
        )
        .await
        .map_err(|e| GetUserOrdersError::RepositoryError(e.to_string()))?;

        Ok(orders
            .into_iter()
            .map(|order| to_owner_id_view(order, &products))
            .collect())
    }
}
