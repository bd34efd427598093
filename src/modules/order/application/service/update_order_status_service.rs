use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use super::order_hydration::{index_products, to_owner_id_view};
use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::order_status::validate_status_change;
use crate::modules::order::application::domain::{OrderPolicy, OrderView};
use crate::modules::order::application::ports::incoming::use_cases::{
    UpdateOrderStatusError, UpdateOrderStatusUseCase,
};
use crate::modules::order::application::ports::outgoing::{
    OrderQuery, OrderRepository, OrderRepositoryError, ProductCatalog,
};

pub struct UpdateOrderStatusService<Q, R>
where
    Q: OrderQuery,
    R: OrderRepository,
{
    query: Q,
    repository: R,
    catalog: Arc<dyn ProductCatalog>,
    policy: OrderPolicy,
}

impl<Q, R> UpdateOrderStatusService<Q, R>
where
    Q: OrderQuery,
    R: OrderRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        catalog: Arc<dyn ProductCatalog>,
        policy: OrderPolicy,
    ) -> Self {
        Self {
            query,
            repository,
            catalog,
            policy,
        }
    }
}

#[async_trait]
impl<Q, R> UpdateOrderStatusUseCase for UpdateOrderStatusService<Q, R>
where
    Q: OrderQuery + Send + Sync,
    R: OrderRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: UserId,
        order_id: Uuid,
        status: String,
    ) -> Result<OrderView, UpdateOrderStatusError> {
        let current = self
            .query
            .find_by_id(order_id)
            .await
            .map_err(|e| UpdateOrderStatusError::RepositoryError(e.to_string()))?
            .ok_or(UpdateOrderStatusError::NotFound)?;

        if self.policy.enforce_ownership && current.user_id != requester.value() {
            warn!(%order_id, requester = %requester, "Status update by non-owner hidden");
            return Err(UpdateOrderStatusError::NotFound);
        }

        let status = validate_status_change(
            &current.status,
            &status,
            self.policy.enforce_status_transitions,
        )?;

        let order = self
            .repository
            .update_status(order_id, status)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::NotFound => UpdateOrderStatusError::NotFound,
                OrderRepositoryError::DatabaseError(msg) => {
                    UpdateOrderStatusError::RepositoryError(msg)
                }
            })?;

        let products = index_products(self.catalog.as_ref(), order.product_ids())
            .await
            .map_err(|e| UpdateOrderStatusError::RepositoryError(e.to_string()))?;

        Ok(to_owner_id_view(order, &products))
    }
}
