use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use super::order_hydration::{index_products, to_view};
use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::{OrderPolicy, OrderUser, OrderView};
use crate::modules::order::application::ports::incoming::use_cases::{
    GetSingleOrderError, GetSingleOrderUseCase,
};
use crate::modules::order::application::ports::outgoing::{
    OrderOwnerDirectory, OrderQuery, ProductCatalog,
};

pub struct GetSingleOrderService<Q>
where
    Q: OrderQuery,
{
    query: Q,
    catalog: Arc<dyn ProductCatalog>,
    owners: Arc<dyn OrderOwnerDirectory>,
    policy: OrderPolicy,
}

impl<Q> GetSingleOrderService<Q>
where
    Q: OrderQuery,
{
    pub fn new(
        query: Q,
        catalog: Arc<dyn ProductCatalog>,
        owners: Arc<dyn OrderOwnerDirectory>,
        policy: OrderPolicy,
    ) -> Self {
        Self {
            query,
            catalog,
            owners,
            policy,
        }
    }
}

#[async_trait]
impl<Q> GetSingleOrderUseCase for GetSingleOrderService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(
        &self,
        requester: UserId,
        order_id: Uuid,
    ) -> Result<OrderView, GetSingleOrderError> {
        let order = self
            .query
            .find_by_id(order_id)
            .await
            .map_err(|e| GetSingleOrderError::RepositoryError(e.to_string()))?
            .ok_or(GetSingleOrderError::NotFound)?;

        if self.policy.enforce_ownership && order.user_id != requester.value() {
            warn!(%order_id, requester = %requester, "Order lookup by non-owner hidden");
            return Err(GetSingleOrderError::NotFound);
        }

        let products = index_products(self.catalog.as_ref(), order.product_ids())
            .await
            .map_err(|e| GetSingleOrderError::RepositoryError(e.to_string()))?;

        let user = self
            .owners
            .find_owner(order.user_id)
            .await
            .map_err(|e| GetSingleOrderError::RepositoryError(e.to_string()))?
            .map(OrderUser::Profile)
            .unwrap_or(OrderUser::Id(order.user_id));

        Ok(to_view(order, user, &products))
    }
}
