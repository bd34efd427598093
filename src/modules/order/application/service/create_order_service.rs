use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

use super::order_hydration::{index_products, to_owner_id_view, ProductIndex};
use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::order::{
    validate_contact, validate_items, validate_total,
};
use crate::modules::order::application::domain::{
    OrderItem, OrderPolicy, OrderValidationError, OrderView, INITIAL_STATUS,
};
use crate::modules::order::application::ports::incoming::use_cases::{
    CreateOrderError, CreateOrderInput, CreateOrderUseCase,
};
use crate::modules::order::application::ports::outgoing::{
    NewOrder, OrderRepository, ProductCatalog,
};

pub struct CreateOrderService<R>
where
    R: OrderRepository,
{
    repository: R,
    catalog: Arc<dyn ProductCatalog>,
    policy: OrderPolicy,
}

impl<R> CreateOrderService<R>
where
    R: OrderRepository,
{
    pub fn new(repository: R, catalog: Arc<dyn ProductCatalog>, policy: OrderPolicy) -> Self {
        Self {
            repository,
            catalog,
            policy,
        }
    }
}

/// Replaces submitted unit prices with catalog prices and sums the lines.
fn reprice(
    items: Vec<OrderItem>,
    products: &ProductIndex,
) -> Result<(Vec<OrderItem>, Decimal), OrderValidationError> {
    let items = items
        .into_iter()
        .map(|item| {
            let product = products
                .get(&item.product_id)
                .ok_or(OrderValidationError::UnknownProduct(item.product_id))?;
            Ok(OrderItem {
                price: product.price,
                ..item
            })
        })
        .collect::<Result<Vec<_>, OrderValidationError>>()?;

    let total = validate_total(items.iter().map(OrderItem::line_total).sum())?;

    Ok((items, total))
}

#[async_trait]
impl<R> CreateOrderUseCase for CreateOrderService<R>
where
    R: OrderRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        input: CreateOrderInput,
    ) -> Result<OrderView, CreateOrderError> {
        validate_items(&input.items)?;
        let submitted_total = validate_total(input.total_amount)?;
        let (delivery_address, phone) = validate_contact(&input.delivery_address, &input.phone)?;

        let products = index_products(
            self.catalog.as_ref(),
            input.items.iter().map(|item| item.product_id),
        )
        .await
        .map_err(|e| CreateOrderError::RepositoryError(e.to_string()))?;

        let (items, total_amount) = if self.policy.recompute_total {
            let (items, total) = reprice(input.items, &products)?;
            if total != submitted_total {
                debug!(%submitted_total, recomputed = %total, "Order total replaced");
            }
            (items, total)
        } else {
            (input.items, submitted_total)
        };

        let order = self
            .repository
            .create_order(NewOrder {
                user_id: user_id.value(),
                items,
                total_amount,
                delivery_address,
                phone,
                status: INITIAL_STATUS.to_string(),
            })
            .await
            .map_err(|e| CreateOrderError::RepositoryError(e.to_string()))?;

        Ok(to_owner_id_view(order, &products))
    }
}
