use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::sea_orm_entity::{order_items, orders};
use crate::modules::order::application::domain::{Order, OrderItem};

pub(super) type ItemsByOrder = HashMap<Uuid, Vec<OrderItem>>;

/// Loads line items for the given orders in `position` order.
pub(super) async fn load_items<C>(db: &C, order_ids: &[Uuid]) -> Result<ItemsByOrder, DbErr>
where
    C: ConnectionTrait,
{
    if order_ids.is_empty() {
        return Ok(ItemsByOrder::new());
    }

    let rows = order_items::Entity::find()
        .filter(order_items::Column::OrderId.is_in(order_ids.iter().copied()))
        .order_by_asc(order_items::Column::OrderId)
        .order_by_asc(order_items::Column::Position)
        .all(db)
        .await?;

    let mut grouped = ItemsByOrder::new();
    for row in rows {
        grouped.entry(row.order_id).or_default().push(OrderItem {
            product_id: row.product_id,
            quantity: row.quantity,
            price: row.price,
        });
    }

    Ok(grouped)
}

pub(super) fn to_order(model: orders::Model, items: Vec<OrderItem>) -> Order {
    Order {
        id: model.id,
        user_id: model.user_id,
        items,
        total_amount: model.total_amount,
        delivery_address: model.delivery_address,
        phone: model.phone,
        status: model.status,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}
