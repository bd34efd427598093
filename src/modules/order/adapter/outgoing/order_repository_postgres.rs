// src/modules/order/adapter/outgoing/order_repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::order_rows::{load_items, to_order};
use super::sea_orm_entity::{order_items, orders};
use crate::modules::order::application::domain::Order;
use crate::modules::order::application::ports::outgoing::{
    NewOrder, OrderRepository, OrderRepositoryError,
};

#[derive(Clone)]
pub struct OrderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrderRepositoryError> {
        let order_id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let header = orders::ActiveModel {
            id: Set(order_id),
            user_id: Set(order.user_id),
            total_amount: Set(order.total_amount),
            delivery_address: Set(order.delivery_address),
            phone: Set(order.phone),
            status: Set(order.status),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        let lines = order
            .items
            .iter()
            .zip(0i32..)
            .map(|(item, position)| order_items::ActiveModel {
                id: Set(Uuid::new_v4()),
                order_id: Set(order_id),
                product_id: Set(item.product_id),
                position: Set(position),
                quantity: Set(item.quantity),
                price: Set(item.price),
            });

        order_items::Entity::insert_many(lines)
            .exec_without_returning(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        debug!(%order_id, items = order.items.len(), "Order persisted");

        Ok(to_order(header, order.items))
    }

    async fn update_status(
        &self,
        order_id: Uuid,
        status: String,
    ) -> Result<Order, OrderRepositoryError> {
        let updated = orders::Entity::update_many()
            .col_expr(orders::Column::Status, Expr::value(status))
            .col_expr(
                orders::Column::UpdatedAt,
                Expr::value(Utc::now().fixed_offset()),
            )
            .filter(orders::Column::Id.eq(order_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let model = updated
            .into_iter()
            .next()
            .ok_or(OrderRepositoryError::NotFound)?;

        let mut items = load_items(&*self.db, &[model.id])
            .await
            .map_err(map_db_err)?;
        let lines = items.remove(&model.id).unwrap_or_default();

        Ok(to_order(model, lines))
    }
}

fn map_db_err(e: DbErr) -> OrderRepositoryError {
    OrderRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::order::application::domain::OrderItem;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn new_order() -> NewOrder {
        NewOrder {
            user_id: Uuid::new_v4(),
            items: vec![
                OrderItem {
                    product_id: Uuid::new_v4(),
                    quantity: 2,
                    price: Decimal::new(250, 2),
                },
                OrderItem {
                    product_id: Uuid::new_v4(),
                    quantity: 1,
                    price: Decimal::new(99, 2),
                },
            ],
            total_amount: Decimal::new(599, 2),
            delivery_address: "1 Main St".to_string(),
            phone: "5550100".to_string(),
            status: "created".to_string(),
        }
    }

    fn header_for(order: &NewOrder) -> orders::Model {
        let now = Utc::now().fixed_offset();
        orders::Model {
            id: Uuid::new_v4(),
            user_id: order.user_id,
            total_amount: order.total_amount,
            delivery_address: order.delivery_address.clone(),
            phone: order.phone.clone(),
            status: order.status.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_order_writes_header_and_items_in_one_transaction() {
        let input = new_order();
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![header_for(&input)]])
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                }])
                .into_connection(),
        );

        let repo = OrderRepositoryPostgres::new(db.clone());
        let order = repo.create_order(input.clone()).await.unwrap();

        assert_eq!(order.total_amount, input.total_amount);
        assert_eq!(order.status, "created");
        assert_eq!(order.items, input.items);

        drop(repo);
        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        assert_eq!(log.len(), 1, "header and items share a transaction");
        let sql = format!("{:?}", log[0]).replace(r#"\""#, "\"");
        assert!(sql.contains(r#"INSERT INTO "orders""#), "{}", sql);
        assert!(sql.contains(r#"INSERT INTO "order_items""#), "{}", sql);
    }

    #[tokio::test]
    async fn test_create_order_item_failure_is_error() {
        let input = new_order();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![header_for(&input)]])
            .append_exec_errors([DbErr::Custom("check constraint".to_string())])
            .into_connection();

        let repo = OrderRepositoryPostgres::new(Arc::new(db));
        let res = repo.create_order(input).await;

        assert!(matches!(res, Err(OrderRepositoryError::DatabaseError(m)) if m.contains("check constraint")));
    }

    #[tokio::test]
    async fn test_update_status_returns_order_with_items() {
        let input = new_order();
        let mut header = header_for(&input);
        header.status = "Left with concierge".to_string();
        let item = order_items::Model {
            id: Uuid::new_v4(),
            order_id: header.id,
            product_id: input.items[0].product_id,
            position: 0,
            quantity: 2,
            price: Decimal::new(250, 2),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![header.clone()]])
            .append_query_results([vec![item]])
            .into_connection();

        let repo = OrderRepositoryPostgres::new(Arc::new(db));
        let order = repo
            .update_status(header.id, "Left with concierge".to_string())
            .await
            .unwrap();

        assert_eq!(order.status, "Left with concierge");
        assert_eq!(order.items.len(), 1);
    }

    #[tokio::test]
    async fn test_update_status_unknown_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<orders::Model>::new()])
            .into_connection();

        let repo = OrderRepositoryPostgres::new(Arc::new(db));
        let res = repo
            .update_status(Uuid::new_v4(), "confirmed".to_string())
            .await;

        assert!(matches!(res, Err(OrderRepositoryError::NotFound)));
    }
}
