// src/modules/order/adapter/outgoing/order_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::order_rows::{load_items, to_order};
use super::sea_orm_entity::orders::{Column, Entity};
use crate::modules::order::application::domain::Order;
use crate::modules::order::application::ports::outgoing::{OrderQuery, OrderQueryError};

#[derive(Clone)]
pub struct OrderQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQuery for OrderQueryPostgres {
    async fn find_by_id(&self, order_id: Uuid) -> Result<Option<Order>, OrderQueryError> {
        let Some(model) = Entity::find_by_id(order_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut items = load_items(&*self.db, &[model.id]).await.map_err(map_db_err)?;
        let lines = items.remove(&model.id).unwrap_or_default();

        Ok(Some(to_order(model, lines)))
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Order>, OrderQueryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let mut items = load_items(&*self.db, &ids).await.map_err(map_db_err)?;

        Ok(models
            .into_iter()
            .map(|model| {
                let lines = items.remove(&model.id).unwrap_or_default();
                to_order(model, lines)
            })
            .collect())
    }
}

fn map_db_err(e: DbErr) -> OrderQueryError {
    OrderQueryError::DatabaseError(e.to_string())
}
