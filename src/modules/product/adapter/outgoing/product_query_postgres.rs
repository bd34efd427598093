// src/modules/product/adapter/outgoing/product_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::product::adapter::outgoing::sea_orm_entity::products::{Column, Entity};
use crate::modules::product::application::domain::Product;
use crate::modules::product::application::ports::outgoing::product_query::{
    ProductListFilter, ProductQuery, ProductQueryError,
};

#[derive(Clone)]
pub struct ProductQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQuery for ProductQueryPostgres {
    async fn list_products(
        &self,
        filter: ProductListFilter,
    ) -> Result<Vec<Product>, ProductQueryError> {
        let mut select = Entity::find();

        if filter.active_only {
            select = select.filter(Column::IsActive.eq(true));
        }

        if let Some(category) = filter.category {
            select = select.filter(Column::Category.eq(category));
        }

        let rows = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn get_product(&self, product_id: Uuid) -> Result<Option<Product>, ProductQueryError> {
        let row = Entity::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Product::from))
    }

    async fn find_by_ids(&self, product_ids: &[Uuid]) -> Result<Vec<Product>, ProductQueryError> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = Entity::find()
            .filter(Column::Id.is_in(product_ids.iter().copied()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }
}

fn map_db_err(e: DbErr) -> ProductQueryError {
    ProductQueryError::DatabaseError(e.to_string())
}
