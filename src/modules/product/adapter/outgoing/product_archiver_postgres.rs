// src/modules/product/adapter/outgoing/product_archiver_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::product::adapter::outgoing::sea_orm_entity::products::{Column, Entity};
use crate::modules::product::application::ports::outgoing::product_archiver::{
    ProductArchiver, ProductArchiverError,
};

#[derive(Clone)]
pub struct ProductArchiverPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductArchiverPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductArchiver for ProductArchiverPostgres {
    async fn soft_delete(&self, product_id: Uuid) -> Result<(), ProductArchiverError> {
        // Not state-aware: deleting an already inactive product still matches its row.
        let res = Entity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(product_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ProductArchiverError::NotFound);
        }

        Ok(())
    }

    async fn hard_delete(&self, product_id: Uuid) -> Result<(), ProductArchiverError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(product_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ProductArchiverError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ProductArchiverError {
    ProductArchiverError::DatabaseError(e.to_string())
}
