use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::product::adapter::outgoing::sea_orm_entity::products::{
    ActiveModel, Column, Entity,
};
use crate::modules::product::application::domain::Product;
use crate::modules::product::application::ports::outgoing::product_repository::{
    CreateProductData, PatchField, PatchProductData, ProductRepository, ProductRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProductRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            price: Set(data.price),
            image: Set(data.image),
            category: Set(data.category),
            offer: Set(data.offer),
            stock: Set(data.stock),
            is_active: Set(data.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn patch_product(
        &self,
        product_id: Uuid,
        data: PatchProductData,
    ) -> Result<Product, ProductRepositoryError> {
        if data.is_empty() {
            let result = Entity::find_by_id(product_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProductRepositoryError::NotFound)?;

            return Ok(result.into());
        }

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name);
        }
        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }
        if let PatchField::Value(price) = data.price {
            model.price = Set(price);
        }
        if let PatchField::Value(image) = data.image {
            model.image = Set(image);
        }
        if let PatchField::Value(category) = data.category {
            model.category = Set(category);
        }
        match data.offer {
            PatchField::Unset => {}
            PatchField::Null => model.offer = Set(None),
            PatchField::Value(offer) => model.offer = Set(Some(offer)),
        }
        if let PatchField::Value(stock) = data.stock {
            model.stock = Set(stock);
        }
        if let PatchField::Value(is_active) = data.is_active {
            model.is_active = Set(is_active);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(product_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProductRepositoryError::NotFound)?;

        Ok(result.into())
    }
}

fn map_db_err(e: DbErr) -> ProductRepositoryError {
    ProductRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
