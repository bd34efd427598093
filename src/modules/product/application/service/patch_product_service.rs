use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::product::application::domain::product::{
    validate_category, validate_name, validate_price, validate_stock,
};
use crate::modules::product::application::domain::{Product, ProductValidationError};
use crate::modules::product::application::ports::incoming::use_cases::{
    PatchProductError, PatchProductUseCase,
};
use crate::modules::product::application::ports::outgoing::{
    PatchField, PatchProductData, ProductRepository, ProductRepositoryError,
};

pub struct PatchProductService<R>
where
    R: ProductRepository,
{
    product_repository: R,
}

impl<R> PatchProductService<R>
where
    R: ProductRepository,
{
    pub fn new(product_repository: R) -> Self {
        Self { product_repository }
    }
}

/// Validates a supplied value; `null` is rejected for non-nullable fields.
fn check<T, F>(
    field: &'static str,
    value: PatchField<T>,
    validate: F,
) -> Result<PatchField<T>, ProductValidationError>
where
    F: FnOnce(T) -> Result<T, ProductValidationError>,
{
    match value {
        PatchField::Unset => Ok(PatchField::Unset),
        PatchField::Null => Err(ProductValidationError::NullNotAllowed(field)),
        PatchField::Value(v) => validate(v).map(PatchField::Value),
    }
}

fn validate(data: PatchProductData) -> Result<PatchProductData, ProductValidationError> {
    Ok(PatchProductData {
        name: check("name", data.name, |v| validate_name(&v))?,
        description: check("description", data.description, Ok)?,
        price: check("price", data.price, validate_price)?,
        image: check("image", data.image, Ok)?,
        category: check("category", data.category, |v| validate_category(&v))?,
        offer: data.offer,
        stock: check("stock", data.stock, validate_stock)?,
        is_active: check("isActive", data.is_active, Ok)?,
    })
}

#[async_trait]
impl<R> PatchProductUseCase for PatchProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    async fn execute(
        &self,
        product_id: Uuid,
        data: PatchProductData,
    ) -> Result<Product, PatchProductError> {
        let data = validate(data)?;

        self.product_repository
            .patch_product(product_id, data)
            .await
            .map_err(|e| match e {
                ProductRepositoryError::NotFound => PatchProductError::NotFound,
                ProductRepositoryError::DatabaseError(msg) => {
                    PatchProductError::RepositoryError(msg)
                }
            })
    }
}
