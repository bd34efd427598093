use async_trait::async_trait;

use crate::modules::product::application::domain::product::{
    validate_category, validate_name, validate_price, validate_stock,
};
use crate::modules::product::application::domain::Product;
use crate::modules::product::application::ports::incoming::use_cases::{
    CreateProductError, CreateProductInput, CreateProductUseCase,
};
use crate::modules::product::application::ports::outgoing::{
    CreateProductData, ProductRepository, ProductRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProductService<R>
where
    R: ProductRepository,
{
    product_repository: R,
}

impl<R> CreateProductService<R>
where
    R: ProductRepository,
{
    pub fn new(product_repository: R) -> Self {
        Self { product_repository }
    }
}

fn validate(input: CreateProductInput) -> Result<CreateProductData, CreateProductError> {
    Ok(CreateProductData {
        name: validate_name(&input.name)?,
        description: input.description.unwrap_or_default(),
        price: validate_price(input.price)?,
        image: input.image.unwrap_or_default(),
        category: validate_category(&input.category)?,
        offer: input.offer,
        stock: validate_stock(input.stock.unwrap_or(0))?,
        is_active: input.is_active.unwrap_or(true),
    })
}

#[async_trait]
impl<R> CreateProductUseCase for CreateProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    async fn execute(&self, input: CreateProductInput) -> Result<Product, CreateProductError> {
        let data = validate(input)?;

        self.product_repository
            .create_product(data)
            .await
            .map_err(|e| match e {
                ProductRepositoryError::DatabaseError(msg) => {
                    CreateProductError::RepositoryError(msg)
                }
                ProductRepositoryError::NotFound => CreateProductError::RepositoryError(
                    "unexpected not found while creating product".to_string(),
                ),
            })
    }
}
