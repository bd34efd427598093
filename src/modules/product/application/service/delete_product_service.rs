use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::product::application::ports::incoming::use_cases::{
    DeleteProductError, DeleteProductOutcome, DeleteProductUseCase,
};
use crate::modules::product::application::ports::outgoing::{
    ProductArchiver, ProductArchiverError,
};

pub struct DeleteProductService<A>
where
    A: ProductArchiver,
{
    archiver: A,
}

impl<A> DeleteProductService<A>
where
    A: ProductArchiver,
{
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }
}

#[async_trait]
impl<A> DeleteProductUseCase for DeleteProductService<A>
where
    A: ProductArchiver + Send + Sync,
{
    async fn execute(
        &self,
        product_id: Uuid,
        permanent: bool,
    ) -> Result<DeleteProductOutcome, DeleteProductError> {
        let result = if permanent {
            self.archiver
                .hard_delete(product_id)
                .await
                .map(|_| DeleteProductOutcome::PermanentlyDeleted)
        } else {
            self.archiver
                .soft_delete(product_id)
                .await
                .map(|_| DeleteProductOutcome::SoftDeleted)
        };

        result.map_err(|e| match e {
            ProductArchiverError::NotFound => DeleteProductError::NotFound,
            ProductArchiverError::DatabaseError(msg) => DeleteProductError::RepositoryError(msg),
        })
    }
}
