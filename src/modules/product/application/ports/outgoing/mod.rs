pub mod product_archiver;
pub mod product_query;
pub mod product_repository;

pub use product_archiver::{ProductArchiver, ProductArchiverError};
pub use product_query::{ProductListFilter, ProductQuery, ProductQueryError};
pub use product_repository::{
    CreateProductData, PatchField, PatchProductData, ProductRepository, ProductRepositoryError,
};
