pub mod order_owner_directory;
pub mod order_query;
pub mod order_repository;
pub mod product_catalog;

pub use order_owner_directory::{OrderOwnerDirectory, OrderOwnerDirectoryError};
pub use order_query::{OrderQuery, OrderQueryError};
pub use order_repository::{NewOrder, OrderRepository, OrderRepositoryError};
pub use product_catalog::{ProductCatalog, ProductCatalogError};
