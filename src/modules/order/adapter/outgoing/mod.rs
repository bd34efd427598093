mod order_rows;

pub mod order_owner_adapter;
pub mod order_query_postgres;
pub mod order_repository_postgres;
pub mod product_catalog_adapter;
pub mod sea_orm_entity;

pub use order_owner_adapter::UserDirectoryAdapter;
pub use order_query_postgres::OrderQueryPostgres;
pub use order_repository_postgres::OrderRepositoryPostgres;
pub use product_catalog_adapter::CatalogAdapter;
