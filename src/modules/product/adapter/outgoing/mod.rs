pub mod product_archiver_postgres;
pub mod product_query_postgres;
pub mod product_repository_postgres;
pub mod sea_orm_entity;

pub use product_archiver_postgres::ProductArchiverPostgres;
pub use product_query_postgres::ProductQueryPostgres;
pub use product_repository_postgres::ProductRepositoryPostgres;
