pub mod create_product_service;
pub mod delete_product_service;
pub mod get_products_service;
pub mod get_single_product_service;
pub mod patch_product_service;

pub use create_product_service::CreateProductService;
pub use delete_product_service::DeleteProductService;
pub use get_products_service::GetProductsService;
pub use get_single_product_service::GetSingleProductService;
pub use patch_product_service::PatchProductService;
