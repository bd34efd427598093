mod create_product;
mod delete_product;
mod get_products;
mod get_single_product;
mod patch_product;

pub use create_product::{CreateProductError, CreateProductInput, CreateProductUseCase};
pub use delete_product::{DeleteProductError, DeleteProductOutcome, DeleteProductUseCase};
pub use get_products::{GetProductsError, GetProductsUseCase};
pub use get_single_product::{GetSingleProductError, GetSingleProductUseCase};
pub use patch_product::{PatchProductError, PatchProductUseCase};
