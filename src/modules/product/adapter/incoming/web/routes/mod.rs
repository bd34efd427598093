mod create_product;
mod delete_product;
mod get_products;
mod get_single_product;
mod patch_product;

pub use create_product::*;
pub use delete_product::*;
pub use get_products::*;
pub use get_single_product::*;
pub use patch_product::*;
