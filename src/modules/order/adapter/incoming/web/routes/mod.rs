mod create_order;
mod get_single_order;
mod get_user_orders;
mod update_order_status;

pub use create_order::*;
pub use get_single_order::*;
pub use get_user_orders::*;
pub use update_order_status::*;
