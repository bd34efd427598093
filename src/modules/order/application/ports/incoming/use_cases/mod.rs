mod create_order;
mod get_single_order;
mod get_user_orders;
mod update_order_status;

pub use create_order::{CreateOrderError, CreateOrderInput, CreateOrderUseCase};
pub use get_single_order::{GetSingleOrderError, GetSingleOrderUseCase};
pub use get_user_orders::{GetUserOrdersError, GetUserOrdersUseCase};
pub use update_order_status::{UpdateOrderStatusError, UpdateOrderStatusUseCase};
