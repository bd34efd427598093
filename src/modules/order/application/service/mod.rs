mod order_hydration;

pub mod create_order_service;
pub mod get_single_order_service;
pub mod get_user_orders_service;
pub mod update_order_status_service;

pub use create_order_service::CreateOrderService;
pub use get_single_order_service::GetSingleOrderService;
pub use get_user_orders_service::GetUserOrdersService;
pub use update_order_status_service::UpdateOrderStatusService;
