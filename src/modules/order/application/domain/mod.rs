pub mod order;
pub mod order_policy;
pub mod order_status;
pub mod order_view;

pub use order::{Order, OrderItem, OrderValidationError};
pub use order_policy::OrderPolicy;
pub use order_status::{OrderStatus, INITIAL_STATUS};
pub use order_view::{OrderItemView, OrderOwner, OrderUser, OrderView};
