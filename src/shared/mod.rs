pub mod api;
pub mod cors;
pub mod money;
pub mod policy;
