pub mod api;
pub mod pagination;
