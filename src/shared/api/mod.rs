mod extractor_config;
mod response;
pub mod validation;

pub use extractor_config::{custom_path_config, custom_query_config};
pub use response::{ApiError, ApiErrorResponse, ApiResponse};
