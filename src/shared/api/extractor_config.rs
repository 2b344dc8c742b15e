// src/shared/api/extractor_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{PathConfig, QueryConfig};

/// Malformed path segments (e.g. a non-numeric id) answer with the same
/// 400 envelope as explicit validation failures.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}
