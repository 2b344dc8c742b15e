// src/shared/api/validation.rs
use std::sync::LazyLock;

use actix_web::HttpResponse;
use regex::Regex;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;

pub const MIN_PAGE_SIZE: i64 = 5;
pub const MAX_PAGE_SIZE: i64 = 15;
/// Keeps `(page - 1) * page_size` well inside a SQL `BIGINT` offset.
pub const MAX_PAGE: i64 = i32::MAX as i64;

static SKILL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("skill name pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("id must be a positive integer")]
    InvalidId,

    #[error("page must be between 1 and 2147483647")]
    InvalidPage,

    #[error("page_size must be between 5 and 15")]
    InvalidPageSize,

    #[error("skill must be a non-empty alphabetic name")]
    InvalidSkillName,
}

impl ValidationError {
    pub fn to_response(&self) -> HttpResponse {
        ApiResponse::bad_request("VALIDATION_ERROR", &self.to_string())
    }
}

/// `?page=&page_size=` for paginated list endpoints. Both are required.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PageQuery {
    /// 1-based page number
    pub page: i64,
    /// Rows per page (5-15)
    pub page_size: i64,
}

impl PageQuery {
    pub fn validate(&self) -> Result<PageRequest, ValidationError> {
        if !(1..=MAX_PAGE).contains(&self.page) {
            return Err(ValidationError::InvalidPage);
        }
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ValidationError::InvalidPageSize);
        }
        Ok(PageRequest::new(self.page as u64, self.page_size as u64))
    }
}

pub fn validate_id(raw: i64) -> Result<i32, ValidationError> {
    if raw < 1 {
        return Err(ValidationError::InvalidId);
    }
    i32::try_from(raw).map_err(|_| ValidationError::InvalidId)
}

pub fn validate_skill_name(raw: &str) -> Result<&str, ValidationError> {
    if SKILL_NAME.is_match(raw) {
        Ok(raw)
    } else {
        Err(ValidationError::InvalidSkillName)
    }
}
