use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Ordinal weight used for display ordering by clients
    pub importance: i32,
    pub image: String,
    pub hex_theme_color: String,
    pub cv_profile_id: i32,
}
