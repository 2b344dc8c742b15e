pub mod skill_query;
#[cfg(any(test, feature = "test-helpers"))]
pub mod skill_repository;

pub use skill_query::{SkillQuery, SkillQueryError};
#[cfg(any(test, feature = "test-helpers"))]
pub use skill_repository::{CreateSkillData, SkillRepository, SkillRepositoryError};
