mod get_skill_service;
mod list_skills_service;

pub use get_skill_service::GetSkillService;
pub use list_skills_service::{ListSkillsService, SKILL_LIST_LIMIT};
