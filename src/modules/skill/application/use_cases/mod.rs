mod get_skill;
mod list_skills;

pub use get_skill::{GetSkillError, GetSkillUseCase};
pub use list_skills::{ListSkillsError, ListSkillsUseCase};
