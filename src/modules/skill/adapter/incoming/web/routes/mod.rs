mod get_skill;
mod list_skills;

pub use get_skill::*;
pub use list_skills::*;
