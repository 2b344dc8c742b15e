pub mod cv_profile;
pub mod project;
pub mod skill;
