pub mod cv_educations;
pub mod cv_profiles;
