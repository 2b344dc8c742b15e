mod get_cv_profile_service;

pub use get_cv_profile_service::GetCvProfileService;
