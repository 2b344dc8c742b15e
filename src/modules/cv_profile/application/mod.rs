pub mod cv_profile_use_cases;
pub mod ports;
pub mod services;
pub mod use_cases;
