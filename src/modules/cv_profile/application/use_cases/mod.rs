mod get_cv_profile;

pub use get_cv_profile::{GetCvProfileError, GetCvProfileUseCase};
