use std::sync::Arc;

use crate::modules::cv_profile::application::use_cases::GetCvProfileUseCase;

#[derive(Clone)]
pub struct CvProfileUseCases {
    pub get_profile: Arc<dyn GetCvProfileUseCase + Send + Sync>,
}
