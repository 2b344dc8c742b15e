pub mod cv_profile_query;
#[cfg(any(test, feature = "test-helpers"))]
pub mod cv_profile_repository;

pub use cv_profile_query::{CvProfileQuery, CvProfileQueryError};
#[cfg(any(test, feature = "test-helpers"))]
pub use cv_profile_repository::{
    CreateCvEducationData, CreateCvProfileData, CvProfileRepository, CvProfileRepositoryError,
};
