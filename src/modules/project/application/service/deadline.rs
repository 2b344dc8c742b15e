use std::future::Future;
use std::time::Duration;

use crate::modules::project::application::ports::incoming::use_cases::ListProjectsError;

pub const DEFAULT_AGGREGATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs an aggregation under `deadline`. On expiry the inner future is
/// dropped together with any accessor call still in flight.
pub(super) async fn within_deadline<T, F>(deadline: Duration, work: F) -> Result<T, ListProjectsError>
where
    F: Future<Output = Result<T, ListProjectsError>>,
{
    match tokio::time::timeout(deadline, work).await {
        Ok(result) => result,
        Err(_) => Err(ListProjectsError::Cancelled(format!(
            "deadline of {}ms exceeded",
            deadline.as_millis()
        ))),
    }
}
