use std::time::Duration;

use async_trait::async_trait;

use super::deadline::{within_deadline, DEFAULT_AGGREGATION_TIMEOUT};
use super::technology_join::{attach_technologies, TechnologyFetchStrategy};
use crate::modules::project::application::ports::incoming::use_cases::{
    ListProjectsError, ListProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectWithTechnologies};
use crate::shared::pagination::PageRequest;

// ============================================================================
// Service Implementation
// ============================================================================

/// Page of a profile's projects, each with its technologies attached.
pub struct ListProjectsWithTechnologiesService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
    strategy: TechnologyFetchStrategy,
    deadline: Duration,
}

impl<Q> ListProjectsWithTechnologiesService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self {
            query,
            strategy: TechnologyFetchStrategy::default(),
            deadline: DEFAULT_AGGREGATION_TIMEOUT,
        }
    }

    pub fn with_strategy(mut self, strategy: TechnologyFetchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }
}

#[async_trait]
impl<Q> ListProjectsUseCase for ListProjectsWithTechnologiesService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        profile_id: i32,
        page: PageRequest,
    ) -> Result<Vec<ProjectWithTechnologies>, ListProjectsError> {
        let work = async {
            if !self.query.profile_exists(profile_id).await? {
                return Err(ListProjectsError::ProfileNotFound);
            }

            let projects = self.query.list_by_profile(profile_id, page).await?;
            let enriched = attach_technologies(&self.query, projects, self.strategy).await?;

            Ok::<_, ListProjectsError>(enriched)
        };

        within_deadline(self.deadline, work).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    use crate::tests::support::project_test_fixtures::{project_row, technology, InMemoryProjectQuery};

    const ALL: [TechnologyFetchStrategy; 3] = [
        TechnologyFetchStrategy::Sequential,
        TechnologyFetchStrategy::Concurrent,
        TechnologyFetchStrategy::Batched,
    ];

    /// Profile 1: P1 uses T1(order 1) and T2(order 2), P2 uses nothing.
    fn profile_with_two_projects() -> InMemoryProjectQuery {
        InMemoryProjectQuery::new()
            .with_profile(1)
            .with_project(1, project_row(1, "P1"))
            .with_project(1, project_row(2, "P2"))
            .with_technology(technology(2, "T2", 2))
            .with_technology(technology(1, "T1", 1))
            .link_technology(1, 2)
            .link_technology(1, 1)
    }

    fn profile_with_projects(count: i32) -> InMemoryProjectQuery {
        let mut store = InMemoryProjectQuery::new()
            .with_profile(1)
            .with_technology(technology(1, "Rust", 1));
        for id in 1..=count {
            store = store
                .with_project(1, project_row(id, &format!("Project {id}")))
                .link_technology(id, 1);
        }
        store
    }

    #[tokio::test]
    async fn attaches_ordered_technologies_and_keeps_empty_lists() {
        let service = ListProjectsWithTechnologiesService::new(profile_with_two_projects());

        let result = service.execute(1, PageRequest::new(1, 5)).await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].project.id, 1);
        let names: Vec<_> = result[0]
            .technologies_used
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["T1", "T2"]);
        assert_eq!(result[1].project.id, 2);
        assert!(result[1].technologies_used.is_empty());

        let json = serde_json::to_value(&result[1]).unwrap();
        assert_eq!(json["technologies_used"], serde_json::json!([]));
        assert_eq!(json["title"], "P2");
    }

    #[tokio::test]
    async fn output_follows_underlying_page() {
        for strategy in ALL {
            let service =
                ListProjectsWithTechnologiesService::new(profile_with_projects(12)).with_strategy(strategy);

            let first = service.execute(1, PageRequest::new(1, 5)).await.unwrap();
            let third = service.execute(1, PageRequest::new(3, 5)).await.unwrap();

            let first_ids: Vec<i32> = first.iter().map(|p| p.project.id).collect();
            let third_ids: Vec<i32> = third.iter().map(|p| p.project.id).collect();
            assert_eq!(first_ids, vec![1, 2, 3, 4, 5], "{strategy:?}");
            assert_eq!(third_ids, vec![11, 12], "{strategy:?}");
            assert!(third.iter().all(|p| p.technologies_used.len() == 1));
        }
    }

    #[tokio::test]
    async fn repeated_calls_return_identical_output() {
        let service = ListProjectsWithTechnologiesService::new(profile_with_two_projects());

        let first = service.execute(1, PageRequest::new(1, 5)).await.unwrap();
        let second = service.execute(1, PageRequest::new(1, 5)).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn existing_profile_without_projects_returns_empty() {
        let service =
            ListProjectsWithTechnologiesService::new(InMemoryProjectQuery::new().with_profile(4));

        let result = service.execute(4, PageRequest::new(1, 5)).await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let store = profile_with_two_projects();
        let calls = store.technology_calls.clone();
        let service = ListProjectsWithTechnologiesService::new(store);

        let result = service.execute(99, PageRequest::new(1, 5)).await;

        assert!(matches!(result, Err(ListProjectsError::ProfileNotFound)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn project_list_failure_is_query_failed() {
        let service =
            ListProjectsWithTechnologiesService::new(profile_with_two_projects().failing_project_list());

        let result = service.execute(1, PageRequest::new(1, 5)).await;

        assert!(matches!(result, Err(ListProjectsError::QueryFailed(_))));
    }

    #[tokio::test]
    async fn technology_failure_returns_no_partial_page() {
        for strategy in ALL {
            let service = ListProjectsWithTechnologiesService::new(
                profile_with_two_projects().failing_technologies_for(2),
            )
            .with_strategy(strategy);

            let result = service.execute(1, PageRequest::new(1, 5)).await;

            assert!(
                matches!(result, Err(ListProjectsError::QueryFailed(_))),
                "{strategy:?}"
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn slow_lookups_are_cancelled_at_deadline() {
        for strategy in ALL {
            let service = ListProjectsWithTechnologiesService::new(
                profile_with_two_projects().with_technology_delay(Duration::from_secs(30)),
            )
            .with_strategy(strategy)
            .with_deadline(Duration::from_secs(1));

            let result = service.execute(1, PageRequest::new(1, 5)).await;

            assert!(
                matches!(result, Err(ListProjectsError::Cancelled(_))),
                "{strategy:?}"
            );
        }
    }
}
