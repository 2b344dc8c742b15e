use std::collections::HashMap;
use std::str::FromStr;

use futures::future::try_join_all;

use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectRow, ProjectWithTechnologies, TechnologyItem,
};

/// How technologies are fetched for a page of projects.
/// Every strategy yields the same output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TechnologyFetchStrategy {
    /// One lookup per project, awaited in page order.
    #[default]
    Sequential,
    /// Per-project lookups polled together; the first failure aborts the rest.
    Concurrent,
    /// A single lookup for the whole page, grouped back per project.
    Batched,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown technology fetch strategy '{0}' (expected sequential, concurrent or batched)")]
pub struct UnknownStrategy(pub String);

impl FromStr for TechnologyFetchStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "concurrent" => Ok(Self::Concurrent),
            "batched" => Ok(Self::Batched),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Enriches `projects` with their technologies, keeping page order.
/// Any failed lookup fails the whole call.
pub async fn attach_technologies<Q>(
    query: &Q,
    projects: Vec<ProjectRow>,
    strategy: TechnologyFetchStrategy,
) -> Result<Vec<ProjectWithTechnologies>, ProjectQueryError>
where
    Q: ProjectQuery + ?Sized,
{
    if projects.is_empty() {
        return Ok(Vec::new());
    }

    match strategy {
        TechnologyFetchStrategy::Sequential => {
            let mut enriched = Vec::with_capacity(projects.len());
            for project in projects {
                let technologies_used = query.list_technologies_for_project(project.id).await?;
                enriched.push(ProjectWithTechnologies {
                    project,
                    technologies_used,
                });
            }
            Ok(enriched)
        }

        TechnologyFetchStrategy::Concurrent => {
            let lookups = projects
                .iter()
                .map(|project| query.list_technologies_for_project(project.id));
            let technologies = try_join_all(lookups).await?;

            Ok(projects
                .into_iter()
                .zip(technologies)
                .map(|(project, technologies_used)| ProjectWithTechnologies {
                    project,
                    technologies_used,
                })
                .collect())
        }

        TechnologyFetchStrategy::Batched => {
            let ids: Vec<i32> = projects.iter().map(|project| project.id).collect();
            let linked = query.list_technologies_for_projects(&ids).await?;

            let mut by_project: HashMap<i32, Vec<TechnologyItem>> = HashMap::new();
            for link in linked {
                by_project
                    .entry(link.project_id)
                    .or_default()
                    .push(link.technology);
            }

            Ok(projects
                .into_iter()
                .map(|project| {
                    let technologies_used = by_project.remove(&project.id).unwrap_or_default();
                    ProjectWithTechnologies {
                        project,
                        technologies_used,
                    }
                })
                .collect())
        }
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

    fn store() -> InMemoryProjectQuery {
        InMemoryProjectQuery::new()
            .with_profile(1)
            .with_project(1, project_row(1, "Alpha"))
            .with_project(1, project_row(2, "Beta"))
            .with_project(1, project_row(3, "Gamma"))
            .with_technology(technology(10, "Postgres", 3))
            .with_technology(technology(11, "Rust", 1))
            .with_technology(technology(12, "Docker", 2))
            .link_technology(1, 10)
            .link_technology(1, 11)
            .link_technology(3, 12)
            .link_technology(3, 11)
    }

    fn page() -> Vec<ProjectRow> {
        vec![project_row(1, "Alpha"), project_row(2, "Beta"), project_row(3, "Gamma")]
    }

    fn tech_names(item: &ProjectWithTechnologies) -> Vec<&str> {
        item.technologies_used.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn parses_strategy_names() {
        assert_eq!(
            "sequential".parse::<TechnologyFetchStrategy>(),
            Ok(TechnologyFetchStrategy::Sequential)
        );
        assert_eq!(
            " Concurrent ".parse::<TechnologyFetchStrategy>(),
            Ok(TechnologyFetchStrategy::Concurrent)
        );
        assert_eq!(
            "BATCHED".parse::<TechnologyFetchStrategy>(),
            Ok(TechnologyFetchStrategy::Batched)
        );
        assert_eq!(
            "parallel".parse::<TechnologyFetchStrategy>(),
            Err(UnknownStrategy("parallel".to_string()))
        );
        assert_eq!(TechnologyFetchStrategy::default(), TechnologyFetchStrategy::Sequential);
    }

    #[tokio::test]
    async fn every_strategy_keeps_page_and_technology_order() {
        for strategy in ALL {
            let enriched = attach_technologies(&store(), page(), strategy).await.unwrap();

            let ids: Vec<i32> = enriched.iter().map(|p| p.project.id).collect();
            assert_eq!(ids, vec![1, 2, 3], "{strategy:?}");
            assert_eq!(tech_names(&enriched[0]), vec!["Rust", "Postgres"], "{strategy:?}");
            assert!(enriched[1].technologies_used.is_empty(), "{strategy:?}");
            assert_eq!(tech_names(&enriched[2]), vec!["Rust", "Docker"], "{strategy:?}");
        }
    }

    #[tokio::test]
    async fn strategies_produce_identical_output() {
        let sequential = attach_technologies(&store(), page(), TechnologyFetchStrategy::Sequential)
            .await
            .unwrap();

        for strategy in ALL {
            let other = attach_technologies(&store(), page(), strategy).await.unwrap();
            assert_eq!(sequential, other, "{strategy:?}");
        }
    }

    #[tokio::test]
    async fn lookup_counts_match_strategy() {
        let per_project = store();
        let calls = per_project.technology_calls.clone();
        attach_technologies(&per_project, page(), TechnologyFetchStrategy::Sequential)
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        let batched = store();
        let per_project_calls = batched.technology_calls.clone();
        let batched_calls = batched.batched_calls.clone();
        attach_technologies(&batched, page(), TechnologyFetchStrategy::Batched)
            .await
            .unwrap();
        assert_eq!(per_project_calls.load(Ordering::SeqCst), 0);
        assert_eq!(batched_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_page_issues_no_lookups() {
        for strategy in ALL {
            let query = store();
            let calls = query.technology_calls.clone();
            let batched = query.batched_calls.clone();

            let enriched = attach_technologies(&query, Vec::new(), strategy).await.unwrap();

            assert!(enriched.is_empty());
            assert_eq!(calls.load(Ordering::SeqCst), 0);
            assert_eq!(batched.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn single_failed_lookup_fails_whole_page() {
        for strategy in ALL {
            let query = store().failing_technologies_for(2);

            let result = attach_technologies(&query, page(), strategy).await;

            assert!(
                matches!(result, Err(ProjectQueryError::DatabaseError(_))),
                "{strategy:?}"
            );
        }
    }

    #[tokio::test]
    async fn sequential_stops_at_first_failure() {
        let query = store().failing_technologies_for(1);
        let calls = query.technology_calls.clone();

        let result = attach_technologies(&query, page(), TechnologyFetchStrategy::Sequential).await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
