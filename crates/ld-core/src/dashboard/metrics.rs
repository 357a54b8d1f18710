use serde::{Deserialize, Serialize};

use crate::library::{Collection, Tag};

/// At-a-glance counters for the dashboard header.
///
/// A pure fold over already-loaded entities: recomputed whenever the inputs
/// change, never mutated in place. `pinned_count` comes straight from the
/// upstream data source, the other three are derived here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_links: u64,
    pub total_collections: usize,
    pub total_tags: usize,
    pub pinned_count: u64,
}

impl DashboardMetrics {
    pub fn compute(collections: &[Collection], tags: &[Tag], pinned_count: u64) -> Self {
        Self {
            total_links: collections.iter().map(|c| u64::from(c.link_count)).sum(),
            total_collections: collections.len(),
            total_tags: tags.len(),
            pinned_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collections(counts: &[u32]) -> Vec<Collection> {
        counts
            .iter()
            .enumerate()
            .map(|(i, n)| Collection::new(format!("col-{i}"), format!("collection {i}"), *n))
            .collect()
    }

    #[test]
    fn test_total_links_is_the_sum_of_link_counts() {
        let collections = collections(&[3, 0, 7]);
        let metrics = DashboardMetrics::compute(&collections, &[], 2);

        assert_eq!(metrics.total_links, 10);
        assert_eq!(metrics.total_collections, 3);
        assert_eq!(metrics.total_tags, 0);
        assert_eq!(metrics.pinned_count, 2);
    }

    #[test]
    fn test_empty_inputs_fold_to_zero() {
        let metrics = DashboardMetrics::compute(&[], &[], 0);
        assert_eq!(
            metrics,
            DashboardMetrics {
                total_links: 0,
                total_collections: 0,
                total_tags: 0,
                pinned_count: 0,
            }
        );
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let collections = collections(&[5, 1]);
        let tags = vec![Tag::new("tag-1", "rust")];

        let first = DashboardMetrics::compute(&collections, &tags, 4);
        let second = DashboardMetrics::compute(&collections, &tags, 4);
        assert_eq!(first, second);
    }
}
