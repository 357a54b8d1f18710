//! Use case for recomputing the dashboard counters.

use tracing::{debug, info_span};

use ld_core::dashboard::DashboardMetrics;
use ld_core::library::{Collection, Tag};

/// Recomputes the dashboard counters from the current entity snapshot.
///
/// Invoked by the embedding layer on every observed change of collections,
/// tags, or the upstream pinned count. A pure fold: no ports, no mutation.
pub struct RefreshDashboardMetrics;

impl RefreshDashboardMetrics {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        collections: &[Collection],
        tags: &[Tag],
        pinned_count: u64,
    ) -> DashboardMetrics {
        let _span = info_span!("usecase.refresh_dashboard_metrics.execute").entered();

        let metrics = DashboardMetrics::compute(collections, tags, pinned_count);
        debug!(
            total_links = metrics.total_links,
            total_collections = metrics.total_collections,
            total_tags = metrics.total_tags,
            pinned_count = metrics.pinned_count,
            "dashboard metrics recomputed"
        );
        metrics
    }
}

impl Default for RefreshDashboardMetrics {
    fn default() -> Self {
        Self::new()
    }
}
