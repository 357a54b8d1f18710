pub mod build_link_sections;
pub mod refresh_metrics;

pub use build_link_sections::{BuildLinkSections, LinkSections};
pub use refresh_metrics::RefreshDashboardMetrics;
