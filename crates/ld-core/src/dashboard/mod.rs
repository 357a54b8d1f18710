//! Dashboard aggregation and view-selection policies. Pure functions over
//! snapshot state; the embedding layer re-invokes them on every input change.

pub mod metrics;
pub mod selection;
pub mod viewport;

pub use metrics::DashboardMetrics;
pub use selection::{
    pinned_selection, recent_selection, section_content, EmptyAction, LinkSubset, SectionContent,
};
pub use viewport::{base_item_count, effective_item_count};
