//! linkdeck Application Orchestration Layer
//!
//! This crate contains the dashboard use cases: import dispatch, the survey
//! prompt lifecycle, metric aggregation, link section selection, and the
//! client-local settings round-trip. Each use case depends only on the port
//! traits from ld-core.

pub mod usecases;

pub use usecases::dashboard::{BuildLinkSections, LinkSections, RefreshDashboardMetrics};
pub use usecases::import::ImportBookmarks;
pub use usecases::settings::{LoadDashboardSettings, UpdateDashboardSettings};
pub use usecases::survey::{SurveyOrchestrator, SurveySubmission};
