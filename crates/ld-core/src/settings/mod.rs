//! Client-local dashboard preferences.

pub mod defaults;
pub mod model;

pub use model::{DashboardSettings, LayoutMode, CURRENT_SCHEMA_VERSION};
