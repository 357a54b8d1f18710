use std::num::NonZeroU8;

use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// How link lists are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    Card,
    List,
    Masonry,
}

/// Client-local dashboard preferences.
///
/// The single persisted value this core owns; read once at initialization
/// and replaced wholesale by defaults when absent or invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub schema_version: u32,

    /// Preferred layout for link lists.
    pub layout: LayoutMode,

    /// Explicit column count; when set, overrides the viewport ladder.
    #[serde(default)]
    pub columns: Option<NonZeroU8>,
}

impl DashboardSettings {
    /// Placeholder count while links are still loading: the configured
    /// column count, not the computed item count.
    pub fn placeholder_count(&self) -> usize {
        self.columns.map(|c| usize::from(c.get())).unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.layout, LayoutMode::Card);
        assert_eq!(settings.columns, None);
        assert_eq!(settings.placeholder_count(), 1);
    }

    #[test]
    fn test_placeholder_count_follows_columns() {
        let settings = DashboardSettings {
            columns: NonZeroU8::new(3),
            ..DashboardSettings::default()
        };
        assert_eq!(settings.placeholder_count(), 3);
    }
}
