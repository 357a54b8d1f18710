use super::model::*;

impl Default for LayoutMode {
    fn default() -> Self {
        Self::Card
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            layout: LayoutMode::default(),
            columns: None,
        }
    }
}
