pub mod load_settings;
pub mod update_settings;

pub use load_settings::LoadDashboardSettings;
pub use update_settings::UpdateDashboardSettings;
