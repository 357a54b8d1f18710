pub mod dashboard;
pub mod import;
pub mod settings;
pub mod survey;
