//! Infrastructure adapters for the linkdeck dashboard.
//!
//! Implementations of the ld-core ports: reqwest clients for the import and
//! account endpoints, the tokio file reader and delay scheduler, the system
//! clock, the JSON settings repository, and the in-memory toast registry.

pub mod fs;
pub mod http;
pub mod notify;
pub mod settings;
pub mod time;

pub use fs::TokioFileReader;
pub use http::{HttpAccountClient, HttpMigrationClient};
pub use notify::ToastRegistry;
pub use settings::FileSettingsRepository;
pub use time::{SystemClock, TokioDelay};
