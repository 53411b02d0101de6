pub mod app_config;
pub mod probe_config;

pub use app_config::{AppConfig, load_config};
pub use probe_config::{DirectorySettings, ProbeSettings, ServerSettings, SweepSettings};
