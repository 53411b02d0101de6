use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Settings for the reachability prober.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeSettings {
    /// Upper bound on the whole request, from dispatch to response headers.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// How many redirects are followed before the probe counts as failed.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// The User-Agent sent with every probe.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Offset, in whole hours from UTC, the capture timestamp is rendered in.
    /// Defaults to Japan Standard Time.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,

    /// Honour `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment.
    #[serde(default = "default_use_system_proxy")]
    pub use_system_proxy: bool,
}

impl ProbeSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
            utc_offset_hours: default_utc_offset_hours(),
            use_system_proxy: default_use_system_proxy(),
        }
    }
}

/// Settings for the HTTP listener.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Where the service directory is read from.
/// Without a file the embedded data set is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorySettings {
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Settings for the "check all" sweep.
#[derive(Debug, Clone, Deserialize)]
pub struct SweepSettings {
    /// Number of probes in flight at once. 1 keeps the sweep strictly serial.
    #[serde(default = "default_sweep_concurrency")]
    pub concurrency: usize,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            concurrency: default_sweep_concurrency(),
        }
    }
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_max_redirects() -> usize {
    10
}

fn default_user_agent() -> String {
    format!("sitecheck/{}", env!("CARGO_PKG_VERSION"))
}

fn default_utc_offset_hours() -> i32 {
    9
}

fn default_use_system_proxy() -> bool {
    true
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

fn default_sweep_concurrency() -> usize {
    1
}
