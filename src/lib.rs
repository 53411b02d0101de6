//! On-demand reachability checks for arbitrary URLs and for a curated
//! directory of well-known services.

pub mod config;
pub mod directory;
pub mod error;
pub mod http_probe;
pub mod server;
pub mod sweep;

#[cfg(test)]
mod test_support;
