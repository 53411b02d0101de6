use std::time::Instant;

use chrono::FixedOffset;
use reqwest::{Client, redirect};

use super::normalize::normalize_target;
use super::prelude::*;
use super::report;
use crate::config::ProbeSettings;

/// Checks whether URLs are reachable from this host.
///
/// Holds only an immutable, connection-pooling HTTP client and the offset
/// timestamps are rendered in, so one `Prober` can serve any number of
/// concurrent checks.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
    offset: FixedOffset,
}

impl Prober {
    /// Build a prober whose client bounds every request by the configured
    /// timeout and follows at most `max_redirects` redirects.
    pub fn new(settings: &ProbeSettings) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .timeout(settings.timeout())
            .redirect(redirect::Policy::limited(settings.max_redirects))
            .user_agent(settings.user_agent.as_str());
        if !settings.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            offset: utc_offset(settings.utc_offset_hours),
        })
    }

    /// The capture time, rendered for a new result.
    pub fn timestamp(&self) -> String {
        capture_timestamp(self.offset)
    }

    /// Check a raw, untrusted URL.
    ///
    /// Always returns a well-formed [`CheckResult`]: blank input short-circuits
    /// without touching the network, everything else is normalized and
    /// dispatched exactly once.
    pub async fn check_reachability(&self, raw_input: Option<&str>) -> CheckResult {
        match normalize_target(raw_input) {
            Some(url) => probe_url(&self.client, &url, self.offset).await,
            None => CheckResult::input_required(self.timestamp()),
        }
    }
}

/// Issue a single GET to `url` and classify the outcome.
///
/// Redirects are followed by the client; the final response is the one
/// evaluated. The body is never read, the clock stops once headers arrive.
pub async fn probe_url(client: &Client, url: &str, offset: FixedOffset) -> CheckResult {
    let start = Instant::now();
    let outcome = client.get(url).send().await;
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    match outcome {
        Ok(resp) => {
            let status = resp.status().as_u16();
            log::debug!("Probe {url}: status {status} after {elapsed_ms}ms");
            CheckResult::responded(
                status,
                elapsed_ms,
                url.to_string(),
                capture_timestamp(offset),
            )
        }
        Err(e) => {
            let kind = if e.is_timeout() {
                "timed out"
            } else if e.is_connect() {
                "connect failed"
            } else if e.is_redirect() {
                "redirect limit"
            } else if e.is_builder() {
                "unusable url"
            } else {
                "request failed"
            };
            log::debug!("Probe {url}: {kind} after {elapsed_ms}ms: {}", report(&e));
            CheckResult::check_failed(Some(url.to_string()), capture_timestamp(offset))
        }
    }
}
