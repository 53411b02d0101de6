//! "Check all": run the prober over every directory record.

use futures::stream::{self, StreamExt};
use serde::Serialize;

use crate::directory::ServiceRecord;
use crate::http_probe::prelude::*;

/// Width service names are padded/truncated to in sweep log lines.
const NAME_WIDTH: usize = 24;

#[derive(Debug, Clone, Serialize)]
pub struct SweepEntry {
    pub id: String,
    pub name: String,
    pub result: CheckResult,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepReport {
    pub results: Vec<SweepEntry>,
}

impl SweepReport {
    pub fn get(&self, id: &str) -> Option<&CheckResult> {
        self.results.iter().find(|e| e.id == id).map(|e| &e.result)
    }

    pub fn online_count(&self) -> usize {
        self.results.iter().filter(|e| e.result.online).count()
    }
}

fn to_fixed_width(input: &str, width: usize) -> String {
    use unicode_truncate::{Alignment, UnicodeTruncateStr};

    input.unicode_pad(width, Alignment::Left, true).into_owned()
}

/// Probe each record once. With `concurrency <= 1` records are checked one
/// after another; higher values keep up to that many probes in flight.
/// Results always come back in record order, and one record's failure
/// never affects the others.
pub async fn sweep(prober: &Prober, records: &[ServiceRecord], concurrency: usize) -> SweepReport {
    // owned records keep the per-record futures free of borrowed lifetimes
    let results = stream::iter(records.iter().cloned())
        .map(|record| async move {
            let result = prober.check_reachability(Some(&record.url)).await;
            let name = to_fixed_width(&record.name, NAME_WIDTH);
            match (result.online, result.status) {
                (true, Some(status)) => log::info!(
                    "[{name}] ✅ {} status {status} in {}ms",
                    record.url,
                    result.response_time_ms.unwrap_or_default()
                ),
                (false, Some(status)) => {
                    log::info!("[{name}] ❌ {} unexpected status {status}", record.url)
                }
                _ => log::info!("[{name}] ❌ {} unreachable", record.url),
            }
            SweepEntry {
                id: record.id,
                name: record.name,
                result,
            }
        })
        .buffered(concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

    SweepReport { results }
}
