pub mod normalize;
pub mod probe;
pub mod result;

pub mod prelude {
    pub use super::probe::{Prober, probe_url};
    pub use super::result::{
        CHECK_FAILED_MESSAGE, CheckResult, INPUT_REQUIRED_MESSAGE, capture_timestamp, utc_offset,
    };
}

use std::fmt::Write;

/// Render an error together with its whole `source()` chain, so a log line
/// shows e.g. the DNS failure underneath reqwest's generic "error sending request".
fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::report;
    use std::fmt;

    #[derive(Debug)]
    struct Leaf;

    impl fmt::Display for Leaf {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "dns error")
        }
    }

    impl std::error::Error for Leaf {}

    #[derive(Debug)]
    struct Wrapper(Leaf);

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "error sending request")
        }
    }

    impl std::error::Error for Wrapper {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_report_includes_source_chain() {
        assert_eq!(report(&Wrapper(Leaf)), "error sending request: dns error");
        assert_eq!(report(&Leaf), "dns error");
    }
}
