//! Opt-in JSON trace output. Without the `trace` feature every `tracing`
//! call in the crate is compiled out and [`init_tracing`] does nothing.

use std::path::Path;

/// File created in the log directory.
pub const TRACE_FILE: &str = "mb-resolver-trace.jsonl";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "mb_resolver=debug";

/// Keeps the background trace writer alive; buffered events are flushed
/// when it is dropped.
#[must_use]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Install a JSON subscriber writing to `log_dir/mb-resolver-trace.jsonl`.
/// If another subscriber is already installed it stays in place.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> TraceGuard {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
    let (writer, worker) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .try_init()
        .is_ok();

    TraceGuard {
        _worker: installed.then_some(worker),
    }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> TraceGuard {
    TraceGuard {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_keeps_first_subscriber() {
        let dir = tempfile::tempdir().unwrap();
        let _first = init_tracing(dir.path());
        let _second = init_tracing(dir.path());
        tracing::debug!("after init");
    }
}
