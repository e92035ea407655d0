//! Telemetry helpers for applications embedding `termgraph`.
//!
//! Tracing setup stays explicit and opt-in. Hosts either call one of the
//! init functions here or install their own `tracing` subscriber.
//! Terminal hosts usually want the subscriber writing to a file or stderr
//! redirected away from the screen the graph is drawing on.

/// Filter used when `RUST_LOG` is unset: graph warnings only, so a shared
/// terminal is not flooded by per-redraw traces.
pub const DEFAULT_TRACING_FILTER: &str = "termgraph=warn";

/// Installs a compact stderr subscriber filtered by [`DEFAULT_TRACING_FILTER`].
///
/// See [`init_tracing`] for the return value.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_TRACING_FILTER)
}

/// Installs a compact, colorless stderr subscriber when the `telemetry`
/// feature is enabled.
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns `false` when
/// the feature is disabled, the filter cannot be parsed, or the host already
/// set a global subscriber.
#[must_use]
pub fn init_tracing(default_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match EnvFilter::try_new(default_filter) {
                Ok(filter) => filter,
                Err(_) => return false,
            },
        };

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_filter;
        false
    }
}
