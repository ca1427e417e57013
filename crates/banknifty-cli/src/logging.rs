//! stderr logging.
//!
//! stdout carries the table or JSON output, so every log line goes to
//! stderr. `RUST_LOG` overrides `--log-level` when set.

use tracing_subscriber::EnvFilter;

/// Transport crates that are only interesting at `warn`.
const NOISY_MODULES: &[&str] = &["hyper", "hyper_util", "reqwest", "h2", "rustls"];

fn build_filter(log_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let mut directives = String::from(log_level);
    for module in NOISY_MODULES {
        directives.push_str(&format!(",{module}=warn"));
    }
    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"))
}

pub fn init(log_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(log_level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();

    tracing::debug!(log_level = %log_level, "logging initialized");
}
