//! Tracing setup for the `postcheck` binary

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pick the filter directives to install
///
/// `RUST_LOG` wins when it parses. Otherwise the suite crates log at
/// `log_level`, or at `info` when that is not a level either.
pub fn filter_directives(rust_log: Option<&str>, log_level: &str) -> String {
    if let Some(directives) = rust_log {
        if EnvFilter::try_new(directives).is_ok() {
            return directives.to_string();
        }
    }

    let level = log_level
        .parse::<LevelFilter>()
        .map(|level| level.to_string().to_lowercase())
        .unwrap_or_else(|_| "info".to_string());
    format!("postcheck={level},postcheck_client={level}")
}

/// Install the global subscriber
pub fn init(log_level: &str) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = filter_directives(rust_log.as_deref(), log_level);

    tracing_subscriber::registry()
        .with(EnvFilter::new(directives))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
