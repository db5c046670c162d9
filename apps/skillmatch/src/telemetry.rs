use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Installs a global fmt subscriber filtered by `directives`, written in
/// `RUST_LOG` syntax (`info`, `skillmatch=debug,warn`). Blank or unparsable
/// directives fall back to `skillmatch=info`.
/// Returns false if a subscriber was already installed.
pub fn init(directives: &str) -> bool {
    tracing_subscriber::registry()
        .with(filter_for(directives))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

/// `init` with the level taken from `Config::rust_log`.
pub fn init_from_config(config: &Config) -> bool {
    init(&config.rust_log)
}

fn filter_for(directives: &str) -> EnvFilter {
    let fallback = || EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")));
    if directives.trim().is_empty() {
        return fallback();
    }
    EnvFilter::try_new(directives).unwrap_or_else(|_| fallback())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_uses_configured_directives() {
        assert_eq!(filter_for("skillmatch=debug").to_string(), "skillmatch=debug");
    }

    #[test]
    fn test_blank_directives_fall_back_to_info() {
        assert_eq!(filter_for("  ").to_string(), "skillmatch=info");
    }

    #[test]
    fn test_second_init_is_harmless() {
        let config = Config {
            rust_log: "debug".to_string(),
            ..Config::default()
        };
        init_from_config(&config);
        assert!(!init_from_config(&config));
    }
}
