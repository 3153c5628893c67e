use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` provide one.
///
/// wgpu's internals are chatty at `info`, so they are held at `warn`.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax (e.g. `"debug"`,
/// `"stellate_star=trace,wgpu=warn"`). When `None`, `RUST_LOG` is consulted,
/// then [`DEFAULT_FILTER`].
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Resolves the filter string that will be installed.
    pub fn resolved_filter(&self) -> String {
        resolve_filter(self.env_filter.as_deref(), std::env::var("RUST_LOG").ok().as_deref())
    }
}

fn resolve_filter(explicit: Option<&str>, from_env: Option<&str>) -> String {
    explicit
        .or(from_env)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolved_filter();

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        // A logger installed by the host (tests, embedding apps) wins.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized with filter `{filter}`");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_beats_environment() {
        assert_eq!(resolve_filter(Some("debug"), Some("warn")), "debug");
    }

    #[test]
    fn environment_used_when_not_configured() {
        assert_eq!(resolve_filter(None, Some("stellate_star=trace")), "stellate_star=trace");
    }

    #[test]
    fn blank_filters_fall_back_to_default() {
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
        assert_eq!(resolve_filter(Some("  "), None), DEFAULT_FILTER);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig { env_filter: Some("trace".into()), ..Default::default() });
    }
}
