use std::time::Duration;

/// Quiet period after the last edit before the preview re-parses.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Pasted or uploaded text above this size is refused.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

const DEBOUNCE_ENV: &str = "ARIA_DEBOUNCE_MS";
const MAX_INPUT_ENV: &str = "ARIA_MAX_INPUT_BYTES";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportConfig {
    pub debounce: Duration,
    pub max_input_bytes: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl ImportConfig {
    /// Read overrides from `ARIA_DEBOUNCE_MS` and `ARIA_MAX_INPUT_BYTES`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(DEBOUNCE_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.debounce = Duration::from_millis(ms),
                Err(e) => tracing::warn!(key = DEBOUNCE_ENV, value = %raw, error = %e, "ignoring invalid config value"),
            }
        }

        if let Some(raw) = lookup(MAX_INPUT_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(bytes) if bytes > 0 => config.max_input_bytes = bytes,
                Ok(_) => tracing::warn!(key = MAX_INPUT_ENV, "ignoring zero input limit"),
                Err(e) => tracing::warn!(key = MAX_INPUT_ENV, value = %raw, error = %e, "ignoring invalid config value"),
            }
        }

        config
    }
}
