use std::path::PathBuf;

/// Environment variable that switches the service into active mode.
pub const DEBUG_ENV: &str = "SUPERBENCHMARK_DEBUG";
/// Environment variable overriding the listen address.
pub const ADDR_ENV: &str = "SUPERBENCHMARK_ADDR";

pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";
/// Seed file, resolved against the working directory.
pub const SEED_PATH: &str = "test_database.json";

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// `true` → active mode (seed data loaded, endpoints served).
    /// `false` → gated mode (every request rejected with 503).
    pub debug: bool,
    pub addr: String,
    pub seed_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            debug: parse_debug_flag(std::env::var(DEBUG_ENV).ok().as_deref()),
            addr: std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.into()),
            seed_path: PathBuf::from(SEED_PATH),
        }
    }
}

/// Only a case-insensitive `"true"` enables debug mode.
pub fn parse_debug_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}
