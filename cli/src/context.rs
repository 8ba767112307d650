use finisher_core::AppConfig;

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the core crate.
pub struct CliContext {
    pub config: AppConfig,
}

impl CliContext {
    pub fn new() -> Self {
        Self {
            config: AppConfig::load(),
        }
    }
}
