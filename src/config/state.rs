// Application state module
// Values shared by every request for the lifetime of the serve loop

use std::time::Duration;

use super::types::Config;

const MIN_CONNECTION_TIMEOUT_SECS: u64 = 1;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    /// Port the listener is actually bound to
    pub port: u16,
}

impl AppState {
    pub const fn new(config: Config, port: u16) -> Self {
        Self { config, port }
    }

    /// Per-connection timeout, never shorter than one second
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.config.performance.read_timeout.max(MIN_CONNECTION_TIMEOUT_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_timeout(secs: u64) -> AppState {
        let mut config = Config::default();
        config.performance.read_timeout = secs;
        AppState::new(config, 3000)
    }

    #[test]
    fn test_connection_timeout_from_config() {
        assert_eq!(state_with_timeout(30).connection_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        assert_eq!(state_with_timeout(0).connection_timeout(), Duration::from_secs(1));
    }
}
