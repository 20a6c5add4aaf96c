// Configuration module entry point
// Fixed listen address plus the optional logging/timeout settings file

mod state;
mod types;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub use state::AppState;
pub use types::Config;

/// Settings file looked up in the working directory (without extension)
pub const CONFIG_FILE: &str = "portcheck";

/// All interfaces, like an empty bind host
pub const LISTEN_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// The diagnostic port is not configurable
pub const LISTEN_PORT: u16 = 3000;

impl Config {
    /// Load configuration from the default settings file, if present
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from specified file path (without extension)
    /// A missing file leaves every value at its default
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .set_default("performance.read_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }
}

/// Address the diagnostic server binds to
pub const fn listen_addr() -> SocketAddr {
    SocketAddr::new(LISTEN_HOST, LISTEN_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let cfg = Config::load_from("does-not-exist/portcheck").unwrap();
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "common");
        assert!(cfg.logging.access_log_file.is_none());
        assert!(cfg.logging.error_log_file.is_none());
        assert_eq!(cfg.performance.read_timeout, 30);
    }

    #[test]
    fn test_file_overrides_logging() {
        let dir = std::env::temp_dir().join(format!("portcheck-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("portcheck.toml");
        std::fs::write(
            &path,
            "[logging]\naccess_log = false\naccess_log_format = \"combined\"\n\n[performance]\nread_timeout = 5\n",
        )
        .unwrap();

        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();
        assert!(!cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert_eq!(cfg.performance.read_timeout, 5);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_listen_addr_is_fixed() {
        let addr = listen_addr();
        assert_eq!(addr.port(), 3000);
        assert!(addr.ip().is_unspecified());
    }
}
