//! Runtime configuration.

use std::path::PathBuf;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Settings resolved once at startup and handed to whatever needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the video store
    pub data_dir: PathBuf,

    /// Address the HTTP server binds to
    pub host: String,

    /// Port the HTTP server listens on
    pub port: u16,
}

impl Config {
    /// Configuration for a store at `data_dir` with default server settings.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
        }
    }

    /// Override the server address.
    pub fn with_server(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// `host:port` to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("/tmp/videos");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/videos"));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_with_server() {
        let config = Config::new(".").with_server("0.0.0.0", 9000);
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }
}
