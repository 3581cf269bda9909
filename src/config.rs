//! Client configuration

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/restaurant/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TABLE_FILE: &str = "restaurant_table.json";
pub const DEFAULT_LOGIN_PATH: &str = "/restaurant/admin/login";
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Settings for talking to the restaurant API.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API root, without trailing slash (e.g. "http://localhost:5000/restaurant/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// File holding the persisted table number
    pub table_file: PathBuf,

    /// Where admin pages send the user after a 401/403
    pub login_path: String,

    /// Mailbox size of the session actor
    pub channel_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            table_file: PathBuf::from(DEFAULT_TABLE_FILE),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn with_table_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.table_file = path.into();
        self
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Zero is bumped to one; tokio channels need room for a message.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
