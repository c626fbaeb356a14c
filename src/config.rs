//! Server endpoint configuration.

/// Base URL of the Ping! API server.
///
/// The URL is baked in at build time through the `PING_SERVER` environment
/// variable so the same mechanism works for the web and desktop targets.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub server: String,
}

const DEFAULT_SERVER: &str = "http://localhost:3000";

impl ServerConfig {
    pub fn from_env() -> Self {
        let server = option_env!("PING_SERVER").unwrap_or(DEFAULT_SERVER).to_string();
        Self { server }
    }

    /// Joins a path below `/api/v1`, tolerating a trailing slash on the
    /// configured base URL.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.server.trim_end_matches('/'), path)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
