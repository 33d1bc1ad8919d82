//! Server configuration from the environment.

use std::env;
use std::net::SocketAddr;

/// Environment variable naming the bind address.
pub const BIND_VAR: &str = "EMPLOYEE_API_BIND";

const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to the
    /// default bind address when `EMPLOYEE_API_BIND` is unset.
    ///
    /// # Errors
    /// Returns an error when the variable holds an unparseable address.
    pub fn from_env() -> std::io::Result<Self> {
        let raw = env::var(BIND_VAR).unwrap_or_else(|_| DEFAULT_BIND.to_owned());
        let bind_addr = raw
            .parse()
            .map_err(|e| std::io::Error::other(format!("invalid {BIND_VAR} '{raw}': {e}")))?;
        Ok(Self { bind_addr })
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_address_parses() {
        let parsed: SocketAddr = DEFAULT_BIND.parse().expect("default address");
        assert_eq!(parsed.port(), 8080);
    }
}
