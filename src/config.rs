use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const SERVER_PORT: u16 = 9090;
pub const RESPONSE_DELAY: Duration = Duration::from_millis(1000);

/// Fixed server settings, built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_bind_addr: SocketAddr,
    pub response_delay: Duration,
}

impl Config {
    pub fn init() -> Self {
        Self {
            server_bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, SERVER_PORT)),
            response_delay: RESPONSE_DELAY,
        }
    }

    /// Same settings, listening on `addr` instead of the fixed port.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.server_bind_addr = addr;
        self
    }
}
