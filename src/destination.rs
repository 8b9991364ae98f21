// Statsd Emitter - A minimal Statsd counter client for Rust
//
// Copyright 2026 The statsd-emitter developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

/// Default host of the Statsd server
pub const DEFAULT_HOST: &str = "localhost";

/// Default UDP port of the Statsd server
pub const DEFAULT_PORT: u16 = 8125;

/// Host and port of the Statsd server that metrics are sent to.
///
/// Creating a destination never performs any name resolution. The host
/// is resolved when the first metric is sent and only IPv4 addresses are
/// considered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Destination {
    host: String,
    port: u16,
}

impl Destination {
    pub fn new<S>(host: S, port: u16) -> Self
    where
        S: Into<String>,
    {
        Destination { host: host.into(), port }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Resolve the host to the first IPv4 socket address it yields.
    ///
    /// # Failures
    ///
    /// This method may fail if:
    ///
    /// * The host name cannot be resolved.
    /// * The host only resolves to IPv6 addresses.
    pub fn resolve(&self) -> io::Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()?
            .find(SocketAddr::is_ipv4)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("no IPv4 address found for {}", self),
                )
            })
    }
}

impl Default for Destination {
    fn default() -> Self {
        Destination::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::{Destination, DEFAULT_HOST, DEFAULT_PORT};
    use std::net::{Ipv4Addr, SocketAddr};

    #[test]
    fn test_default_destination() {
        let dest = Destination::default();
        assert_eq!((DEFAULT_HOST, DEFAULT_PORT), (dest.host(), dest.port()));
        assert_eq!(("localhost", 8125), (dest.host(), dest.port()));
    }

    #[test]
    fn test_display() {
        assert_eq!("metrics.example.com:9125", Destination::new("metrics.example.com", 9125).to_string());
    }

    #[test]
    fn test_resolve_ipv4_literal() {
        let addr = Destination::new("127.0.0.1", 8125).resolve().unwrap();
        assert_eq!(SocketAddr::from((Ipv4Addr::LOCALHOST, 8125)), addr);
    }

    #[test]
    fn test_resolve_ipv6_only_host() {
        let res = Destination::new("::1", 8125).resolve();
        assert!(res.is_err());
    }
}
