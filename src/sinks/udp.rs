// Statsd Emitter - A minimal Statsd counter client for Rust
//
// Copyright 2026 The statsd-emitter developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::destination::Destination;
use crate::format::FormattedLines;
use crate::sinks::core::{MetricSink, SinkStats, SocketStats};
use crate::types::MetricResult;
use once_cell::sync::OnceCell;
use std::io;
use std::net::{SocketAddr, UdpSocket};
use tracing::debug;

// Local address for outgoing sockets: any IPv4 interface, ephemeral port.
const BIND_ADDR: &str = "0.0.0.0:0";

/// Resolved address of the Statsd server and the socket used to reach it.
#[derive(Debug)]
struct Transport {
    addr: SocketAddr,
    socket: UdpSocket,
}

impl Transport {
    fn open(destination: &Destination) -> io::Result<Transport> {
        let addr = destination.resolve()?;
        let socket = UdpSocket::bind(BIND_ADDR)?;
        debug!(destination = %destination, addr = %addr, "bound UDP socket for metrics");
        Ok(Transport { addr, socket })
    }

    fn send(&self, metric: &str) -> io::Result<usize> {
        self.socket.send_to(metric.as_bytes(), self.addr)
    }
}

/// Implementation of a `MetricSink` that emits metrics over UDP.
///
/// Each line is sent as its own datagram when `.emit()` is called, in the
/// thread of the caller. Nothing is acknowledged and nothing is retried.
///
/// Creating the sink does not touch the network. The destination is
/// resolved (IPv4 only) and a socket is bound the first time a metric is
/// emitted. The socket is then reused for every later metric and closed
/// when the sink is dropped. If resolution or binding fails, the error is
/// returned and the next emit tries again.
#[derive(Debug)]
pub struct UdpMetricSink {
    destination: Destination,
    transport: OnceCell<Transport>,
    stats: SocketStats,
}

impl UdpMetricSink {
    /// Construct a new `UdpMetricSink` that will send to the given destination.
    ///
    /// # Example
    ///
    /// ```
    /// use statsd_emitter::{Destination, UdpMetricSink, DEFAULT_PORT};
    ///
    /// let sink = UdpMetricSink::new(Destination::new("metrics.example.com", DEFAULT_PORT));
    /// ```
    pub fn new(destination: Destination) -> Self {
        UdpMetricSink {
            destination,
            transport: OnceCell::new(),
            stats: SocketStats::default(),
        }
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    fn transport(&self) -> io::Result<&Transport> {
        self.transport.get_or_try_init(|| Transport::open(&self.destination))
    }
}

impl MetricSink for UdpMetricSink {
    fn emit(&self, metric: &str) -> io::Result<usize> {
        let res = self.transport().and_then(|t| t.send(metric));
        self.stats.record(res, metric.len())
    }

    fn stats(&self) -> SinkStats {
        (&self.stats).into()
    }
}

/// Send every line in `lines` to `destination` using a socket that only
/// lives for the duration of this call.
///
/// This is the stand-alone form of `MetricEmitter::send`, for callers
/// that don't keep an emitter around. Sending stops at the first error,
/// datagrams sent before it are not undone.
///
/// # Example
///
/// ```no_run
/// use statsd_emitter::{send_once, Destination, FormattedLines, MetricKind};
///
/// let lines = FormattedLines::new("example.send", 11, MetricKind::COUNTER).unwrap();
/// send_once(&lines, &Destination::new("127.0.0.1", 8125)).unwrap();
/// ```
pub fn send_once(lines: &FormattedLines, destination: &Destination) -> MetricResult<()> {
    let sink = UdpMetricSink::new(destination.clone());
    for line in lines.lines() {
        sink.emit(&line)?;
    }
    Ok(())
}
