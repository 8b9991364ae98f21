// Statsd Emitter - A minimal Statsd counter client for Rust
//
// Copyright 2026 The statsd-emitter developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::io;
use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time copy of the I/O counters of a sink.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SinkStats {
    pub bytes_sent: u64,
    pub packets_sent: u64,
    pub bytes_dropped: u64,
    pub packets_dropped: u64,
}

/// Shared, lock-free I/O counters updated after every datagram.
#[derive(Debug, Default)]
pub(crate) struct SocketStats {
    bytes_sent: AtomicU64,
    packets_sent: AtomicU64,
    bytes_dropped: AtomicU64,
    packets_dropped: AtomicU64,
}

impl SocketStats {
    /// Record the outcome of sending a datagram of `len` bytes and hand the
    /// result back unchanged.
    pub(crate) fn record(&self, res: io::Result<usize>, len: usize) -> io::Result<usize> {
        match res {
            Ok(written) => {
                self.bytes_sent.fetch_add(written as u64, Ordering::Relaxed);
                self.packets_sent.fetch_add(1, Ordering::Relaxed);
                Ok(written)
            }
            Err(e) => {
                self.bytes_dropped.fetch_add(len as u64, Ordering::Relaxed);
                self.packets_dropped.fetch_add(1, Ordering::Relaxed);
                Err(e)
            }
        }
    }
}

impl From<&SocketStats> for SinkStats {
    fn from(stats: &SocketStats) -> Self {
        SinkStats {
            bytes_sent: stats.bytes_sent.load(Ordering::Relaxed),
            packets_sent: stats.packets_sent.load(Ordering::Relaxed),
            bytes_dropped: stats.bytes_dropped.load(Ordering::Relaxed),
            packets_dropped: stats.packets_dropped.load(Ordering::Relaxed),
        }
    }
}

/// Trait for backends that deliver Statsd lines somewhere.
///
/// Each call to `emit` carries exactly one complete line, without a
/// trailing newline, and should result in exactly one datagram (or the
/// equivalent for non-network sinks). For example:
///
/// ``` text
/// some.counter:17|c
/// ```
///
/// Sinks must not batch lines together: the Statsd server sees one metric
/// per packet.
pub trait MetricSink {
    /// Send a single Statsd line and return the number of bytes written or
    /// an I/O error.
    fn emit(&self, metric: &str) -> io::Result<usize>;

    /// Return I/O telemetry like bytes / packets sent or dropped.
    ///
    /// Sinks that don't track anything return zeros.
    fn stats(&self) -> SinkStats {
        SinkStats::default()
    }
}

/// Implementation of a `MetricSink` that discards all metrics.
///
/// Useful for disabling metric collection or unit tests.
#[derive(Debug, Clone)]
pub struct NopMetricSink;

impl MetricSink for NopMetricSink {
    fn emit(&self, _metric: &str) -> io::Result<usize> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::{MetricSink, NopMetricSink, SinkStats, SocketStats};
    use std::io;

    #[test]
    fn test_nop_metric_sink() {
        let sink = NopMetricSink;
        assert_eq!(0, sink.emit("baz:4|c").unwrap());
        assert_eq!(SinkStats::default(), sink.stats());
    }

    #[test]
    fn test_socket_stats_record() {
        let stats = SocketStats::default();
        let _ = stats.record(Ok(9), 9);
        let _ = stats.record(Err(io::Error::new(io::ErrorKind::Other, "nope")), 7);

        let snapshot = SinkStats::from(&stats);
        assert_eq!(9, snapshot.bytes_sent);
        assert_eq!(1, snapshot.packets_sent);
        assert_eq!(7, snapshot.bytes_dropped);
        assert_eq!(1, snapshot.packets_dropped);
    }
}
