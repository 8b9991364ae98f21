// Statsd Emitter - A minimal Statsd counter client for Rust
//
// Copyright 2026 The statsd-emitter developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::destination::{Destination, DEFAULT_HOST, DEFAULT_PORT};
use crate::format::{FormattedLines, ToCounterValue, ToMetricKeys};
use crate::sampler::{Sampler, Sampling};
use crate::sinks::{MetricSink, SinkStats, UdpMetricSink};
use crate::types::{MetricKind, MetricResult};
use std::fmt;
use std::panic::RefUnwindSafe;
use tracing::trace;

/// Trait for incrementing and decrementing counters.
///
/// Counters are simple values incremented or decremented by a client. The
/// rates at which these events occur or average values will be determined
/// by the server receiving them. Examples of counter uses include number
/// of logins to a system or requests received.
///
/// Keys may be a single key (`&str`, `String`) or a collection of keys
/// (arrays, slices, `Vec`s, sets). Each distinct key is sent as its own
/// datagram with the same value.
///
/// See the [Statsd spec](https://github.com/b/statsd_spec) for more
/// information.
pub trait Counted {
    /// Increment or decrement the counter(s) by the given amount
    fn count<K, V>(&self, keys: K, value: V) -> MetricResult<()>
    where
        K: ToMetricKeys,
        V: ToCounterValue,
    {
        self.count_with_rate(keys, value, 1.0)
    }

    /// Increment or decrement the counter(s) by the given amount, passing
    /// along a sample rate.
    ///
    /// Unless the `sample-rate` feature is enabled, the rate has no effect
    /// at all: every call is sent and the line is identical to `count`.
    fn count_with_rate<K, V>(&self, keys: K, value: V, sample_rate: f32) -> MetricResult<()>
    where
        K: ToMetricKeys,
        V: ToCounterValue;
}

/// Builder for creating and customizing `MetricEmitter` instances.
///
/// # Example
///
/// ```
/// use statsd_emitter::MetricEmitter;
///
/// let emitter = MetricEmitter::builder()
///     .host("metrics.example.com")
///     .port(9125)
///     .build();
///
/// assert_eq!("metrics.example.com", emitter.destination().host());
/// assert_eq!(9125, emitter.destination().port());
/// ```
pub struct MetricEmitterBuilder {
    host: String,
    port: u16,
    sink: Option<Box<dyn MetricSink + Sync + Send + RefUnwindSafe>>,
}

impl MetricEmitterBuilder {
    fn new() -> Self {
        MetricEmitterBuilder {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            sink: None,
        }
    }

    /// Host of the Statsd server, `localhost` by default.
    pub fn host<S>(mut self, host: S) -> Self
    where
        S: Into<String>,
    {
        self.host = host.into();
        self
    }

    /// UDP port of the Statsd server, `8125` by default.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Use the given sink instead of a `UdpMetricSink` aimed at the
    /// configured host and port.
    ///
    /// The sink decides where lines go. Host and port are still recorded
    /// and reported by `MetricEmitter::destination`, but nothing is sent
    /// to them by the emitter itself.
    pub fn with_sink<T>(mut self, sink: T) -> Self
    where
        T: MetricSink + Sync + Send + RefUnwindSafe + 'static,
    {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Construct a new `MetricEmitter` instance based on current settings.
    ///
    /// No network activity happens here, the host is resolved when the
    /// first metric is sent.
    pub fn build(self) -> MetricEmitter {
        let destination = Destination::new(self.host, self.port);
        let sink = match self.sink {
            Some(sink) => sink,
            None => Box::new(UdpMetricSink::new(destination.clone())),
        };

        MetricEmitter { destination, sink }
    }
}

/// Client that sends counters to a Statsd server, one datagram per key.
///
/// Every call runs a short pipeline on the caller's thread: the keys and
/// value are formatted into `<key>:<value>|<kind>` lines, then each line is
/// handed to the sink. There is no batching, no retry, and no
/// acknowledgment. The first error aborts the remaining keys of that call
/// and is returned as-is; lines already sent are not undone.
///
/// # Threading
///
/// The emitter is `Send` and `Sync` and can be shared between threads by
/// wrapping it in an `Arc`. The destination never changes after
/// construction.
///
/// # Example
///
/// ```no_run
/// use statsd_emitter::prelude::*;
/// use statsd_emitter::MetricEmitter;
///
/// let emitter = MetricEmitter::default();
/// emitter.count("example.counter", 17).unwrap();
/// emitter.count(["example.a", "example.b"], 1).unwrap();
/// ```
pub struct MetricEmitter {
    destination: Destination,
    sink: Box<dyn MetricSink + Sync + Send + RefUnwindSafe>,
}

impl MetricEmitter {
    /// Create an emitter that sends to the given host and port over UDP.
    pub fn new<S>(host: S, port: u16) -> Self
    where
        S: Into<String>,
    {
        Self::builder().host(host).port(port).build()
    }

    /// Create a builder that starts from the defaults (`localhost:8125`).
    pub fn builder() -> MetricEmitterBuilder {
        MetricEmitterBuilder::new()
    }

    /// Create an emitter with the default destination that writes to the
    /// given sink instead of the network.
    ///
    /// # Example
    ///
    /// ```
    /// use statsd_emitter::prelude::*;
    /// use statsd_emitter::{MetricEmitter, SpyMetricSink};
    ///
    /// let (rx, sink) = SpyMetricSink::new();
    /// let emitter = MetricEmitter::from_sink(sink);
    ///
    /// emitter.count("example.counter", 17).unwrap();
    /// assert_eq!("example.counter:17|c", rx.recv().unwrap());
    /// ```
    pub fn from_sink<T>(sink: T) -> Self
    where
        T: MetricSink + Sync + Send + RefUnwindSafe + 'static,
    {
        Self::builder().with_sink(sink).build()
    }

    /// Host and port this emitter was configured with.
    ///
    /// For an emitter built with a custom sink (`from_sink`, or
    /// `MetricEmitterBuilder::with_sink`) this is informational only, the
    /// sink alone decides where lines are written.
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Return I/O telemetry of the underlying sink.
    pub fn stats(&self) -> SinkStats {
        self.sink.stats()
    }

    /// Format keys and a value into Statsd lines without sending anything.
    ///
    /// # Example
    ///
    /// ```
    /// use statsd_emitter::MetricEmitter;
    ///
    /// let lines = MetricEmitter::format("example.format", 2, 'T').unwrap();
    /// assert_eq!(Some("2|T"), lines.get("example.format"));
    /// ```
    pub fn format<K, V, T>(keys: K, value: V, kind: T) -> MetricResult<FormattedLines>
    where
        K: ToMetricKeys,
        V: ToCounterValue,
        T: Into<MetricKind>,
    {
        FormattedLines::new(keys, value, kind)
    }

    /// Format keys and a value with an arbitrary type tag and send them.
    ///
    /// The sample rate is treated the same way as by `Counted::count_with_rate`.
    pub fn update_stats<K, V, T>(&self, keys: K, value: V, kind: T, sample_rate: f32) -> MetricResult<()>
    where
        K: ToMetricKeys,
        V: ToCounterValue,
        T: Into<MetricKind>,
    {
        let sampler = Sampler::new_with_rate(sample_rate)?;
        let lines = Self::format(keys, value, kind)?;
        match sampler.sample(lines) {
            Some(lines) => self.send(&lines),
            None => Ok(()),
        }
    }

    /// Send each formatted line as its own datagram, in insertion order.
    ///
    /// Stops at the first error and returns it.
    pub fn send(&self, lines: &FormattedLines) -> MetricResult<()> {
        for line in lines.lines() {
            let written = self.sink.emit(&line)?;
            trace!(metric = %line, bytes = written, "sent metric");
        }
        Ok(())
    }
}

impl Default for MetricEmitter {
    /// Emitter that sends to `localhost:8125` over UDP.
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Counted for MetricEmitter {
    fn count_with_rate<K, V>(&self, keys: K, value: V, sample_rate: f32) -> MetricResult<()>
    where
        K: ToMetricKeys,
        V: ToCounterValue,
    {
        self.update_stats(keys, value, MetricKind::COUNTER, sample_rate)
    }
}

impl fmt::Debug for MetricEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MetricEmitter {{ destination: {:?}, sink: ... }}", self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::{Counted, MetricEmitter};
    use crate::sinks::{MetricSink, NopMetricSink, SpyMetricSink};
    use crate::types::ErrorKind;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Sink that records lines and fails once `fail_at` lines have been accepted.
    struct FailingSink {
        fail_at: usize,
        accepted: Arc<Mutex<Vec<String>>>,
        attempts: AtomicUsize,
    }

    impl MetricSink for FailingSink {
        fn emit(&self, metric: &str) -> io::Result<usize> {
            if self.attempts.fetch_add(1, Ordering::SeqCst) >= self.fail_at {
                return Err(io::Error::new(io::ErrorKind::ConnectionRefused, "nope"));
            }
            self.accepted.lock().unwrap().push(metric.to_owned());
            Ok(metric.len())
        }
    }

    #[test]
    fn test_default_destination() {
        let emitter = MetricEmitter::default();
        assert_eq!("localhost", emitter.destination().host());
        assert_eq!(8125, emitter.destination().port());
    }

    #[test]
    fn test_new_destination() {
        let emitter = MetricEmitter::new("127.0.0.1", 9999);
        assert_eq!("127.0.0.1", emitter.destination().host());
        assert_eq!(9999, emitter.destination().port());
    }

    #[test]
    fn test_custom_sink_receives_lines_and_destination_is_kept() {
        let (rx, sink) = SpyMetricSink::new();
        let emitter = MetricEmitter::builder().host("10.0.0.1").port(1).with_sink(sink).build();

        emitter.count("example.counter", 2).unwrap();

        assert_eq!("example.counter:2|c", rx.recv().unwrap());
        assert_eq!("10.0.0.1", emitter.destination().host());
        assert_eq!(1, emitter.destination().port());
        assert_eq!(1, emitter.stats().packets_sent);
    }

    #[test]
    fn test_count_single_key() {
        let (rx, sink) = SpyMetricSink::new();
        let emitter = MetricEmitter::from_sink(sink);

        emitter.count("example.counter", 17).unwrap();

        assert_eq!("example.counter:17|c", rx.recv().unwrap());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_count_multiple_keys() {
        let (rx, sink) = SpyMetricSink::new();
        let emitter = MetricEmitter::from_sink(sink);

        emitter.count(vec!["a.counter", "b.counter", "a.counter"], 3).unwrap();

        assert_eq!(vec!["a.counter:3|c", "b.counter:3|c"], rx.try_iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_count_with_default_rate() {
        let (rx, sink) = SpyMetricSink::new();
        let emitter = MetricEmitter::from_sink(sink);

        emitter.count_with_rate("example.counter", 1, 1.0).unwrap();
        assert_eq!("example.counter:1|c", rx.recv().unwrap());
    }

    #[cfg(not(feature = "sample-rate"))]
    #[test]
    fn test_count_with_rate_is_ignored() {
        let (rx, sink) = SpyMetricSink::new();
        let emitter = MetricEmitter::from_sink(sink);

        for rate in [0.1, 0.0, 2.0] {
            emitter.count_with_rate("example.counter", 1, rate).unwrap();
            assert_eq!("example.counter:1|c", rx.recv().unwrap());
        }
    }

    #[test]
    fn test_update_stats_custom_kind() {
        let (rx, sink) = SpyMetricSink::new();
        let emitter = MetricEmitter::from_sink(sink);

        emitter.update_stats("example.update_stats", 73, 'c', 1.0).unwrap();
        emitter.update_stats("example.gauge", 5, 'g', 1.0).unwrap();

        assert_eq!("example.update_stats:73|c", rx.recv().unwrap());
        assert_eq!("example.gauge:5|g", rx.recv().unwrap());
    }

    #[test]
    fn test_count_invalid_value_sends_nothing() {
        let (rx, sink) = SpyMetricSink::new();
        let emitter = MetricEmitter::from_sink(sink);

        let res = emitter.count("example.counter", f64::INFINITY);

        assert_eq!(ErrorKind::InvalidInput, res.unwrap_err().kind());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_count_stops_at_first_error() {
        let accepted = Arc::new(Mutex::new(Vec::new()));
        let sink = FailingSink {
            fail_at: 1,
            accepted: accepted.clone(),
            attempts: AtomicUsize::new(0),
        };
        let emitter = MetricEmitter::from_sink(sink);

        let res = emitter.count(["first", "second", "third"], 1);

        assert_eq!(ErrorKind::IoError, res.unwrap_err().kind());
        assert_eq!(vec!["first:1|c"], *accepted.lock().unwrap());
    }

    #[test]
    fn test_stats_from_sink() {
        let (_rx, sink) = SpyMetricSink::new();
        let emitter = MetricEmitter::from_sink(sink);

        emitter.count(["a", "b"], 1).unwrap();

        assert_eq!(2, emitter.stats().packets_sent);
        assert_eq!(10, emitter.stats().bytes_sent);
    }

    #[test]
    fn test_debug_does_not_panic() {
        let emitter = MetricEmitter::from_sink(NopMetricSink);
        assert!(format!("{:?}", emitter).contains("localhost"));
    }
}
