// Statsd Emitter - A minimal Statsd counter client for Rust
//
// Copyright 2026 The statsd-emitter developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A minimal, fire-and-forget Statsd counter client for Rust.
//!
//! ## Features
//!
//! * Emit counters to a Statsd server over UDP, one datagram per key.
//! * Update several counters with the same value in a single call.
//! * No batching, no retries, no background threads: every call runs to
//!   completion on the caller's thread and errors are returned directly.
//! * Alternate backends via the `MetricSink` trait.
//!
//! ## Install
//!
//! ```toml
//! [dependencies]
//! statsd-emitter = "x.y.z"
//! ```
//!
//! ## Usage
//!
//! ### Simple Use
//!
//! Create an emitter aimed at a Statsd server and send some counters. The
//! destination is not resolved until the first metric is sent, and only
//! IPv4 addresses are used.
//!
//! ```rust,no_run
//! use statsd_emitter::prelude::*;
//! use statsd_emitter::{MetricEmitter, DEFAULT_PORT};
//!
//! let emitter = MetricEmitter::new("metrics.example.com", DEFAULT_PORT);
//!
//! // Sends "some.counter:1|c"
//! emitter.count("some.counter", 1).unwrap();
//!
//! // Sends "requests.total:5|c" and "requests.api:5|c" as two datagrams
//! emitter.count(["requests.total", "requests.api"], 5).unwrap();
//! ```
//!
//! ### Sample Rates
//!
//! A sample rate can be passed along with a counter. By default it has no
//! effect whatsoever: every call is sent and the line is unchanged. Enable
//! the `sample-rate` feature to randomly drop calls and tell the server
//! about the rate with a `|@<rate>` suffix.
//!
//! ```rust,no_run
//! use statsd_emitter::prelude::*;
//! use statsd_emitter::MetricEmitter;
//!
//! let emitter = MetricEmitter::default();
//! emitter.count_with_rate("some.counter", 1, 0.5).unwrap();
//! ```
//!
//! ### Formatting Without Sending
//!
//! ```rust
//! use statsd_emitter::MetricEmitter;
//!
//! let lines = MetricEmitter::format(["example.format31", "example.format37"], "2", 'T').unwrap();
//!
//! assert_eq!(2, lines.len());
//! assert_eq!(Some("2|T"), lines.get("example.format31"));
//! assert_eq!(Some("2|T"), lines.get("example.format37"));
//! ```
//!
//! ### Custom Metric Sinks
//!
//! The emitter hands every line to an implementation of the `MetricSink`
//! trait. `UdpMetricSink` is used unless another sink is given.
//!
//! ```rust
//! use std::io;
//! use statsd_emitter::prelude::*;
//! use statsd_emitter::{MetricEmitter, MetricSink};
//!
//! pub struct MyMetricSink;
//!
//! impl MetricSink for MyMetricSink {
//!     fn emit(&self, metric: &str) -> io::Result<usize> {
//!         println!("{}", metric);
//!         Ok(metric.len())
//!     }
//! }
//!
//! let emitter = MetricEmitter::from_sink(MyMetricSink);
//! emitter.count("my.counter.thing", 42).unwrap();
//! ```

#![forbid(unsafe_code)]

pub use self::destination::{Destination, DEFAULT_HOST, DEFAULT_PORT};

pub use self::emitter::{Counted, MetricEmitter, MetricEmitterBuilder};

pub use self::format::FormattedLines;

pub use self::sinks::{send_once, MetricSink, NopMetricSink, SinkStats, SpyMetricSink, UdpMetricSink};

pub use self::types::{ErrorKind, MetricError, MetricKind, MetricResult};

mod destination;
mod emitter;
pub mod ext;
mod format;
pub mod prelude;
#[cfg(feature = "sample-rate")]
mod sample_rate;
mod sampler;
mod sinks;
mod types;
