// Statsd Emitter - A minimal Statsd counter client for Rust
//
// Copyright 2026 The statsd-emitter developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Extension points for keys and values
//!
//! Most users won't need anything in this module. The `ToMetricKeys` and
//! `ToCounterValue` traits decide which types can be passed as keys and
//! values to `Counted::count` and `MetricEmitter::update_stats`. Implement
//! them for your own types to pass those directly.
//!
//! # Example
//!
//! ```
//! use statsd_emitter::prelude::*;
//! use statsd_emitter::ext::{MetricValue, ToCounterValue};
//! use statsd_emitter::{MetricEmitter, MetricResult, SpyMetricSink};
//!
//! struct Bytes(u64);
//!
//! impl ToCounterValue for Bytes {
//!     fn try_to_value(self) -> MetricResult<MetricValue> {
//!         Ok(MetricValue::Unsigned(self.0))
//!     }
//! }
//!
//! let (rx, sink) = SpyMetricSink::new();
//! let emitter = MetricEmitter::from_sink(sink);
//!
//! emitter.count("upload.bytes", Bytes(512)).unwrap();
//! assert_eq!("upload.bytes:512|c", rx.recv().unwrap());
//! ```

pub use crate::format::{MetricValue, ToCounterValue, ToMetricKeys};
