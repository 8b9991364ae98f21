// Statsd Emitter - A minimal Statsd counter client for Rust
//
// Copyright 2026 The statsd-emitter developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Export commonly used parts of the crate for easy glob imports
//!
//! # Example
//!
//! ```
//! use statsd_emitter::prelude::*;
//! use statsd_emitter::{MetricEmitter, NopMetricSink};
//!
//! let emitter = MetricEmitter::from_sink(NopMetricSink);
//!
//! emitter.count("some.counter", 1).unwrap();
//! emitter.count(["some.counter", "other.counter"], 2).unwrap();
//! emitter.count_with_rate("some.counter", 3, 0.5).unwrap();
//! ```

pub use crate::emitter::Counted;
