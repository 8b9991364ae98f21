// Statsd Emitter - A minimal Statsd counter client for Rust
//
// Copyright 2026 The statsd-emitter developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::types::{ErrorKind, MetricError};

/// Fraction of calls that should actually reach the Statsd server, between
/// 0.0 (exclusive) and 1.0 (inclusive).
///
/// The server is told about the rate with a `|@<rate>` suffix so that it can
/// scale the counter back up. A rate of exactly 1.0 is never written.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SampleRate {
    value: f32,
    repr: String,
}

impl SampleRate {
    // "@0." is the shortest form we trim down to
    const MIN_SIZE: usize = 3;
    const ZERO_REPR: &str = "@0.";

    fn new(value: f32) -> Self {
        let mut repr = format!("@{:.6}", value);
        while repr.len() > Self::MIN_SIZE && repr.ends_with('0') {
            repr.pop();
        }

        // Tiny rates round to zero at six digits, fall back to the shortest
        // exact form so the server never sees a zero rate.
        if repr == Self::ZERO_REPR {
            repr = format!("@{}", value);
        }

        SampleRate { value, repr }
    }

    pub(crate) fn is_applicable(&self) -> bool {
        self.value != 1.0
    }

    pub(crate) fn value(&self) -> f32 {
        self.value
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.repr
    }
}

impl TryFrom<f32> for SampleRate {
    type Error = MetricError;

    fn try_from(rate: f32) -> Result<Self, Self::Error> {
        if rate > 0.0 && rate <= 1.0 {
            Ok(Self::new(rate))
        } else {
            Err(MetricError::from((
                ErrorKind::InvalidInput,
                "Sample rate must be between 0.0 and 1.0",
            )))
        }
    }
}
