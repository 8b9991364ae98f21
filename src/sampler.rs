// Statsd Emitter - A minimal Statsd counter client for Rust
//
// Copyright 2026 The statsd-emitter developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decides whether a formatted update is sent at all.
//!
//! Without the `sample-rate` feature every update is sent unchanged and the
//! rate is ignored entirely, including rates that would otherwise be out of
//! range. With the feature, the rate is validated, updates are randomly
//! dropped, and kept updates carry a `|@<rate>` suffix.

use crate::format::FormattedLines;
use crate::types::MetricResult;

#[cfg(feature = "sample-rate")]
pub(crate) use rng::Sampler;

#[cfg(not(feature = "sample-rate"))]
pub(crate) use noop::Sampler;

pub(crate) trait Sampling: Sized {
    fn new_with_rate(rate: f32) -> MetricResult<Self>;
    fn sample(&self, lines: FormattedLines) -> Option<FormattedLines>;
}

#[cfg(not(feature = "sample-rate"))]
mod noop {
    use super::Sampling;
    use crate::format::FormattedLines;
    use crate::types::MetricResult;

    pub(crate) struct Sampler;

    impl Sampling for Sampler {
        fn new_with_rate(_rate: f32) -> MetricResult<Self> {
            Ok(Sampler)
        }

        fn sample(&self, lines: FormattedLines) -> Option<FormattedLines> {
            Some(lines)
        }
    }
}

#[cfg(feature = "sample-rate")]
mod rng {
    use super::Sampling;
    use crate::format::FormattedLines;
    use crate::sample_rate::SampleRate;
    use crate::types::MetricResult;
    use rand::Rng;

    pub(crate) struct Sampler(SampleRate);

    impl Sampling for Sampler {
        fn new_with_rate(rate: f32) -> MetricResult<Self> {
            Ok(Sampler(SampleRate::try_from(rate)?))
        }

        fn sample(&self, mut lines: FormattedLines) -> Option<FormattedLines> {
            let mut rng = rand::thread_rng();

            if rng.gen_bool(f64::from(self.0.value())) {
                lines.with_sample_rate(&self.0);
                Some(lines)
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Sampler, Sampling};
    use crate::format::FormattedLines;

    #[test]
    fn test_sample_rate_of_one_keeps_lines_unchanged() {
        let lines = FormattedLines::new("some.key", 3, 'c').unwrap();
        let sampler = Sampler::new_with_rate(1.0).unwrap();

        assert_eq!(Some(lines.clone()), sampler.sample(lines));
    }

    #[cfg(not(feature = "sample-rate"))]
    #[test]
    fn test_noop_sampler_ignores_rate() {
        let lines = FormattedLines::new("some.key", 3, 'c').unwrap();

        for rate in [0.0, 0.1, 0.9, 7.5] {
            let sampler = Sampler::new_with_rate(rate).unwrap();
            assert_eq!(Some(lines.clone()), sampler.sample(lines.clone()));
        }
    }

    #[cfg(feature = "sample-rate")]
    #[test]
    fn test_rng_sampler_rejects_invalid_rate() {
        assert!(Sampler::new_with_rate(0.0).is_err());
        assert!(Sampler::new_with_rate(7.5).is_err());
    }

    #[cfg(feature = "sample-rate")]
    #[test]
    fn test_rng_sampler_actually_samples() {
        let sampler = Sampler::new_with_rate(0.5).unwrap();
        let kept = (0..200)
            .filter_map(|i| sampler.sample(FormattedLines::new("some.key", i, 'c').unwrap()))
            .collect::<Vec<_>>();

        assert!(!kept.is_empty()); // always happening (probably)
        assert!(kept.len() < 200); // never happening (probably)
        assert!(kept.iter().all(|l| l.get("some.key").unwrap().ends_with("|@0.5")));
    }
}
