// Statsd Emitter - A minimal Statsd counter client for Rust
//
// Copyright 2026 The statsd-emitter developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::types::{ErrorKind, MetricError, MetricKind, MetricResult};
use indexmap::IndexMap;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::BuildHasher;

/// Holder for counter values that knows how to display itself
///
/// This enum is internal to how the various types valid for counters
/// (types for which `ToCounterValue` is implemented) are formatted but is
/// exposed for documentation purposes and advanced use cases.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MetricValue::Signed(v) => v.fmt(f),
            MetricValue::Unsigned(v) => v.fmt(f),
            MetricValue::Float(v) => v.fmt(f),
            MetricValue::Text(ref v) => v.fmt(f),
        }
    }
}

/// Conversion trait for valid values for counters
///
/// Integers are always valid. Floats are valid as long as they are finite.
/// Text is emitted verbatim, which allows callers that already hold the
/// textual form of a number to pass it through unchanged.
pub trait ToCounterValue {
    fn try_to_value(self) -> MetricResult<MetricValue>;
}

impl ToCounterValue for i64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Signed(self))
    }
}

impl ToCounterValue for i32 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Signed(i64::from(self)))
    }
}

impl ToCounterValue for i16 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Signed(i64::from(self)))
    }
}

impl ToCounterValue for i8 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Signed(i64::from(self)))
    }
}

impl ToCounterValue for isize {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Signed(self as i64))
    }
}

impl ToCounterValue for u64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Unsigned(self))
    }
}

impl ToCounterValue for u32 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Unsigned(u64::from(self)))
    }
}

impl ToCounterValue for u16 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Unsigned(u64::from(self)))
    }
}

impl ToCounterValue for u8 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Unsigned(u64::from(self)))
    }
}

impl ToCounterValue for usize {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Unsigned(self as u64))
    }
}

impl ToCounterValue for f64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        if self.is_finite() {
            Ok(MetricValue::Float(self))
        } else {
            Err(MetricError::from((ErrorKind::InvalidInput, "Counter value must be finite")))
        }
    }
}

// Widening to f64 would print digits the f32 never had (0.1 as
// 0.10000000149011612), so the shortest f32 form is kept as text.
impl ToCounterValue for f32 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        if self.is_finite() {
            Ok(MetricValue::Text(self.to_string()))
        } else {
            Err(MetricError::from((ErrorKind::InvalidInput, "Counter value must be finite")))
        }
    }
}

impl ToCounterValue for &str {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Text(self.to_owned()))
    }
}

impl ToCounterValue for String {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Text(self))
    }
}

/// Conversion trait for one or many metric keys.
///
/// A single piece of text (`&str`, `String`) is always one key, it is
/// never split into characters. Arrays, slices, vectors, and sets of
/// text are treated as a collection of keys that each receive the same
/// value.
pub trait ToMetricKeys {
    fn to_metric_keys(self) -> Vec<String>;
}

impl ToMetricKeys for &str {
    fn to_metric_keys(self) -> Vec<String> {
        vec![self.to_owned()]
    }
}

impl ToMetricKeys for String {
    fn to_metric_keys(self) -> Vec<String> {
        vec![self]
    }
}

impl ToMetricKeys for &String {
    fn to_metric_keys(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<T: AsRef<str>> ToMetricKeys for &[T] {
    fn to_metric_keys(self) -> Vec<String> {
        self.iter().map(|k| k.as_ref().to_owned()).collect()
    }
}

impl<T: AsRef<str>, const N: usize> ToMetricKeys for [T; N] {
    fn to_metric_keys(self) -> Vec<String> {
        self.iter().map(|k| k.as_ref().to_owned()).collect()
    }
}

impl<T: AsRef<str>, const N: usize> ToMetricKeys for &[T; N] {
    fn to_metric_keys(self) -> Vec<String> {
        self.iter().map(|k| k.as_ref().to_owned()).collect()
    }
}

impl<T: AsRef<str>> ToMetricKeys for Vec<T> {
    fn to_metric_keys(self) -> Vec<String> {
        self.iter().map(|k| k.as_ref().to_owned()).collect()
    }
}

impl<T: AsRef<str>> ToMetricKeys for &Vec<T> {
    fn to_metric_keys(self) -> Vec<String> {
        self.iter().map(|k| k.as_ref().to_owned()).collect()
    }
}

impl<T: AsRef<str>> ToMetricKeys for &BTreeSet<T> {
    fn to_metric_keys(self) -> Vec<String> {
        self.iter().map(|k| k.as_ref().to_owned()).collect()
    }
}

impl<T: AsRef<str>, S: BuildHasher> ToMetricKeys for &HashSet<T, S> {
    fn to_metric_keys(self) -> Vec<String> {
        self.iter().map(|k| k.as_ref().to_owned()).collect()
    }
}

/// Mapping of metric keys to the `<value>|<kind>` portion of a Statsd line.
///
/// Every key in the mapping shares the same value. Keys are unique and
/// iterate in the order they were first given.
///
/// # Example
///
/// ```
/// use statsd_emitter::{FormattedLines, MetricKind};
///
/// let lines = FormattedLines::new(["example.a", "example.b"], 2, MetricKind::COUNTER).unwrap();
///
/// assert_eq!(Some("2|c"), lines.get("example.a"));
/// assert_eq!(vec!["example.a:2|c", "example.b:2|c"], lines.lines().collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormattedLines {
    values: IndexMap<String, String>,
}

impl FormattedLines {
    /// Format one or many keys with a value and a type tag.
    ///
    /// This is a pure function: nothing is sent. It fails only if the value
    /// cannot be represented as text.
    pub fn new<K, V, T>(keys: K, value: V, kind: T) -> MetricResult<FormattedLines>
    where
        K: ToMetricKeys,
        V: ToCounterValue,
        T: Into<MetricKind>,
    {
        let value = format!("{}|{}", value.try_to_value()?, kind.into());
        let values = keys
            .to_metric_keys()
            .into_iter()
            .map(|key| (key, value.clone()))
            .collect();

        Ok(FormattedLines { values })
    }

    /// Value string for the given key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over full Statsd lines (`<key>:<value>|<kind>`) in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(|(k, v)| join_line(k, v))
    }

    #[cfg(feature = "sample-rate")]
    pub(crate) fn with_sample_rate(&mut self, rate: &crate::sample_rate::SampleRate) {
        if rate.is_applicable() {
            for value in self.values.values_mut() {
                value.push('|');
                value.push_str(rate.as_str());
            }
        }
    }
}

fn join_line(key: &str, value: &str) -> String {
    let mut out = String::with_capacity(key.len() + 1 + value.len());
    out.push_str(key);
    out.push(':');
    out.push_str(value);
    out
}
