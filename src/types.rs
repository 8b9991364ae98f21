// Statsd Emitter - A minimal Statsd counter client for Rust
//
// Copyright 2026 The statsd-emitter developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error;
use std::fmt;
use std::io;

/// Single character tag that tells the Statsd server what type of
/// statistic a line carries.
///
/// Only counters (`c`) are emitted by the `Counted` trait but lower level
/// methods such as `MetricEmitter::update_stats` and `MetricEmitter::format`
/// accept any tag.
///
/// # Example
///
/// ```
/// use statsd_emitter::MetricKind;
///
/// assert_eq!('c', MetricKind::COUNTER.tag());
/// assert_eq!("T", MetricKind::from('T').to_string());
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct MetricKind(char);

impl MetricKind {
    /// Counters, incremented or decremented by the server
    pub const COUNTER: MetricKind = MetricKind('c');

    pub fn new(tag: char) -> Self {
        MetricKind(tag)
    }

    pub fn tag(&self) -> char {
        self.0
    }
}

impl From<char> for MetricKind {
    fn from(tag: char) -> Self {
        MetricKind(tag)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Potential categories an error from this library falls into.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ErrorKind {
    InvalidInput,
    IoError,
}

/// Error generated by this library potentially wrapping another
/// type of error (exposed via the `Error` trait).
#[derive(Debug)]
pub struct MetricError {
    repr: ErrorRepr,
}

#[derive(Debug)]
enum ErrorRepr {
    WithDescription(ErrorKind, &'static str),
    IoError(io::Error),
}

impl MetricError {
    /// Return the kind of the error
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::IoError(_) => ErrorKind::IoError,
            ErrorRepr::WithDescription(kind, _) => kind,
        }
    }
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            ErrorRepr::IoError(ref err) => err.fmt(f),
            ErrorRepr::WithDescription(_, desc) => desc.fmt(f),
        }
    }
}

impl error::Error for MetricError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.repr {
            ErrorRepr::IoError(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MetricError {
    /// Convert an `io::Error` into a `MetricError`
    fn from(err: io::Error) -> MetricError {
        MetricError {
            repr: ErrorRepr::IoError(err),
        }
    }
}

impl From<(ErrorKind, &'static str)> for MetricError {
    /// Convert an error kind and description into a `MetricError`
    fn from((kind, desc): (ErrorKind, &'static str)) -> MetricError {
        MetricError {
            repr: ErrorRepr::WithDescription(kind, desc),
        }
    }
}

/// Result of an attempt to format or send a metric.
pub type MetricResult<T> = Result<T, MetricError>;

#[cfg(test)]
mod tests {
    use super::{ErrorKind, MetricError, MetricKind};
    use std::error::Error;
    use std::io;

    #[test]
    fn test_metric_kind_counter_tag() {
        assert_eq!('c', MetricKind::COUNTER.tag());
        assert_eq!("c", MetricKind::COUNTER.to_string());
    }

    #[test]
    fn test_metric_kind_from_char() {
        assert_eq!(MetricKind::new('T'), MetricKind::from('T'));
    }

    #[test]
    fn test_metric_error_kind_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "Foo!");
        let our_err = MetricError::from(io_err);
        assert_eq!(ErrorKind::IoError, our_err.kind());
    }

    #[test]
    fn test_metric_error_kind_invalid_input() {
        let our_err = MetricError::from((ErrorKind::InvalidInput, "Nope!"));
        assert_eq!(ErrorKind::InvalidInput, our_err.kind());
    }

    #[test]
    fn test_metric_error_display_with_description() {
        let our_err = MetricError::from((ErrorKind::InvalidInput, "Nope!"));
        assert_eq!("Nope!", our_err.to_string());
    }

    #[test]
    fn test_metric_error_source_io_error() {
        let io_err = io::Error::new(io::ErrorKind::TimedOut, "Timeout!");
        let our_err = MetricError::from(io_err);
        assert!(our_err.source().is_some());
    }

    #[test]
    fn test_metric_error_source_with_description() {
        let our_err = MetricError::from((ErrorKind::InvalidInput, "Nope!"));
        assert!(our_err.source().is_none());
    }
}
