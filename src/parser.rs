//! Decimal number and string parsing into exact ratios.
//!
//! A floating point decimal such as `102.1` is not stored exactly, so the
//! parser scales the value by powers of ten until either the value itself or
//! its reciprocal lands on an integer. Tracking the reciprocal as well recovers
//! fractions like `1/3` from `0.3333333333333333`, which no finite power of ten
//! would turn into an integer.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::error::RatioError;
use crate::ratio::Ratio;

/// Default ceiling for any value seen during parsing: 2^53, the largest
/// integer an `f64` represents exactly.
pub const DEFAULT_OVERFLOW_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Longest decimal prefix of a string, after optional leading whitespace.
static DECIMAL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?)(Infinity|(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("decimal prefix pattern is valid")
});

// ============================================================================
// Parse Input & Options
// ============================================================================

/// Anything [`Ratio::parse`] accepts: a number, some text, or nothing at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseInput<'a> {
    Number(f64),
    Text(&'a str),
    Absent,
}

impl ParseInput<'_> {
    /// Coerce to a float; `None` when no number can be read.
    fn coerce(&self) -> Option<f64> {
        match self {
            ParseInput::Number(n) if n.is_nan() => None,
            ParseInput::Number(n) => Some(*n),
            ParseInput::Text(text) => coerce_text(text),
            ParseInput::Absent => None,
        }
    }
}

fn coerce_text(text: &str) -> Option<f64> {
    let caps = DECIMAL_PREFIX.captures(text)?;
    let magnitude = match &caps[2] {
        "Infinity" => f64::INFINITY,
        digits => digits.parse::<f64>().ok()?,
    };
    if &caps[1] == "-" {
        Some(-magnitude)
    } else {
        Some(magnitude)
    }
}

impl fmt::Display for ParseInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseInput::Number(n) => write!(f, "{n}"),
            ParseInput::Text(text) => write!(f, "{text}"),
            ParseInput::Absent => write!(f, "<absent>"),
        }
    }
}

impl From<f64> for ParseInput<'_> {
    fn from(n: f64) -> Self {
        ParseInput::Number(n)
    }
}

impl From<f32> for ParseInput<'_> {
    fn from(n: f32) -> Self {
        ParseInput::Number(f64::from(n))
    }
}

impl From<i32> for ParseInput<'_> {
    fn from(n: i32) -> Self {
        ParseInput::Number(f64::from(n))
    }
}

impl From<i64> for ParseInput<'_> {
    fn from(n: i64) -> Self {
        // Above 2^53 this rounds, which the default limit rejects anyway.
        ParseInput::Number(n as f64)
    }
}

impl<'a> From<&'a str> for ParseInput<'a> {
    fn from(text: &'a str) -> Self {
        ParseInput::Text(text)
    }
}

impl<'a> From<&'a String> for ParseInput<'a> {
    fn from(text: &'a String) -> Self {
        ParseInput::Text(text.as_str())
    }
}

impl<'a, T: Into<ParseInput<'a>>> From<Option<T>> for ParseInput<'a> {
    fn from(input: Option<T>) -> Self {
        input.map_or(ParseInput::Absent, Into::into)
    }
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseOptions {
    /// Ceiling on the magnitude of the parsed value and of every
    /// intermediate accumulator. Must be positive and finite.
    pub overflow_limit: f64,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            overflow_limit: DEFAULT_OVERFLOW_LIMIT,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overflow_limit(mut self, overflow_limit: f64) -> Self {
        self.overflow_limit = overflow_limit;
        self
    }
}

// ============================================================================
// Decimal Parser
// ============================================================================

fn is_integral(x: f64) -> bool {
    x.floor() == x
}

impl Ratio {
    /// Parse a decimal number or string into an exact ratio using the
    /// default overflow limit.
    ///
    /// ```
    /// use ratio::Ratio;
    ///
    /// assert_eq!(Ratio::parse("0.1").unwrap(), Ratio::new(1, 10).unwrap());
    /// assert_eq!(Ratio::parse(-13.12).unwrap(), Ratio::new(-1312, 100).unwrap());
    /// ```
    pub fn parse<'a>(input: impl Into<ParseInput<'a>>) -> Result<Ratio, RatioError> {
        Self::parse_with(input, &ParseOptions::default())
    }

    /// Parse with a custom overflow limit.
    pub fn parse_with_limit<'a>(
        input: impl Into<ParseInput<'a>>,
        overflow_limit: f64,
    ) -> Result<Ratio, RatioError> {
        Self::parse_with(input, &ParseOptions::new().with_overflow_limit(overflow_limit))
    }

    pub fn parse_with<'a>(
        input: impl Into<ParseInput<'a>>,
        options: &ParseOptions,
    ) -> Result<Ratio, RatioError> {
        let input = input.into();
        parse_decimal(input, options.overflow_limit).map_err(|e| e.with_input(input.to_string()))
    }
}

fn parse_decimal(input: ParseInput<'_>, limit: f64) -> Result<Ratio, RatioError> {
    if !(limit.is_finite() && limit > 0.0) {
        debug!(limit, "rejecting non-positive or non-finite overflow limit");
        return Err(RatioError::bad_parse_arguments());
    }

    let value = input.coerce().ok_or_else(RatioError::bad_parse_arguments)?;

    if is_integral(value) {
        if value.abs() > limit {
            debug!(value, limit, "integer input exceeds overflow limit");
            return Err(RatioError::parse_overflow());
        }
        return Ratio::from_f64_parts(value, 1.0);
    }

    let negative = value < 0.0;
    let magnitude = value.abs();

    let mut scaled = magnitude;
    let mut reciprocal = 1.0 / magnitude;
    let mut scale = 1.0;

    let exceeds = |scaled: f64, reciprocal: f64, scale: f64| {
        scaled > limit || reciprocal > limit || scale > limit
    };

    // Tiny inputs can start out with a reciprocal beyond the limit.
    if exceeds(scaled, reciprocal, scale) {
        debug!(value, limit, "reciprocal exceeds overflow limit");
        return Err(RatioError::parse_overflow());
    }

    while !is_integral(scaled) && !is_integral(reciprocal) {
        scaled *= 10.0;
        reciprocal *= 10.0;
        scale *= 10.0;
        trace!(scaled, reciprocal, scale, "decimal expansion step");

        if exceeds(scaled, reciprocal, scale) {
            debug!(value, limit, "decimal expansion exceeds overflow limit");
            return Err(RatioError::parse_overflow());
        }
    }

    let sign = if negative { -1.0 } else { 1.0 };
    if is_integral(scaled) {
        trace!(numerator = sign * scaled, denominator = scale, "scaled value is integral");
        Ratio::from_f64_parts(sign * scaled, scale)
    } else {
        trace!(numerator = sign * scale, denominator = reciprocal, "reciprocal is integral");
        Ratio::from_f64_parts(sign * scale, reciprocal)
    }
}

impl FromStr for Ratio {
    type Err = RatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ratio::parse(s)
    }
}

impl TryFrom<f64> for Ratio {
    type Error = RatioError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Ratio::parse(value)
    }
}
