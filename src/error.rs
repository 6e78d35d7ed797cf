//! Ratio error types.

use std::fmt;

/// Categories of ratio construction, arithmetic and parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioErrorKind {
    /// Numerator is NaN
    NumeratorNaN,
    /// Denominator is NaN
    DenominatorNaN,
    /// Both numerator and denominator are NaN
    ArgumentsNaN,
    /// Numerator has a fractional part
    NumeratorNotInteger,
    /// Denominator has a fractional part
    DenominatorNotInteger,
    /// Both numerator and denominator have a fractional part
    ArgumentsNotInteger,
    /// Denominator is zero
    DenominatorZero,
    /// Divisor has a zero numerator
    DivisionByZero,
    /// Parse input could not be coerced to a number
    BadParseArguments,
    /// A value exceeded the overflow limit during parse
    ParseOverflow,
    /// A result does not fit the integer range of a ratio
    Overflow,
}

impl RatioErrorKind {
    /// Canonical message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            RatioErrorKind::NumeratorNaN => "Ratio numerator is NaN",
            RatioErrorKind::DenominatorNaN => "Ratio denominator is NaN",
            RatioErrorKind::ArgumentsNaN => "Ratio numerator and denominator are NaN",
            RatioErrorKind::NumeratorNotInteger => "Ratio numerator is not an integer",
            RatioErrorKind::DenominatorNotInteger => "Ratio denominator is not an integer",
            RatioErrorKind::ArgumentsNotInteger => {
                "Ratio numerator and denominator are not integers"
            }
            RatioErrorKind::DenominatorZero => "Ratio denominator is zero",
            RatioErrorKind::DivisionByZero => "Ratio divided by ratio with zero numerator",
            RatioErrorKind::BadParseArguments => "Bad arguments passed to parse method",
            RatioErrorKind::ParseOverflow => "Overflow during parse",
            RatioErrorKind::Overflow => "Ratio value out of integer range",
        }
    }
}

/// A ratio error with optional context about the offending input.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioError {
    /// The category of error
    pub kind: RatioErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The parse input that caused the error (if available)
    pub input: Option<String>,
}

impl RatioError {
    /// Create a new error with the canonical message for `kind`.
    pub fn new(kind: RatioErrorKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
            input: None,
        }
    }

    /// Add input context to the error.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn denominator_zero() -> Self {
        Self::new(RatioErrorKind::DenominatorZero)
    }

    pub fn division_by_zero() -> Self {
        Self::new(RatioErrorKind::DivisionByZero)
    }

    pub fn bad_parse_arguments() -> Self {
        Self::new(RatioErrorKind::BadParseArguments)
    }

    pub fn parse_overflow() -> Self {
        Self::new(RatioErrorKind::ParseOverflow)
    }

    pub fn overflow() -> Self {
        Self::new(RatioErrorKind::Overflow)
    }
}

impl From<RatioErrorKind> for RatioError {
    fn from(kind: RatioErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for RatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref input) = self.input {
            // Truncate long inputs
            let truncated = if input.chars().count() > 60 {
                let head: String = input.chars().take(57).collect();
                format!("{head}...")
            } else {
                input.clone()
            };
            write!(f, " (input: {truncated:?})")?;
        }
        Ok(())
    }
}

impl std::error::Error for RatioError {}

impl From<RatioError> for String {
    fn from(err: RatioError) -> String {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RatioError::denominator_zero();
        assert_eq!(err.to_string(), "Ratio denominator is zero");
    }

    #[test]
    fn test_error_with_input() {
        let err = RatioError::bad_parse_arguments().with_input("zeawe");
        assert_eq!(
            err.to_string(),
            "Bad arguments passed to parse method (input: \"zeawe\")"
        );
    }

    #[test]
    fn test_error_truncates_long_input() {
        let err = RatioError::parse_overflow().with_input("9".repeat(100));
        let s = err.to_string();
        assert!(s.ends_with("...\")"));
        assert!(s.len() < 100);
    }

    #[test]
    fn test_error_kind() {
        let err: RatioError = RatioErrorKind::DivisionByZero.into();
        assert_eq!(err.kind, RatioErrorKind::DivisionByZero);
        assert_eq!(err.message, "Ratio divided by ratio with zero numerator");
        assert_eq!(err.input, None);
    }

    #[test]
    fn test_error_into_string() {
        let s: String = RatioError::overflow().into();
        assert!(s.contains("out of integer range"));
    }
}
