//! Exact rational numbers.
//!
//! [`Ratio`] is an immutable fraction kept in lowest terms with a positive
//! denominator. Arithmetic is exact and reports overflow instead of wrapping.
//! [`Ratio::parse`] turns decimal numbers and strings such as `"102.1"` into
//! exact fractions.
//!
//! ```
//! use ratio::Ratio;
//!
//! let a = Ratio::new(1, 2).unwrap();
//! let b = Ratio::new(2, 3).unwrap();
//! assert_eq!(a.add(&b).unwrap().to_string(), "Ratio (7/6)");
//! assert_eq!(Ratio::parse("102.1").unwrap(), Ratio::new(1021, 10).unwrap());
//! ```

pub mod error;
pub mod parser;
pub mod ratio;

// Re-export commonly used items for convenience
pub use error::{RatioError, RatioErrorKind};
pub use parser::{DEFAULT_OVERFLOW_LIMIT, ParseInput, ParseOptions};
pub use ratio::Ratio;
