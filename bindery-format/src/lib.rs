//! Locale number-pattern engine for bindery.
//!
//! Compiles TR35-style number-format patterns (`"#,##0.00"`, `"0.00%"`,
//! `"#,##0.00;(#,##0.00)"`) into immutable descriptors, then uses a
//! descriptor plus a locale's symbols to parse formatted text back to a
//! number or to format a number for display:
//!
//! - [`NumberPattern`] — the compiled descriptor (digit counts, grouping
//!   sizes, affixes, percent/per-mille multiplier)
//! - [`NumberLocale`] — a locale's separators, signs, and named patterns
//! - [`PatternCache`] — process-wide get-or-compile cache keyed by pattern
//!   text
//! - [`NumberParser`] / [`NumberFormatter`] — facades bound to a locale and
//!   a shared cache, with the named-pattern entry points (decimal,
//!   currency, percentage, statistical, monetary)
//! - [`FormatParseRule`] — attaches a "format is invalid" message to a
//!   record attribute when its value does not parse
//!
//! A failed parse of user text is a value (`None`), never an error: bad
//! input is an expected validation outcome. Errors are reserved for bad
//! patterns, which are programmer configuration.
//!
//! Unsupported pattern features: significant digits, scientific notation,
//! arbitrary padding.
//!
//! # Example
//!
//! ```
//! use bindery_format::{NumberLocale, NumberParser};
//!
//! let parser = NumberParser::new(NumberLocale::en_us());
//! assert_eq!(parser.parse("#,##0.00", "12,345.68").unwrap(), Some(12345.68));
//! assert_eq!(parser.parse("#,##0.00", "abc").unwrap(), None);
//! assert_eq!(parser.parse("0.00%", "45.00%").unwrap(), Some(0.45));
//! ```

mod cache;
mod error;
mod locale;
mod parser;
mod pattern;
mod validate;

pub use cache::PatternCache;
pub use error::{FormatError, FormatResult};
pub use locale::NumberLocale;
pub use parser::{NumberFormatter, NumberParser};
pub use pattern::NumberPattern;
pub use validate::FormatParseRule;
