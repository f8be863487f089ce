//! Locale-bound parsing and formatting facades.

use crate::{FormatResult, NumberLocale, PatternCache};

/// Parses formatted numbers in a locale-dependent fashion.
///
/// A parser is associated with one locale and a shared [`PatternCache`];
/// the named entry points use the locale's built-in patterns. Every parse
/// returns `Ok(None)` for text that does not denote a number — the caller
/// typically turns that into a validation message — and `Err` only for a
/// bad pattern.
#[derive(Debug, Clone)]
pub struct NumberParser {
    locale: NumberLocale,
    cache: PatternCache,
}

impl NumberParser {
    /// Creates a parser with its own pattern cache.
    #[must_use]
    pub fn new(locale: NumberLocale) -> Self {
        Self::with_cache(locale, PatternCache::new())
    }

    /// Creates a parser sharing an existing pattern cache.
    #[must_use]
    pub fn with_cache(locale: NumberLocale, cache: PatternCache) -> Self {
        Self { locale, cache }
    }

    /// The locale this parser reads numbers in.
    #[must_use]
    pub fn locale(&self) -> &NumberLocale {
        &self.locale
    }

    /// Parses `text` under an arbitrary pattern.
    pub fn parse(&self, pattern: &str, text: &str) -> FormatResult<Option<f64>> {
        let compiled = self.cache.get_or_compile(pattern)?;
        Ok(compiled.parse_value(text, &self.locale))
    }

    /// Parses using the locale's currency pattern, stripping the locale
    /// currency symbol and the ISO 4217 code from the text first.
    pub fn parse_currency(&self, text: &str, currency: &str) -> FormatResult<Option<f64>> {
        let stripped = text
            .replace(&self.locale.currency_symbol, "")
            .replace(currency, "");
        self.parse(&self.locale.currency_format, &stripped)
    }

    /// Parses using the locale's decimal pattern.
    pub fn parse_decimal(&self, text: &str) -> FormatResult<Option<f64>> {
        self.parse(&self.locale.decimal_format, text)
    }

    /// Parses using the locale's percentage pattern; a `%` in the pattern
    /// divides the result by 100.
    pub fn parse_percentage(&self, text: &str) -> FormatResult<Option<f64>> {
        self.parse(&self.locale.percent_format, text)
    }

    /// Parses using the locale's statistical pattern.
    pub fn parse_statistical(&self, text: &str) -> FormatResult<Option<f64>> {
        self.parse(&self.locale.statistical_format, text)
    }

    /// Parses using the locale's monetary pattern.
    pub fn parse_monetary(&self, text: &str) -> FormatResult<Option<f64>> {
        self.parse(&self.locale.monetary_format, text)
    }
}

/// Formats numbers in a locale-dependent fashion; the inverse facade of
/// [`NumberParser`].
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    locale: NumberLocale,
    cache: PatternCache,
}

impl NumberFormatter {
    /// Creates a formatter with its own pattern cache.
    #[must_use]
    pub fn new(locale: NumberLocale) -> Self {
        Self::with_cache(locale, PatternCache::new())
    }

    /// Creates a formatter sharing an existing pattern cache.
    #[must_use]
    pub fn with_cache(locale: NumberLocale, cache: PatternCache) -> Self {
        Self { locale, cache }
    }

    /// The locale this formatter writes numbers in.
    #[must_use]
    pub fn locale(&self) -> &NumberLocale {
        &self.locale
    }

    /// Formats `value` under an arbitrary pattern.
    pub fn format(&self, pattern: &str, value: f64) -> FormatResult<String> {
        let compiled = self.cache.get_or_compile(pattern)?;
        Ok(compiled.format_value(value, &self.locale))
    }

    /// Formats using the locale's currency pattern, placing the currency
    /// symbol on the side the pattern's placeholder occupies.
    pub fn format_currency(&self, value: f64) -> FormatResult<String> {
        let pattern = self.locale.currency_format.clone();
        let formatted = self.format(&pattern, value)?;
        Ok(match placeholder_side(&pattern) {
            PlaceholderSide::Prefix => format!("{}{formatted}", self.locale.currency_symbol),
            PlaceholderSide::Suffix => format!("{formatted}{}", self.locale.currency_symbol),
            PlaceholderSide::None => formatted,
        })
    }

    /// Formats using the locale's decimal pattern.
    pub fn format_decimal(&self, value: f64) -> FormatResult<String> {
        self.format(&self.locale.decimal_format, value)
    }

    /// Formats using the locale's percentage pattern; a `%` in the pattern
    /// multiplies the value by 100.
    pub fn format_percentage(&self, value: f64) -> FormatResult<String> {
        self.format(&self.locale.percent_format, value)
    }

    /// Formats using the locale's statistical pattern.
    pub fn format_statistical(&self, value: f64) -> FormatResult<String> {
        self.format(&self.locale.statistical_format, value)
    }

    /// Formats using the locale's monetary pattern.
    pub fn format_monetary(&self, value: f64) -> FormatResult<String> {
        self.format(&self.locale.monetary_format, value)
    }
}

enum PlaceholderSide {
    Prefix,
    Suffix,
    None,
}

/// Which side of the digit run a currency placeholder sits on.
fn placeholder_side(pattern: &str) -> PlaceholderSide {
    let Some(placeholder) = pattern.find('\u{a4}') else {
        return PlaceholderSide::None;
    };
    match pattern.find(['#', '0']) {
        Some(digits) if placeholder > digits => PlaceholderSide::Suffix,
        _ => PlaceholderSide::Prefix,
    }
}
