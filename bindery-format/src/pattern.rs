//! Pattern compilation, parsing, and formatting.

use crate::{FormatError, FormatResult, NumberLocale};
use serde::{Deserialize, Serialize};

/// The characters that make up a pattern's digit run.
const RUN_CHARS: [char; 4] = ['#', ',', '.', '0'];

/// A compiled number-format pattern.
///
/// Immutable once compiled; derived exactly once per pattern string (see
/// [`PatternCache`](crate::PatternCache)). All affix text is literal — the
/// percent/per-mille markers and currency placeholders are stripped at
/// compile time and re-localized when formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberPattern {
    /// Required fractional digits; zeros pad up to this count.
    pub decimal_digits: usize,
    /// Maximum fractional digits; excess is rounded away.
    pub max_decimal_digits: usize,
    /// Required integer digits; zeros pad up to this count.
    pub integer_digits: usize,
    /// Primary grouping size, counted from the decimal point. 0 = none.
    pub group_size1: usize,
    /// Secondary grouping size for higher groups. 0 = primary repeats.
    pub group_size2: usize,
    pub positive_prefix: String,
    pub positive_suffix: String,
    pub negative_prefix: String,
    pub negative_suffix: String,
    /// 1, or 100 for percent patterns, or 1000 for per-mille patterns.
    pub multiplier: u32,
}

impl NumberPattern {
    /// Compiles a TR35-style pattern string.
    ///
    /// # Errors
    ///
    /// [`FormatError::InvalidPattern`] when the positive sub-pattern holds
    /// no `#`, `,`, `.`, or `0` at all — a degenerate pattern whose integer
    /// part cannot be located.
    pub fn compile(pattern: &str) -> FormatResult<Self> {
        // Currency placeholders contribute nothing to the numeric shape.
        let cleaned: String = pattern.chars().filter(|c| *c != '\u{a4}').collect();

        let (positive, negative) = match cleaned.split_once(';') {
            Some((pos, neg)) => (pos, Some(neg)),
            None => (cleaned.as_str(), None),
        };

        let multiplier = if positive.contains('%') {
            100
        } else if positive.contains('\u{2030}') {
            1000
        } else {
            1
        };

        let (positive_prefix, run, positive_suffix) =
            split_run(positive).ok_or_else(|| FormatError::InvalidPattern {
                pattern: pattern.to_string(),
            })?;
        let positive_prefix = strip_markers(positive_prefix);
        let positive_suffix = strip_markers(positive_suffix);

        // A negative sub-pattern overrides the affixes; otherwise negativity
        // is an implicit minus-sign prefix on the positive affixes.
        let (negative_prefix, negative_suffix) = match negative.and_then(split_run) {
            Some((prefix, _, suffix)) => (strip_markers(prefix), strip_markers(suffix)),
            None => (format!("-{positive_prefix}"), positive_suffix.clone()),
        };

        let (integer_pattern, decimal_digits, max_decimal_digits) = match run.split_once('.') {
            Some((int_part, frac_part)) => {
                let decimal_digits = frac_part.rfind('0').map_or(0, |p| p + 1);
                let max_decimal_digits = match frac_part.rfind('#') {
                    Some(p) if p + 1 > decimal_digits => p + 1,
                    _ => decimal_digits,
                };
                (int_part, decimal_digits, max_decimal_digits)
            }
            None => (run, 0, 0),
        };

        let digits_only: String = integer_pattern.chars().filter(|c| *c != ',').collect();
        let integer_digits = match (digits_only.find('0'), digits_only.rfind('0')) {
            (Some(first), Some(last)) => last - first + 1,
            _ => 0,
        };

        let (group_size1, group_size2) = match integer_pattern.rfind(',') {
            Some(last_sep) => {
                let digit_positions = integer_pattern.replace('#', "0");
                let size1 = digit_positions.rfind('0').map_or(0, |p| p.saturating_sub(last_sep));
                let size2 = digit_positions[..last_sep]
                    .rfind(',')
                    .map_or(0, |p| last_sep - p - 1);
                (size1, size2)
            }
            None => (0, 0),
        };

        Ok(Self {
            decimal_digits,
            max_decimal_digits,
            integer_digits,
            group_size1,
            group_size2,
            positive_prefix,
            positive_suffix,
            negative_prefix,
            negative_suffix,
            multiplier,
        })
    }

    /// Parses formatted text back to a number.
    ///
    /// Returns `None` when the text does not denote a number under this
    /// pattern and locale — the recoverable outcome of validating user
    /// input. Grouping placement is not checked: every grouping separator
    /// strips uniformly, wherever it sits.
    #[must_use]
    pub fn parse_value(&self, text: &str, locale: &NumberLocale) -> Option<f64> {
        let mut number = text
            .replace(&locale.percent_sign, "")
            .replace(&locale.per_mille_sign, "");

        let mut negative = false;
        if !self.negative_prefix.is_empty() && number.starts_with(&self.negative_prefix) {
            negative = true;
            number.replace_range(..self.negative_prefix.len(), "");
        }
        if !self.negative_suffix.is_empty() && number.ends_with(&self.negative_suffix) {
            negative = true;
            number.truncate(number.len() - self.negative_suffix.len());
        }

        // With empty negative affixes the sign stays embedded in the body;
        // normalizing the locale minus sign lets the numeric parse carry it.
        let number = number
            .replace(&locale.grouping_separator, "")
            .replace(&locale.decimal_separator, ".")
            .replace(&locale.minus_sign, "-");

        let value: f64 = number.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }

        let value = value / f64::from(self.multiplier);
        Some(if negative { -value } else { value })
    }

    /// Formats a number under this pattern and locale.
    ///
    /// The multiplier is applied before rounding (a percent pattern formats
    /// `0.45` as `45`), excess fractional digits round half away from zero,
    /// and the localized percent/per-mille sign is appended for multiplier
    /// patterns.
    #[must_use]
    pub fn format_value(&self, value: f64, locale: &NumberLocale) -> String {
        let scaled = value * f64::from(self.multiplier);
        let factor = 10f64.powi(self.max_decimal_digits as i32);
        let rounded = (scaled * factor).round() / factor;
        let negative = rounded < 0.0;

        let digits = format!("{:.*}", self.max_decimal_digits, rounded.abs());
        let (int_digits, frac_digits) = match digits.split_once('.') {
            Some((i, f)) => (i.to_string(), f.to_string()),
            None => (digits, String::new()),
        };

        let mut frac = frac_digits;
        while frac.len() > self.decimal_digits && frac.ends_with('0') {
            frac.pop();
        }

        let mut int = int_digits;
        while int.len() < self.integer_digits {
            int.insert(0, '0');
        }

        let grouped = self.group(&int, locale);

        let mut body = grouped;
        if !frac.is_empty() {
            body.push_str(&locale.decimal_separator);
            body.push_str(&frac);
        }

        let (prefix, suffix) = if negative {
            (&self.negative_prefix, &self.negative_suffix)
        } else {
            (&self.positive_prefix, &self.positive_suffix)
        };
        let prefix = prefix.replace('-', &locale.minus_sign);

        let marker = match self.multiplier {
            100 => locale.percent_sign.as_str(),
            1000 => locale.per_mille_sign.as_str(),
            _ => "",
        };

        format!("{prefix}{body}{suffix}{marker}")
    }

    /// Inserts grouping separators right to left: one primary group, then
    /// secondary-size groups (primary repeating when no secondary is set).
    fn group(&self, int_digits: &str, locale: &NumberLocale) -> String {
        if self.group_size1 == 0 || int_digits.len() <= self.group_size1 {
            return int_digits.to_string();
        }

        let split = int_digits.len() - self.group_size1;
        let (head, tail) = int_digits.split_at(split);

        let higher_size = if self.group_size2 > 0 { self.group_size2 } else { self.group_size1 };
        let mut groups: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > higher_size {
            let cut = rest.len() - higher_size;
            let (front, back) = rest.split_at(cut);
            groups.push(back);
            rest = front;
        }
        groups.push(rest);
        groups.reverse();
        groups.push(tail);

        groups.join(&locale.grouping_separator)
    }
}

/// Splits a sub-pattern into prefix, digit run, and suffix.
///
/// The run is the first maximal stretch of `#`, `,`, `.`, `0`; text before
/// it is the prefix, everything after it the suffix. `None` when no run
/// character occurs at all.
fn split_run(sub_pattern: &str) -> Option<(&str, &str, &str)> {
    let start = sub_pattern.find(RUN_CHARS)?;
    let run_len = sub_pattern[start..]
        .find(|c| !RUN_CHARS.contains(&c))
        .unwrap_or(sub_pattern.len() - start);
    let end = start + run_len;
    Some((&sub_pattern[..start], &sub_pattern[start..end], &sub_pattern[end..]))
}

/// Drops percent/per-mille markers from affix text; they are re-localized
/// at format time and stripped from input at parse time.
fn strip_markers(affix: &str) -> String {
    affix.chars().filter(|c| *c != '%' && *c != '\u{2030}').collect()
}
