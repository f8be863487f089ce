use serde::{Deserialize, Serialize};

/// Number symbols and named patterns for one locale.
///
/// Everything the pattern engine needs from locale data: the separator and
/// sign characters used when parsing and formatting, and the built-in
/// patterns behind the named entry points (decimal, currency, percentage,
/// statistical, monetary). Serde-derived so hosts can ship their own locale
/// tables; the built-ins cover the common cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocale {
    pub grouping_separator: String,
    pub decimal_separator: String,
    pub minus_sign: String,
    pub percent_sign: String,
    pub per_mille_sign: String,
    pub currency_symbol: String,
    pub decimal_format: String,
    pub currency_format: String,
    pub percent_format: String,
    pub statistical_format: String,
    pub monetary_format: String,
}

impl NumberLocale {
    /// United States English: `1,234.56`, `$`.
    #[must_use]
    pub fn en_us() -> Self {
        Self {
            grouping_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            minus_sign: "-".to_string(),
            percent_sign: "%".to_string(),
            per_mille_sign: "\u{2030}".to_string(),
            currency_symbol: "$".to_string(),
            decimal_format: "#,##0.###".to_string(),
            currency_format: "\u{a4}#,##0.00".to_string(),
            percent_format: "#,##0%".to_string(),
            statistical_format: "#,##0.######".to_string(),
            monetary_format: "#,##0.00".to_string(),
        }
    }

    /// Brazilian Portuguese: `1.234,56`, `R$`.
    #[must_use]
    pub fn pt_br() -> Self {
        Self {
            grouping_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            minus_sign: "-".to_string(),
            percent_sign: "%".to_string(),
            per_mille_sign: "\u{2030}".to_string(),
            currency_symbol: "R$".to_string(),
            decimal_format: "#,##0.###".to_string(),
            currency_format: "\u{a4} #,##0.00".to_string(),
            percent_format: "#,##0%".to_string(),
            statistical_format: "#,##0.######".to_string(),
            monetary_format: "#,##0.00".to_string(),
        }
    }

    /// German: `1.234,56`, `€` suffixed.
    #[must_use]
    pub fn de_de() -> Self {
        Self {
            grouping_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            minus_sign: "-".to_string(),
            percent_sign: "%".to_string(),
            per_mille_sign: "\u{2030}".to_string(),
            currency_symbol: "\u{20ac}".to_string(),
            decimal_format: "#,##0.###".to_string(),
            currency_format: "#,##0.00 \u{a4}".to_string(),
            percent_format: "#,##0 %".to_string(),
            statistical_format: "#,##0.######".to_string(),
            monetary_format: "#,##0.00".to_string(),
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::en_us()
    }
}
