use bindery_format::{FormatError, NumberLocale, NumberParser, NumberPattern, PatternCache};

fn en_us_parser() -> NumberParser {
    NumberParser::new(NumberLocale::en_us())
}

// ── Plain parsing ────────────────────────────────────────────────

#[test]
fn parses_grouped_decimal_text() {
    assert_eq!(
        en_us_parser().parse("#,##0.00", "12,345.68").unwrap(),
        Some(12345.68)
    );
}

#[test]
fn grouping_placement_is_not_validated() {
    // Separators strip uniformly wherever they sit.
    assert_eq!(
        en_us_parser().parse("#,#,#0.00", "1,2,3,45.60").unwrap(),
        Some(12345.60)
    );
    assert_eq!(
        en_us_parser().parse("#,##0.00", "1,2345.68").unwrap(),
        Some(12345.68)
    );
}

#[test]
fn ungrouped_text_parses_under_grouped_pattern() {
    assert_eq!(
        en_us_parser().parse("#,##0.00", "12345.68").unwrap(),
        Some(12345.68)
    );
}

#[test]
fn non_numeric_text_is_a_parse_failure_not_an_error() {
    let parser = en_us_parser();
    assert_eq!(parser.parse("#,##0.00", "abc").unwrap(), None);
    assert_eq!(parser.parse("#,##0.00", "12.3.4").unwrap(), None);
    assert_eq!(parser.parse("#,##0.00", "").unwrap(), None);
}

#[test]
fn infinite_and_nan_text_are_parse_failures() {
    let parser = en_us_parser();
    assert_eq!(parser.parse("0.00", "inf").unwrap(), None);
    assert_eq!(parser.parse("0.00", "NaN").unwrap(), None);
}

#[test]
fn bad_pattern_is_an_error_not_a_parse_failure() {
    assert!(matches!(
        en_us_parser().parse("abc", "12"),
        Err(FormatError::InvalidPattern { .. })
    ));
}

// ── Negativity ───────────────────────────────────────────────────

#[test]
fn implicit_minus_prefix_negates() {
    assert_eq!(
        en_us_parser().parse("#,##0.00", "-1,234.50").unwrap(),
        Some(-1234.50)
    );
}

#[test]
fn explicit_negative_affixes_negate() {
    assert_eq!(
        en_us_parser().parse("#,##0.00;(#,##0.00)", "(1,234.00)").unwrap(),
        Some(-1234.0)
    );
}

#[test]
fn unicode_minus_sign_in_body_is_normalized() {
    let mut locale = NumberLocale::en_us();
    locale.minus_sign = "\u{2212}".to_string();
    let pattern = NumberPattern::compile("0.00").unwrap();
    // The derived "-" prefix never matches, so the sign rides through the
    // body and is normalized during separator replacement.
    assert_eq!(pattern.parse_value("\u{2212}45.5", &locale), Some(-45.5));
}

// ── Multipliers ──────────────────────────────────────────────────

#[test]
fn percent_pattern_divides_by_one_hundred() {
    assert_eq!(en_us_parser().parse("0.00%", "45.00%").unwrap(), Some(0.45));
    // The percent sign in the text is optional for parsing.
    assert_eq!(en_us_parser().parse("0.00%", "45.00").unwrap(), Some(0.45));
}

#[test]
fn per_mille_pattern_divides_by_one_thousand() {
    assert_eq!(
        en_us_parser().parse("0\u{2030}", "250\u{2030}").unwrap(),
        Some(0.25)
    );
}

#[test]
fn negative_percentage() {
    assert_eq!(
        en_us_parser().parse("0.00%", "-12.50%").unwrap(),
        Some(-0.125)
    );
}

// ── Locale separators ────────────────────────────────────────────

#[test]
fn pt_br_swaps_grouping_and_decimal_separators() {
    let parser = NumberParser::new(NumberLocale::pt_br());
    assert_eq!(
        parser.parse("#,##0.00", "12.345,68").unwrap(),
        Some(12345.68)
    );
}

// ── Named entry points ───────────────────────────────────────────

#[test]
fn parse_decimal_uses_the_locale_decimal_pattern() {
    assert_eq!(en_us_parser().parse_decimal("1,234.5").unwrap(), Some(1234.5));
}

#[test]
fn parse_percentage_uses_the_locale_percent_pattern() {
    assert_eq!(en_us_parser().parse_percentage("45%").unwrap(), Some(0.45));
}

#[test]
fn parse_currency_strips_symbol_and_iso_code() {
    let parser = en_us_parser();
    assert_eq!(
        parser.parse_currency("$1,234.50", "USD").unwrap(),
        Some(1234.50)
    );
    assert_eq!(
        parser.parse_currency("1,234.50 USD", "USD").unwrap(),
        Some(1234.50)
    );

    let parser = NumberParser::new(NumberLocale::pt_br());
    assert_eq!(
        parser.parse_currency("R$ 1.234,50", "BRL").unwrap(),
        Some(1234.50)
    );
}

#[test]
fn parse_monetary_and_statistical_use_their_patterns() {
    let parser = en_us_parser();
    assert_eq!(parser.parse_monetary("1,234.56").unwrap(), Some(1234.56));
    assert_eq!(parser.parse_statistical("0.123456").unwrap(), Some(0.123456));
}

// ── Shared cache ─────────────────────────────────────────────────

#[test]
fn parsers_share_an_injected_cache() {
    let cache = PatternCache::new();
    let a = NumberParser::with_cache(NumberLocale::en_us(), cache.clone());
    let b = NumberParser::with_cache(NumberLocale::pt_br(), cache.clone());

    a.parse("#,##0.00", "1.00").unwrap();
    b.parse("#,##0.00", "1,00").unwrap();

    // One descriptor serves both locales.
    assert_eq!(cache.len(), 1);
}
