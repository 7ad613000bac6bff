//! Typed value parsing.
//!
//! A [`ParserConfig`] enables a subset of the five value categories; the
//! parser tries them in a fixed order (keyword, length, number, percentage,
//! ratio) and returns the first match.

use std::fmt;

use boxkit_types::{BoxkitError, LengthUnit, Result};

/// A raw input as handed over by the binding layer.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{n}"),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Number(f64::from(n))
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

/// The typed result of a successful parse.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    Keyword(String),
    Length(f64, LengthUnit),
    Number(f64),
    Percentage(f64),
    Ratio(f64),
}

/// Which value categories a property accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Accepted keywords. Empty disables the keyword category.
    pub keywords: &'static [&'static str],
    pub length: bool,
    pub number: bool,
    pub percentage: bool,
    pub ratio: bool,
    pub allow_negative: bool,
}

impl ParserConfig {
    /// A config with every category disabled.
    pub const NONE: Self = Self {
        keywords: &[],
        length: false,
        number: false,
        percentage: false,
        ratio: false,
        allow_negative: false,
    };

    pub const fn with_keywords(mut self, keywords: &'static [&'static str]) -> Self {
        self.keywords = keywords;
        self
    }

    pub const fn with_length(mut self) -> Self {
        self.length = true;
        self
    }

    pub const fn with_number(mut self) -> Self {
        self.number = true;
        self
    }

    pub const fn with_percentage(mut self) -> Self {
        self.percentage = true;
        self
    }

    pub const fn with_ratio(mut self) -> Self {
        self.ratio = true;
        self
    }

    pub const fn allowing_negative(mut self) -> Self {
        self.allow_negative = true;
        self
    }

    /// Human-readable list of the enabled categories, for error messages.
    pub fn expected(&self) -> String {
        let mut parts = Vec::new();
        if !self.keywords.is_empty() {
            parts.push(format!("one of [{}]", self.keywords.join(", ")));
        }
        for (enabled, name) in [
            (self.length, "length"),
            (self.number, "number"),
            (self.percentage, "percentage"),
            (self.ratio, "ratio"),
        ] {
            if enabled {
                parts.push(name.to_string());
            }
        }
        if parts.is_empty() {
            "nothing".to_string()
        } else {
            parts.join(" or ")
        }
    }

    fn sign_ok(&self, n: f64) -> bool {
        self.allow_negative || n >= 0.0
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::NONE
    }
}

/// Parse `raw` according to `config`.
///
/// Fails with [`BoxkitError::InvalidValue`] when no enabled category
/// accepts the input.
pub fn parse_value(config: &ParserConfig, raw: &RawValue) -> Result<ParsedValue> {
    let parsed = match raw {
        RawValue::Text(text) => parse_text(config, text.trim()),
        RawValue::Number(n) => parse_number_input(config, *n),
    };
    match parsed {
        Some(value) => {
            log::trace!("parsed {raw:?} as {value:?}");
            Ok(value)
        },
        None => Err(BoxkitError::invalid(raw.to_string(), config.expected())),
    }
}

fn parse_text(config: &ParserConfig, text: &str) -> Option<ParsedValue> {
    if let Some(keyword) = config.keywords.iter().find(|k| **k == text) {
        return Some(ParsedValue::Keyword((*keyword).to_string()));
    }
    if config.length {
        if let Some((n, unit)) = split_length(text) {
            if config.sign_ok(n) {
                return Some(ParsedValue::Length(n, unit));
            }
        }
    }
    if config.number {
        if let Some(n) = parse_finite(text).filter(|n| config.sign_ok(*n)) {
            return Some(ParsedValue::Number(n));
        }
    }
    if config.percentage {
        if let Some(n) = text
            .strip_suffix('%')
            .and_then(parse_finite)
            .filter(|n| config.sign_ok(*n))
        {
            return Some(ParsedValue::Percentage(n));
        }
    }
    if config.ratio {
        if let Some(r) = split_ratio(text) {
            return Some(ParsedValue::Ratio(r));
        }
    }
    None
}

fn parse_number_input(config: &ParserConfig, n: f64) -> Option<ParsedValue> {
    if !n.is_finite() {
        return None;
    }
    if config.length && config.sign_ok(n) {
        Some(ParsedValue::Length(n, LengthUnit::Px))
    } else if config.number && config.sign_ok(n) {
        Some(ParsedValue::Number(n))
    } else if config.percentage && config.sign_ok(n) {
        Some(ParsedValue::Percentage(n))
    } else if config.ratio && n > 0.0 {
        Some(ParsedValue::Ratio(n))
    } else {
        None
    }
}

/// Parse a finite number, rejecting empty strings, NaN and infinities.
pub(crate) fn parse_finite(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Split `<number><unit>` with a missing unit meaning pixels.
pub(crate) fn split_length(text: &str) -> Option<(f64, LengthUnit)> {
    match LengthUnit::split_suffix(text) {
        Some((number, unit)) => parse_finite(number).map(|n| (n, unit)),
        None => parse_finite(text).map(|n| (n, LengthUnit::Px)),
    }
}

/// Evaluate `<number>` or `<number>/<number>`; the result must be positive.
pub(crate) fn split_ratio(text: &str) -> Option<f64> {
    let (numerator, denominator) = match text.split_once('/') {
        Some((n, d)) => (parse_finite(n)?, parse_finite(d)?),
        None => (parse_finite(text)?, 1.0),
    };
    let ratio = numerator / denominator;
    (ratio.is_finite() && ratio > 0.0).then_some(ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE_LIKE: ParserConfig = ParserConfig::NONE
        .with_keywords(&["auto", "inherit"])
        .with_length()
        .with_percentage();

    const RATIO_LIKE: ParserConfig = ParserConfig::NONE
        .with_keywords(&["auto"])
        .with_number()
        .with_ratio();

    fn parse(config: &ParserConfig, raw: impl Into<RawValue>) -> Result<ParsedValue> {
        parse_value(config, &raw.into())
    }

    // -- Keywords ----------------------------------------------------------

    #[test]
    fn keyword_exact_match() {
        assert_eq!(
            parse(&SIZE_LIKE, "auto").unwrap(),
            ParsedValue::Keyword("auto".into())
        );
    }

    #[test]
    fn keyword_is_case_sensitive() {
        assert!(parse(&SIZE_LIKE, "AUTO").is_err());
    }

    #[test]
    fn keywords_disabled_when_empty() {
        let config = ParserConfig::NONE.with_length();
        assert!(parse(&config, "auto").is_err());
    }

    // -- Lengths -----------------------------------------------------------

    #[test]
    fn length_with_px_suffix() {
        assert_eq!(
            parse(&SIZE_LIKE, "16px").unwrap(),
            ParsedValue::Length(16.0, LengthUnit::Px)
        );
    }

    #[test]
    fn length_without_suffix_defaults_to_px() {
        assert_eq!(
            parse(&SIZE_LIKE, "12.5").unwrap(),
            ParsedValue::Length(12.5, LengthUnit::Px)
        );
    }

    #[test]
    fn length_engine_units() {
        assert_eq!(
            parse(&SIZE_LIKE, "50vw").unwrap(),
            ParsedValue::Length(50.0, LengthUnit::Vw)
        );
        assert_eq!(
            parse(&SIZE_LIKE, "20cmax").unwrap(),
            ParsedValue::Length(20.0, LengthUnit::Cmax)
        );
    }

    #[test]
    fn length_from_number_is_pixels() {
        assert_eq!(
            parse(&SIZE_LIKE, 42.0).unwrap(),
            ParsedValue::Length(42.0, LengthUnit::Px)
        );
    }

    #[test]
    fn negative_length_rejected_unless_allowed() {
        assert!(parse(&SIZE_LIKE, "-4px").is_err());
        let config = SIZE_LIKE.allowing_negative();
        assert_eq!(
            parse(&config, "-4px").unwrap(),
            ParsedValue::Length(-4.0, LengthUnit::Px)
        );
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(
            parse(&SIZE_LIKE, "  8px ").unwrap(),
            ParsedValue::Length(8.0, LengthUnit::Px)
        );
    }

    // -- Numbers and percentages ------------------------------------------

    #[test]
    fn percentage_needs_percent_sign_in_text() {
        assert_eq!(
            parse(&SIZE_LIKE, "50%").unwrap(),
            ParsedValue::Percentage(50.0)
        );
    }

    #[test]
    fn length_wins_over_percentage_for_bare_numbers() {
        assert_eq!(
            parse(&SIZE_LIKE, "50").unwrap(),
            ParsedValue::Length(50.0, LengthUnit::Px)
        );
    }

    #[test]
    fn number_before_ratio() {
        assert_eq!(parse(&RATIO_LIKE, "2").unwrap(), ParsedValue::Number(2.0));
        assert_eq!(
            parse(&RATIO_LIKE, "16/9").unwrap(),
            ParsedValue::Ratio(16.0 / 9.0)
        );
    }

    #[test]
    fn nan_number_rejected() {
        let config = ParserConfig::NONE.with_number();
        assert!(parse(&config, f64::NAN).is_err());
        assert!(parse(&config, "NaN").is_err());
    }

    #[test]
    fn infinite_number_rejected_in_every_category() {
        let all = SIZE_LIKE.with_number().with_ratio().allowing_negative();
        assert!(parse(&all, f64::INFINITY).is_err());
        assert!(parse(&all, f64::NEG_INFINITY).is_err());
        assert!(parse(&all, "inf").is_err());
    }

    // -- Ratios ------------------------------------------------------------

    #[test]
    fn ratio_zero_denominator_rejected() {
        let config = ParserConfig::NONE.with_ratio();
        assert!(parse(&config, "16/0").is_err());
    }

    #[test]
    fn ratio_non_positive_rejected() {
        let config = ParserConfig::NONE.with_ratio();
        assert!(parse(&config, "0/4").is_err());
        assert!(parse(&config, "-1/4").is_err());
    }

    #[test]
    fn ratio_denominator_defaults_to_one() {
        let config = ParserConfig::NONE.with_ratio();
        assert_eq!(parse(&config, "3").unwrap(), ParsedValue::Ratio(3.0));
        assert_eq!(parse(&config, "4 / 2").unwrap(), ParsedValue::Ratio(2.0));
    }

    // -- Failure -------------------------------------------------------------

    #[test]
    fn error_names_input_and_categories() {
        let err = parse(&SIZE_LIKE, "wide").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("\"wide\""));
        assert!(msg.contains("auto, inherit"));
        assert!(msg.contains("length or percentage"));
    }

    #[test]
    fn empty_string_rejected() {
        assert!(parse(&SIZE_LIKE, "").is_err());
    }

    #[test]
    fn nothing_enabled_rejects_everything() {
        let err = parse(&ParserConfig::NONE, 1.0).unwrap_err();
        assert!(format!("{err}").contains("nothing"));
    }
}
