//! Aspect ratio (width / height).

use boxkit_types::{BoxkitError, Result};

use crate::keyword::{Keyword, keyword_enum};
use crate::parser::{ParsedValue, ParserConfig, RawValue, parse_value};
use crate::property::PropertyKind;

/// Smallest stored ratio.
pub const MIN_RATIO: f64 = 0.001;
/// Largest stored ratio.
pub const MAX_RATIO: f64 = 1000.0;

keyword_enum! {
    pub enum AspectKeyword {
        Auto => "auto",
        Inherit => "inherit",
    }
}

impl PropertyKind for AspectKeyword {
    const NAME: &'static str = "aspect-ratio";
    const CONFIG: ParserConfig = ParserConfig::NONE
        .with_keywords(AspectKeyword::NAMES)
        .with_number()
        .with_ratio();
}

/// An aspect ratio clamped to `[MIN_RATIO, MAX_RATIO]`, or a keyword.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AspectRatio {
    Keyword(AspectKeyword),
    Ratio(f64),
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::Keyword(AspectKeyword::Auto)
    }
}

impl AspectRatio {
    pub fn ratio(ratio: f64) -> Self {
        let mut aspect = Self::default();
        aspect.set_ratio(ratio);
        aspect
    }

    /// Store a numeric ratio, clamped into range. NaN resets to `auto`.
    pub fn set_ratio(&mut self, ratio: f64) {
        *self = if ratio.is_nan() {
            log::warn!("aspect-ratio: NaN ignored, falling back to auto");
            AspectRatio::Keyword(AspectKeyword::Auto)
        } else {
            AspectRatio::Ratio(ratio.clamp(MIN_RATIO, MAX_RATIO))
        };
    }

    pub fn set_keyword(&mut self, keyword: AspectKeyword) {
        *self = AspectRatio::Keyword(keyword);
    }

    /// Parse and store a raw input (`"16/9"`, `1.5`, `"auto"`).
    ///
    /// Numbers never fail: they go through [`set_ratio`](Self::set_ratio)
    /// and are clamped like any other ratio.
    pub fn set_raw(&mut self, input: impl Into<RawValue>) -> Result<()> {
        let raw = input.into();
        if let RawValue::Number(n) = raw {
            self.set_ratio(n);
            return Ok(());
        }
        let config = AspectKeyword::CONFIG.allowing_negative();
        match parse_value(&config, &raw)? {
            ParsedValue::Keyword(text) => match AspectKeyword::from_keyword(&text) {
                Some(keyword) => self.set_keyword(keyword),
                None => {
                    return Err(BoxkitError::invalid(text, config.expected()));
                },
            },
            ParsedValue::Number(n) | ParsedValue::Ratio(n) => self.set_ratio(n),
            ParsedValue::Length(..) | ParsedValue::Percentage(_) => {
                return Err(BoxkitError::invalid(raw.to_string(), config.expected()));
            },
        }
        Ok(())
    }

    /// Numeric ratio, or `None` for keywords.
    pub fn value(&self) -> Option<f64> {
        match self {
            AspectRatio::Ratio(r) => Some(*r),
            AspectRatio::Keyword(_) => None,
        }
    }

    pub fn as_keyword(&self) -> Option<AspectKeyword> {
        match self {
            AspectRatio::Keyword(k) => Some(*k),
            AspectRatio::Ratio(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_auto() {
        assert_eq!(AspectRatio::default().as_keyword(), Some(AspectKeyword::Auto));
        assert_eq!(AspectRatio::default().value(), None);
    }

    #[test]
    fn clamps_extremes() {
        assert_eq!(AspectRatio::ratio(0.0).value(), Some(MIN_RATIO));
        assert_eq!(AspectRatio::ratio(1e9).value(), Some(MAX_RATIO));
        assert_eq!(AspectRatio::ratio(f64::INFINITY).value(), Some(MAX_RATIO));
    }

    #[test]
    fn nan_falls_back_to_auto() {
        let aspect = AspectRatio::ratio(f64::NAN);
        assert_eq!(aspect.as_keyword(), Some(AspectKeyword::Auto));
    }

    #[test]
    fn set_raw_ratio_string() {
        let mut aspect = AspectRatio::default();
        aspect.set_raw("16/9").unwrap();
        assert_eq!(aspect.value(), Some(16.0 / 9.0));
        aspect.set_raw(2).unwrap();
        assert_eq!(aspect.value(), Some(2.0));
        aspect.set_raw("inherit").unwrap();
        assert_eq!(aspect.as_keyword(), Some(AspectKeyword::Inherit));
    }

    #[test]
    fn set_raw_rejects_zero_denominator() {
        let mut aspect = AspectRatio::ratio(1.5);
        assert!(aspect.set_raw("16/0").is_err());
        assert_eq!(aspect.value(), Some(1.5));
    }

    #[test]
    fn negative_input_clamps_to_min() {
        let mut aspect = AspectRatio::ratio(1.5);
        aspect.set_raw(-2.0).unwrap();
        assert_eq!(aspect.value(), Some(MIN_RATIO));
        aspect.set_raw("-3").unwrap();
        assert_eq!(aspect.value(), Some(MIN_RATIO));
    }

    #[test]
    fn non_finite_numbers_follow_set_ratio() {
        let mut aspect = AspectRatio::default();
        aspect.set_raw(f64::INFINITY).unwrap();
        assert_eq!(aspect.value(), Some(MAX_RATIO));
        aspect.set_raw(f64::NAN).unwrap();
        assert_eq!(aspect.as_keyword(), Some(AspectKeyword::Auto));
    }

    #[test]
    fn tiny_ratio_string_clamps() {
        let mut aspect = AspectRatio::default();
        aspect.set_raw("1/100000").unwrap();
        assert_eq!(aspect.value(), Some(MIN_RATIO));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn numeric_ratio_always_in_range(x in proptest::num::f64::ANY) {
                let aspect = AspectRatio::ratio(x);
                if let Some(r) = aspect.value() {
                    prop_assert!((MIN_RATIO..=MAX_RATIO).contains(&r));
                } else {
                    prop_assert!(x.is_nan());
                }
            }

            #[test]
            fn raw_number_always_in_range(x in proptest::num::f64::ANY) {
                let mut aspect = AspectRatio::ratio(1.0);
                prop_assert!(aspect.set_raw(x).is_ok());
                if let Some(r) = aspect.value() {
                    prop_assert!((MIN_RATIO..=MAX_RATIO).contains(&r));
                }
            }
        }
    }
}
