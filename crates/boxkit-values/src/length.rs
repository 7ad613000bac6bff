//! Numeric-or-keyword values with unit tracking.
//!
//! [`LengthValue`] backs [`Size`](crate::size::Size),
//! [`SizeConstraint`](crate::size::SizeConstraint) and
//! [`Spacing`](crate::spacing::Spacing). Negative numbers are clamped to
//! zero when they are written, unless the value allows negatives.

use boxkit_types::{BoxkitError, LengthUnit, Result, Unit, UnitContext};

use crate::keyword::Keyword;
use crate::parser::{ParsedValue, RawValue, parse_value};

/// Either a keyword or a number with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<K> {
    Keyword(K),
    Numeric { value: f64, unit: Unit },
}

/// A value of keyword set `K` with a sign policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthValue<K> {
    value: Value<K>,
    allow_negative: bool,
}

impl<K: Keyword> LengthValue<K> {
    pub fn keyword(keyword: K) -> Self {
        Self {
            value: Value::Keyword(keyword),
            allow_negative: false,
        }
    }

    pub fn pixels(px: f64) -> Self {
        let mut v = Self::keyword_free();
        v.set_pixels(px);
        v
    }

    pub fn percent(percent: f64) -> Self {
        let mut v = Self::keyword_free();
        v.set_percent(percent);
        v
    }

    fn keyword_free() -> Self {
        Self {
            value: Value::Numeric {
                value: 0.0,
                unit: Unit::Pixels,
            },
            allow_negative: false,
        }
    }

    pub(crate) fn allowing_negative(mut self) -> Self {
        self.allow_negative = true;
        self
    }

    /// Parse and store a raw input.
    ///
    /// Negative numbers are accepted and clamped like the numeric setters;
    /// anything else that does not parse is an error and leaves the value
    /// untouched.
    pub fn set_raw(&mut self, input: impl Into<RawValue>) -> Result<()> {
        let raw = input.into();
        let config = K::CONFIG.allowing_negative();
        match parse_value(&config, &raw)? {
            ParsedValue::Keyword(text) => match K::from_keyword(&text) {
                Some(keyword) => self.set_keyword(keyword),
                None => return Err(BoxkitError::invalid(text, config.expected())),
            },
            ParsedValue::Length(n, unit) => self.set_length(n, unit),
            ParsedValue::Number(n) => self.set_pixels(n),
            ParsedValue::Percentage(p) => self.set_percent(p),
            ParsedValue::Ratio(_) => {
                return Err(BoxkitError::invalid(raw.to_string(), config.expected()));
            },
        }
        Ok(())
    }

    pub fn set_pixels(&mut self, px: f64) {
        self.set_numeric(px, Unit::Pixels);
    }

    pub fn set_percent(&mut self, percent: f64) {
        self.set_numeric(percent, Unit::Percent);
    }

    pub fn set_length(&mut self, n: f64, unit: LengthUnit) {
        self.set_numeric(n, unit.into());
    }

    pub fn set_keyword(&mut self, keyword: K) {
        self.value = Value::Keyword(keyword);
    }

    fn set_numeric(&mut self, n: f64, unit: Unit) {
        let value = if n.is_nan() {
            0.0
        } else if self.allow_negative {
            n
        } else {
            n.max(0.0)
        };
        self.value = Value::Numeric { value, unit };
    }

    pub fn get(&self) -> Value<K> {
        self.value
    }

    /// Numeric value, or `None` for keywords.
    pub fn value(&self) -> Option<f64> {
        match self.value {
            Value::Numeric { value, .. } => Some(value),
            Value::Keyword(_) => None,
        }
    }

    pub fn unit(&self) -> Unit {
        match self.value {
            Value::Numeric { unit, .. } => unit,
            Value::Keyword(_) => Unit::None,
        }
    }

    pub fn as_keyword(&self) -> Option<K> {
        match self.value {
            Value::Keyword(k) => Some(k),
            Value::Numeric { .. } => None,
        }
    }

    pub fn is(&self, keyword: K) -> bool {
        self.as_keyword() == Some(keyword)
    }

    pub fn allows_negative(&self) -> bool {
        self.allow_negative
    }

    /// Resolve to pixels. Keywords resolve to `None`.
    pub fn to_pixels(&self, percent_basis: f64, ctx: &UnitContext) -> Option<f64> {
        match self.value {
            Value::Numeric { value, unit } => ctx.to_pixels(value, unit, percent_basis),
            Value::Keyword(_) => None,
        }
    }
}
