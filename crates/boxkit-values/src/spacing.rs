//! Padding and margin amounts.

use crate::keyword::keyword_enum;
use crate::length::LengthValue;
use crate::parser::ParserConfig;
use crate::property::PropertyKind;

keyword_enum! {
    pub enum SpacingKeyword {
        Inherit => "inherit",
    }
}

impl PropertyKind for SpacingKeyword {
    const NAME: &'static str = "spacing";
    const CONFIG: ParserConfig = ParserConfig::NONE
        .with_keywords(SpacingKeyword::NAMES)
        .with_length()
        .with_percentage();
}

/// Property kind for margins: the spacing grammar with negatives allowed.
///
/// Padding properties use [`SpacingKeyword`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginKind {}

impl PropertyKind for MarginKind {
    const NAME: &'static str = "margin";
    const CONFIG: ParserConfig =
        <SpacingKeyword as PropertyKind>::CONFIG.allowing_negative();
}

/// Padding (never negative) or margin (may be negative).
pub type Spacing = LengthValue<SpacingKeyword>;

impl LengthValue<SpacingKeyword> {
    /// Padding amount; negative input clamps to zero.
    pub fn padding(px: f64) -> Self {
        Self::pixels(px)
    }

    /// Margin amount; negative input is kept.
    pub fn margin(px: f64) -> Self {
        let mut margin = Self::pixels(0.0).allowing_negative();
        margin.set_pixels(px);
        margin
    }
}

impl Default for LengthValue<SpacingKeyword> {
    fn default() -> Self {
        Self::padding(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsedValue;
    use crate::property::Property;
    use boxkit_types::{LengthUnit, Unit};

    #[test]
    fn padding_clamps_negative() {
        let padding = Spacing::padding(-8.0);
        assert_eq!(padding.value(), Some(0.0));
        assert!(!padding.allows_negative());
    }

    #[test]
    fn margin_keeps_negative() {
        let mut margin = Spacing::margin(-8.0);
        assert_eq!(margin.value(), Some(-8.0));
        margin.set_raw("-4px").unwrap();
        assert_eq!(margin.value(), Some(-4.0));
    }

    #[test]
    fn margin_property_accepts_negative_lengths() {
        let mut margin = Property::<MarginKind>::new("-4px").unwrap();
        assert_eq!(margin.parsed(), &ParsedValue::Length(-4.0, LengthUnit::Px));
        margin.set("inherit").unwrap();
        assert!(Property::<SpacingKeyword>::new("-4px").is_err());
    }

    #[test]
    fn inherit_keyword() {
        let mut padding = Spacing::default();
        padding.set_raw("inherit").unwrap();
        assert!(padding.is(SpacingKeyword::Inherit));
        assert_eq!(padding.unit(), Unit::None);
    }

    #[test]
    fn spacing_rejects_size_keywords() {
        let mut padding = Spacing::padding(3.0);
        assert!(padding.set_raw("auto").is_err());
        assert_eq!(padding.value(), Some(3.0));
    }
}
