//! Preferred sizes and min/max size constraints.

use crate::keyword::keyword_enum;
use crate::length::LengthValue;
use crate::parser::ParserConfig;
use crate::property::PropertyKind;

keyword_enum! {
    /// Keywords accepted by `width` / `height`.
    pub enum SizeKeyword {
        Auto => "auto",
        Inherit => "inherit",
        MinContent => "min-content",
        MaxContent => "max-content",
    }
}

keyword_enum! {
    /// Keywords accepted by `min-*` / `max-*` constraints.
    pub enum ConstraintKeyword {
        None => "none",
        Inherit => "inherit",
        MinContent => "min-content",
        MaxContent => "max-content",
    }
}

impl PropertyKind for SizeKeyword {
    const NAME: &'static str = "size";
    const CONFIG: ParserConfig = ParserConfig::NONE
        .with_keywords(SizeKeyword::NAMES)
        .with_length()
        .with_percentage();
}

impl PropertyKind for ConstraintKeyword {
    const NAME: &'static str = "size-constraint";
    const CONFIG: ParserConfig = ParserConfig::NONE
        .with_keywords(ConstraintKeyword::NAMES)
        .with_length()
        .with_percentage();
}

/// A preferred size (`width`, `height`).
pub type Size = LengthValue<SizeKeyword>;

/// A size bound (`min-width`, `max-height`, ...).
pub type SizeConstraint = LengthValue<ConstraintKeyword>;

impl Default for LengthValue<SizeKeyword> {
    fn default() -> Self {
        Self::keyword(SizeKeyword::Auto)
    }
}

impl Default for LengthValue<ConstraintKeyword> {
    fn default() -> Self {
        Self::keyword(ConstraintKeyword::None)
    }
}
