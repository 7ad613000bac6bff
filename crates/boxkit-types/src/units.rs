//! Length units and the context used to turn them into pixels.
//!
//! Container units (`cw`, `ch`, `cmin`, `cmax`) are relative to the box's
//! containing block; viewport units (`vw`, `vh`, `vmin`, `vmax`) to the
//! root surface. One unit is 1% of the reference dimension, as in CSS.

use serde::Deserialize;

/// Length units accepted by the length grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px,
    /// 1% of the container width.
    Cw,
    /// 1% of the container height.
    Ch,
    Cmin,
    Cmax,
    /// 1% of the viewport width.
    Vw,
    /// 1% of the viewport height.
    Vh,
    Vmin,
    Vmax,
}

impl LengthUnit {
    /// All units, longest suffix first so suffix matching is unambiguous.
    pub const ALL: [LengthUnit; 9] = [
        LengthUnit::Cmin,
        LengthUnit::Cmax,
        LengthUnit::Vmin,
        LengthUnit::Vmax,
        LengthUnit::Px,
        LengthUnit::Cw,
        LengthUnit::Ch,
        LengthUnit::Vw,
        LengthUnit::Vh,
    ];

    /// The textual suffix of this unit.
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Cw => "cw",
            LengthUnit::Ch => "ch",
            LengthUnit::Cmin => "cmin",
            LengthUnit::Cmax => "cmax",
            LengthUnit::Vw => "vw",
            LengthUnit::Vh => "vh",
            LengthUnit::Vmin => "vmin",
            LengthUnit::Vmax => "vmax",
        }
    }

    /// Split a trailing unit suffix off `input`.
    ///
    /// Returns the numeric portion and the unit, or `None` when no known
    /// suffix is present.
    pub fn split_suffix(input: &str) -> Option<(&str, LengthUnit)> {
        Self::ALL.iter().find_map(|&unit| {
            input
                .strip_suffix(unit.suffix())
                .map(|number| (number, unit))
        })
    }
}

/// Unit tracking for a stored primitive value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Pixels,
    Percent,
    /// A container- or viewport-relative unit, resolved lazily.
    Relative(LengthUnit),
    /// The value is a keyword.
    None,
}

impl From<LengthUnit> for Unit {
    fn from(unit: LengthUnit) -> Self {
        match unit {
            LengthUnit::Px => Unit::Pixels,
            other => Unit::Relative(other),
        }
    }
}

/// Reference sizes for resolving percentages and relative units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UnitContext {
    pub container_width: f64,
    pub container_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl UnitContext {
    /// A context where the container and the viewport share one size.
    pub fn uniform(width: f64, height: f64) -> Self {
        Self {
            container_width: width,
            container_height: height,
            viewport_width: width,
            viewport_height: height,
        }
    }

    /// Same viewport, new container size.
    pub fn with_container(self, width: f64, height: f64) -> Self {
        Self {
            container_width: width,
            container_height: height,
            ..self
        }
    }

    /// Convert `value` in `unit` to pixels.
    pub fn resolve(&self, value: f64, unit: LengthUnit) -> f64 {
        let reference = match unit {
            LengthUnit::Px => return value,
            LengthUnit::Cw => self.container_width,
            LengthUnit::Ch => self.container_height,
            LengthUnit::Cmin => self.container_width.min(self.container_height),
            LengthUnit::Cmax => self.container_width.max(self.container_height),
            LengthUnit::Vw => self.viewport_width,
            LengthUnit::Vh => self.viewport_height,
            LengthUnit::Vmin => self.viewport_width.min(self.viewport_height),
            LengthUnit::Vmax => self.viewport_width.max(self.viewport_height),
        };
        value * reference / 100.0
    }

    /// Convert a tracked `(value, unit)` pair to pixels.
    ///
    /// Percentages resolve against `percent_basis`. Keyword units yield
    /// `None`.
    pub fn to_pixels(&self, value: f64, unit: Unit, percent_basis: f64) -> Option<f64> {
        match unit {
            Unit::Pixels => Some(value),
            Unit::Percent => Some(value * percent_basis / 100.0),
            Unit::Relative(unit) => Some(self.resolve(value, unit)),
            Unit::None => None,
        }
    }
}
