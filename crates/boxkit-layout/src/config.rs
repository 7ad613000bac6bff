//! Flex line parameters, loadable from TOML.

use serde::Deserialize;

use boxkit_types::{BoxkitError, Result};

use crate::axis::{CrossAxis, MainAxis};

/// Direction of the main axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

/// Parameters for laying out one flex line.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlexParams {
    pub direction: FlexDirection,
    pub gap: f64,
    /// Overrides the container's own padding when set.
    pub padding: Option<f64>,
    pub justify: f64,
    pub align: f64,
    pub space: f64,
    pub space_outer: f64,
    pub stretch: f64,
}

impl Default for FlexParams {
    fn default() -> Self {
        Self {
            direction: FlexDirection::Row,
            gap: 0.0,
            padding: None,
            justify: 0.0,
            align: 0.0,
            space: 0.0,
            space_outer: 0.0,
            stretch: 0.0,
        }
    }
}

impl FlexParams {
    pub fn row() -> Self {
        Self::default()
    }

    pub fn column() -> Self {
        Self {
            direction: FlexDirection::Column,
            ..Self::default()
        }
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn with_justify(mut self, justify: f64) -> Self {
        self.justify = justify;
        self
    }

    pub fn with_align(mut self, align: f64) -> Self {
        self.align = align;
        self
    }

    pub fn with_space(mut self, space: f64, space_outer: f64) -> Self {
        self.space = space;
        self.space_outer = space_outer;
        self
    }

    pub fn with_stretch(mut self, stretch: f64) -> Self {
        self.stretch = stretch;
        self
    }

    /// Parse from TOML and validate.
    pub fn from_toml(source: &str) -> Result<Self> {
        let params: Self = toml::from_str(source)?;
        params.validate()?;
        Ok(params)
    }

    /// Reject fractions outside `[0, 1]` and negative lengths.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("justify", self.justify),
            ("align", self.align),
            ("space", self.space),
            ("space_outer", self.space_outer),
            ("stretch", self.stretch),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(BoxkitError::Config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.gap.is_nan() || self.gap < 0.0 {
            return Err(BoxkitError::Config(format!(
                "gap must be non-negative, got {}",
                self.gap
            )));
        }
        if let Some(padding) = self.padding.filter(|p| p.is_nan() || *p < 0.0) {
            return Err(BoxkitError::Config(format!(
                "padding must be non-negative, got {padding}"
            )));
        }
        Ok(())
    }

    /// Main-axis parameters for a container of `size` with `padding`.
    pub fn main_axis(&self, size: f64, padding: f64) -> MainAxis {
        MainAxis {
            size,
            gap: self.gap,
            padding,
            justify: self.justify,
            space: self.space,
            space_outer: self.space_outer,
        }
    }

    /// Cross-axis parameters for a container of `size` with `padding`.
    pub fn cross_axis(&self, size: f64, padding: f64) -> CrossAxis {
        CrossAxis {
            size,
            padding,
            align: self.align,
            stretch: self.stretch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_start_aligned_row() {
        let params = FlexParams::default();
        assert_eq!(params.direction, FlexDirection::Row);
        assert_eq!(params.padding, None);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn from_toml_full() {
        let params = FlexParams::from_toml(
            r#"
            direction = "column"
            gap = 4.0
            padding = 8.0
            justify = 0.5
            align = 1.0
            space = 1.0
            space_outer = 0.5
            stretch = 0.25
            "#,
        )
        .unwrap();
        assert_eq!(
            params,
            FlexParams::column()
                .with_gap(4.0)
                .with_padding(8.0)
                .with_justify(0.5)
                .with_align(1.0)
                .with_space(1.0, 0.5)
                .with_stretch(0.25)
        );
    }

    #[test]
    fn from_toml_partial_uses_defaults() {
        let params = FlexParams::from_toml("gap = 2.0").unwrap();
        assert_eq!(params, FlexParams::row().with_gap(2.0));
    }

    #[test]
    fn from_toml_rejects_out_of_range() {
        let err = FlexParams::from_toml("justify = 1.5").unwrap_err();
        assert!(format!("{err}").contains("justify must be within [0, 1]"));
        assert!(FlexParams::from_toml("gap = -1.0").is_err());
        assert!(FlexParams::from_toml("padding = -3.0").is_err());
    }

    #[test]
    fn from_toml_rejects_bad_syntax() {
        let err = FlexParams::from_toml("direction = \"diagonal\"").unwrap_err();
        assert!(matches!(err, BoxkitError::TomlParse(_)));
    }

    #[test]
    fn axis_params_carry_fractions() {
        let params = FlexParams::row().with_gap(3.0).with_justify(0.5).with_stretch(1.0);
        let main = params.main_axis(120.0, 6.0);
        assert_eq!(main.gap, 3.0);
        assert_eq!(main.justify, 0.5);
        assert_eq!(main.padding, 6.0);
        let cross = params.cross_axis(40.0, 6.0);
        assert_eq!(cross.stretch, 1.0);
        assert_eq!(cross.size, 40.0);
    }
}
