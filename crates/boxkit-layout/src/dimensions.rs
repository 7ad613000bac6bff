//! Dimension resolution: basis, min/max bounds and aspect-ratio coupling.
//!
//! Resolution is a pull model. A box's [`Dimensions`] only change when
//! [`Dimensions::compute`] runs; mutating a property does not invalidate
//! anything by itself.

use boxkit_types::UnitContext;
use boxkit_values::{
    AspectKeyword, AspectRatio, ConstraintKeyword, Size, SizeConstraint, SizeKeyword,
};

/// Result of resolving one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisResolution {
    pub value: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Clamp `basis` into `[min, max]`, where any of the three may be absent.
///
/// When both bounds are present and inverted, `min` wins and the
/// effective max is raised to `min`.
pub fn resolve_axis(basis: Option<f64>, min: Option<f64>, max: Option<f64>) -> AxisResolution {
    match (basis, min, max) {
        (Some(basis), Some(min), Some(max)) => AxisResolution {
            value: Some(basis.min(max).max(min)),
            min: Some(min),
            max: Some(min.max(max)),
        },
        (Some(basis), Some(min), None) => AxisResolution {
            value: Some(min.max(basis)),
            min: Some(min),
            max: None,
        },
        (Some(basis), None, Some(max)) => AxisResolution {
            value: Some(max.min(basis)),
            min: None,
            max: Some(max),
        },
        (Some(basis), None, None) => AxisResolution {
            value: Some(basis),
            min: None,
            max: None,
        },
        (None, Some(min), Some(max)) => AxisResolution {
            value: None,
            min: Some(min),
            max: Some(min.max(max)),
        },
        (None, min, max) => AxisResolution {
            value: None,
            min,
            max,
        },
    }
}

/// Declared sizing properties of a box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizingProps {
    pub width: Size,
    pub height: Size,
    pub aspect_ratio: AspectRatio,
    pub min_width: SizeConstraint,
    pub max_width: SizeConstraint,
    pub min_height: SizeConstraint,
    pub max_height: SizeConstraint,
}

/// Sizing properties reduced to pixels; `None` means unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizingInputs {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub aspect_ratio: Option<f64>,
    pub min_width: Option<f64>,
    pub max_width: Option<f64>,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
}

impl SizingInputs {
    /// Reduce declared properties to pixels.
    ///
    /// Width-axis percentages resolve against the container width,
    /// height-axis ones against the container height. `inherit` takes the
    /// parent's computed value for the same field; content-based keywords
    /// resolve to `None`.
    pub fn resolve(props: &SizingProps, ctx: &UnitContext, parent: Option<&Dimensions>) -> Self {
        let inherited = |field: fn(&Dimensions) -> Option<f64>| parent.and_then(field);
        let size = |declared: &Size, basis: f64, field: fn(&Dimensions) -> Option<f64>| {
            if declared.is(SizeKeyword::Inherit) {
                inherited(field)
            } else {
                declared.to_pixels(basis, ctx)
            }
        };
        let bound = |declared: &SizeConstraint, basis: f64, field: fn(&Dimensions) -> Option<f64>| {
            if declared.is(ConstraintKeyword::Inherit) {
                inherited(field)
            } else {
                declared.to_pixels(basis, ctx)
            }
        };
        let aspect_ratio = match props.aspect_ratio {
            AspectRatio::Ratio(r) => Some(r),
            AspectRatio::Keyword(AspectKeyword::Inherit) => inherited(Dimensions::aspect_ratio),
            AspectRatio::Keyword(AspectKeyword::Auto) => None,
        };
        let (cw, ch) = (ctx.container_width, ctx.container_height);
        Self {
            width: size(&props.width, cw, Dimensions::width),
            height: size(&props.height, ch, Dimensions::height),
            aspect_ratio,
            min_width: bound(&props.min_width, cw, Dimensions::min_width),
            max_width: bound(&props.max_width, cw, Dimensions::max_width),
            min_height: bound(&props.min_height, ch, Dimensions::min_height),
            max_height: bound(&props.max_height, ch, Dimensions::max_height),
        }
    }
}

/// Computed dimensions of a box. Read-only outside of [`compute`].
///
/// [`compute`]: Dimensions::compute
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dimensions {
    width: Option<f64>,
    height: Option<f64>,
    aspect_ratio: Option<f64>,
    min_width: Option<f64>,
    max_width: Option<f64>,
    min_height: Option<f64>,
    max_height: Option<f64>,
}

impl Dimensions {
    /// Recompute from pixel inputs.
    ///
    /// If exactly one axis has no basis and an aspect ratio is set, the
    /// other axis is resolved first and seeds the missing basis
    /// (`width = height * ratio`, `height = width / ratio`). This happens
    /// once; two missing bases stay missing.
    pub fn compute(&mut self, inputs: &SizingInputs) {
        let resolve_width = |basis| resolve_axis(basis, inputs.min_width, inputs.max_width);
        let resolve_height = |basis| resolve_axis(basis, inputs.min_height, inputs.max_height);

        let (width, height) = match (inputs.width, inputs.height, inputs.aspect_ratio) {
            (None, Some(h), Some(ratio)) => {
                let height = resolve_height(Some(h));
                let width = resolve_width(height.value.map(|h| h * ratio));
                (width, height)
            },
            (Some(w), None, Some(ratio)) => {
                let width = resolve_width(Some(w));
                let height = resolve_height(width.value.map(|w| w / ratio));
                (width, height)
            },
            (w, h, _) => (resolve_width(w), resolve_height(h)),
        };

        *self = Self {
            width: width.value,
            height: height.value,
            aspect_ratio: inputs.aspect_ratio,
            min_width: width.min,
            max_width: width.max,
            min_height: height.min,
            max_height: height.max,
        };
        log::debug!("computed dimensions: {self:?}");
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn aspect_ratio(&self) -> Option<f64> {
        self.aspect_ratio
    }

    pub fn min_width(&self) -> Option<f64> {
        self.min_width
    }

    pub fn max_width(&self) -> Option<f64> {
        self.max_width
    }

    pub fn min_height(&self) -> Option<f64> {
        self.min_height
    }

    pub fn max_height(&self) -> Option<f64> {
        self.max_height
    }
}
