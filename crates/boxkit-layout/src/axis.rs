//! Single-axis distribution for one flex line.
//!
//! [`main_axis`] lays items out in sequence; [`cross_axis`] aligns and
//! stretches each item independently. Both are pure: the same inputs give
//! the same placements, and nothing is retained between calls.

use serde::Deserialize;

/// How an item is sized along an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisItem {
    /// Exact pixel size.
    Fixed(f64),
    /// Takes a share of the available space.
    Auto,
}

/// Offset and size of one item along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisPlacement {
    pub offset: f64,
    pub size: f64,
}

/// Main-axis parameters.
///
/// `justify`, `space` and `space_outer` are fractions in `[0, 1]`;
/// out-of-range values are clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MainAxis {
    pub size: f64,
    pub gap: f64,
    pub padding: f64,
    /// 0 = start, 0.5 = center, 1 = end.
    pub justify: f64,
    /// How much of the free space is spread between and around items.
    pub space: f64,
    /// Share of the spread space that goes to the outer edges.
    pub space_outer: f64,
}

impl MainAxis {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_justify(mut self, justify: f64) -> Self {
        self.justify = justify;
        self
    }

    pub fn with_space(mut self, space: f64, space_outer: f64) -> Self {
        self.space = space;
        self.space_outer = space_outer;
        self
    }
}

/// Cross-axis parameters. `align` and `stretch` are fractions in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CrossAxis {
    pub size: f64,
    pub padding: f64,
    /// 0 = start, 0.5 = center, 1 = end.
    pub align: f64,
    /// Fraction of the leftover space a fixed item grows by.
    pub stretch: f64,
}

impl CrossAxis {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_align(mut self, align: f64) -> Self {
        self.align = align;
        self
    }

    pub fn with_stretch(mut self, stretch: f64) -> Self {
        self.stretch = stretch;
        self
    }
}

/// Clamp a fraction into `[0, 1]`, mapping NaN to 0.
fn fraction(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Distribute `items` along the main axis.
///
/// Auto items share whatever the fixed items leave over (never less than
/// zero). Free space may be negative when fixed items overflow; items then
/// run past the end. With a single item there is no inter-item spacing and
/// only `justify` positions it.
pub fn main_axis(params: &MainAxis, items: &[AxisItem]) -> Vec<AxisPlacement> {
    if items.is_empty() {
        return Vec::new();
    }

    let justify = fraction(params.justify);
    let space = fraction(params.space);
    let space_outer = fraction(params.space_outer);
    let n = items.len() as f64;

    let available = params.size - 2.0 * params.padding - params.gap * (n - 1.0);

    let (fixed_sum, auto_count) = items.iter().fold((0.0, 0usize), |(sum, autos), item| {
        match item {
            AxisItem::Fixed(px) => (sum + px, autos),
            AxisItem::Auto => (sum, autos + 1),
        }
    });
    let auto_size = if auto_count == 0 {
        0.0
    } else {
        ((available - fixed_sum) / auto_count as f64).max(0.0)
    };
    let free_space = available - fixed_sum - auto_count as f64 * auto_size;

    let (outer_spacing, inner_spacing) = if items.len() > 1 {
        let item_spacing = free_space / (n + 1.0) * space;
        let outer = item_spacing * space_outer;
        let inner = item_spacing + item_spacing * 2.0 * (1.0 - space_outer) / (n - 1.0);
        (outer, inner)
    } else {
        (0.0, 0.0)
    };

    let distributed_space = 2.0 * outer_spacing + inner_spacing * (n - 1.0);
    let justified_space = (free_space - distributed_space) * justify;

    let mut offset = params.padding + justified_space + outer_spacing;
    items
        .iter()
        .map(|item| {
            let size = match item {
                AxisItem::Fixed(px) => *px,
                AxisItem::Auto => auto_size,
            };
            let placement = AxisPlacement { offset, size };
            offset += size + inner_spacing + params.gap;
            placement
        })
        .collect()
}

/// Align and stretch each item along the cross axis.
///
/// Fixed items grow toward the available space by `stretch` but never
/// shrink below their own size. Auto items fill the available space.
pub fn cross_axis(params: &CrossAxis, items: &[AxisItem]) -> Vec<AxisPlacement> {
    let align = fraction(params.align);
    let stretch = fraction(params.stretch);
    let available = params.size - 2.0 * params.padding;

    items
        .iter()
        .map(|item| {
            let size = match item {
                AxisItem::Fixed(px) => px + (available - px).max(0.0) * stretch,
                AxisItem::Auto => available.max(0.0),
            };
            AxisPlacement {
                offset: params.padding + (available - size) * align,
                size,
            }
        })
        .collect()
}
