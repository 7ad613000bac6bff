//! Four-edge offsets with read-time sign enforcement.
//!
//! Unlike the other primitives, a `Frame` stores whatever it is given.
//! When negative values are disallowed, a negative edge reads back as
//! zero; flipping the toggle exposes the stored value again.

use boxkit_types::{BoxkitError, Result};

use crate::lenient::parse_length;

/// One side of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frame {
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
    non_negative: bool,
}

impl Frame {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            non_negative: false,
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Parse a 1-4 value shorthand (`"4"`, `"4 8"`, `"4 8 2"`,
    /// `"4 8 2 6"`) in top/right/bottom/left order.
    ///
    /// Percentages resolve against `percent_basis`.
    pub fn parse(input: &str, percent_basis: f64) -> Result<Self> {
        let values = input
            .split_whitespace()
            .map(|part| {
                parse_length(part, percent_basis)
                    .ok_or_else(|| BoxkitError::invalid(part, "length or percentage"))
            })
            .collect::<Result<Vec<f64>>>()?;
        match values[..] {
            [all] => Ok(Self::uniform(all)),
            [vertical, horizontal] => Ok(Self::new(vertical, horizontal, vertical, horizontal)),
            [top, horizontal, bottom] => Ok(Self::new(top, horizontal, bottom, horizontal)),
            [top, right, bottom, left] => Ok(Self::new(top, right, bottom, left)),
            _ => Err(BoxkitError::invalid(input, "1 to 4 lengths")),
        }
    }

    pub fn set_non_negative(&mut self, non_negative: bool) {
        self.non_negative = non_negative;
    }

    pub fn is_non_negative(&self) -> bool {
        self.non_negative
    }

    fn read(&self, stored: f64) -> f64 {
        if self.non_negative && stored < 0.0 {
            0.0
        } else {
            stored
        }
    }

    pub fn get(&self, edge: Edge) -> f64 {
        self.read(self.stored(edge))
    }

    /// The value as written, ignoring the sign toggle.
    pub fn stored(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    pub fn set(&mut self, edge: Edge, value: f64) {
        match edge {
            Edge::Top => self.top = value,
            Edge::Right => self.right = value,
            Edge::Bottom => self.bottom = value,
            Edge::Left => self.left = value,
        }
    }

    pub fn top(&self) -> f64 {
        self.get(Edge::Top)
    }

    pub fn right(&self) -> f64 {
        self.get(Edge::Right)
    }

    pub fn bottom(&self) -> f64 {
        self.get(Edge::Bottom)
    }

    pub fn left(&self) -> f64 {
        self.get(Edge::Left)
    }

    /// Left + right, as read.
    pub fn horizontal(&self) -> f64 {
        self.left() + self.right()
    }

    /// Top + bottom, as read.
    pub fn vertical(&self) -> f64 {
        self.top() + self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_stored_as_is() {
        let frame = Frame::new(-4.0, 2.0, 0.0, 1.0);
        assert_eq!(frame.top(), -4.0);
        assert_eq!(frame.stored(Edge::Top), -4.0);
    }

    #[test]
    fn read_time_clamp_follows_toggle() {
        let mut frame = Frame::new(-4.0, -2.0, 3.0, 1.0);
        frame.set_non_negative(true);
        assert_eq!(frame.top(), 0.0);
        assert_eq!(frame.right(), 0.0);
        assert_eq!(frame.bottom(), 3.0);
        // Storage is untouched.
        assert_eq!(frame.stored(Edge::Top), -4.0);
        frame.set_non_negative(false);
        assert_eq!(frame.top(), -4.0);
    }

    #[test]
    fn write_after_toggle_is_not_clamped_in_storage() {
        let mut frame = Frame::default();
        frame.set_non_negative(true);
        frame.set(Edge::Left, -10.0);
        assert_eq!(frame.left(), 0.0);
        assert_eq!(frame.stored(Edge::Left), -10.0);
    }

    #[test]
    fn sums_use_read_values() {
        let mut frame = Frame::new(5.0, -3.0, 5.0, 7.0);
        assert_eq!(frame.horizontal(), 4.0);
        frame.set_non_negative(true);
        assert_eq!(frame.horizontal(), 7.0);
        assert_eq!(frame.vertical(), 10.0);
    }

    #[test]
    fn parse_shorthand_forms() {
        assert_eq!(Frame::parse("4", 0.0).unwrap(), Frame::uniform(4.0));
        assert_eq!(
            Frame::parse("4 8", 0.0).unwrap(),
            Frame::new(4.0, 8.0, 4.0, 8.0)
        );
        assert_eq!(
            Frame::parse("1px 2px 3px", 0.0).unwrap(),
            Frame::new(1.0, 2.0, 3.0, 2.0)
        );
        assert_eq!(
            Frame::parse("1 2 3 10%", 200.0).unwrap(),
            Frame::new(1.0, 2.0, 3.0, 20.0)
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Frame::parse("", 0.0).is_err());
        assert!(Frame::parse("1 2 3 4 5", 0.0).is_err());
        assert!(Frame::parse("1 wide", 0.0).is_err());
    }
}
