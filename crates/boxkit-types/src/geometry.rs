//! Rectangles in pixel space.

/// A rectangle with position and size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink the rectangle by the given edge amounts.
    ///
    /// Width and height never go below zero.
    pub fn inset(&self, top: f64, right: f64, bottom: f64, left: f64) -> Rect {
        Rect {
            x: self.x + left,
            y: self.y + top,
            width: (self.width - left - right).max(0.0),
            height: (self.height - top - bottom).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0).inset(5.0, 10.0, 5.0, 10.0);
        assert_eq!(r, Rect::new(10.0, 5.0, 80.0, 40.0));
    }

    #[test]
    fn inset_never_negative() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).inset(20.0, 20.0, 20.0, 20.0);
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 0.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_rect() -> impl Strategy<Value = Rect> {
            (-500.0f64..500.0, -500.0f64..500.0, 0.0f64..500.0, 0.0f64..500.0)
                .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
        }

        proptest! {
            #[test]
            fn inset_stays_inside(
                r in arb_rect(),
                top in 0.0f64..300.0, right in 0.0f64..300.0,
                bottom in 0.0f64..300.0, left in 0.0f64..300.0,
            ) {
                let inner = r.inset(top, right, bottom, left);
                prop_assert!(inner.width >= 0.0 && inner.height >= 0.0);
                prop_assert!(inner.width <= r.width && inner.height <= r.height);
                prop_assert!((inner.x - (r.x + left)).abs() < 1e-9);
                prop_assert!((inner.y - (r.y + top)).abs() < 1e-9);
            }

            #[test]
            fn zero_inset_is_identity(r in arb_rect()) {
                prop_assert_eq!(r.inset(0.0, 0.0, 0.0, 0.0), r);
            }
        }
    }
}
