/// Laid-out bounding box of a comparator in host (screen) coordinates.
///
/// The box is the only geometry the interaction model needs: the slider
/// position is derived from a horizontal coordinate relative to `left`.
use super::position::SliderPosition;

/// Bounding box of a mounted comparator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BoxBounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge in host coordinates.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge in host coordinates.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// `true` if no meaningful position can be derived from this box:
    /// zero, negative or non-finite width, or a non-finite origin.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.width > 0.0 && self.left.is_finite())
    }

    /// Slider position for a horizontal host coordinate.
    ///
    /// The offset from the left edge is clamped to `[0, width]` before being
    /// converted to a percentage, so points outside the box map to 0 or 100.
    /// Returns `None` for a degenerate box or a non-finite coordinate so the
    /// caller can skip the update instead of producing NaN or infinity.
    pub fn position_at(&self, client_x: f32) -> Option<SliderPosition> {
        if self.is_degenerate() || !client_x.is_finite() {
            return None;
        }
        let x = (client_x - self.left).clamp(0.0, self.width);
        SliderPosition::try_from_percent(x * 100.0 / self.width)
    }

    /// Host x coordinate of the split for `position`.
    pub fn x_at(&self, position: SliderPosition) -> f32 {
        self.left + self.width * position.fraction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn position_inside_box_is_proportional() {
        let b = BoxBounds::new(0.0, 0.0, 400.0, 300.0);
        assert!(approx(b.position_at(100.0).unwrap().percent(), 25.0));
        assert!(approx(b.position_at(0.0).unwrap().percent(), 0.0));
        assert!(approx(b.position_at(400.0).unwrap().percent(), 100.0));
    }

    #[test]
    fn position_is_relative_to_left_edge() {
        let b = BoxBounds::new(250.0, 40.0, 200.0, 100.0);
        assert!(approx(b.position_at(300.0).unwrap().percent(), 25.0));
    }

    #[test]
    fn position_outside_box_clamps() {
        let b = BoxBounds::new(0.0, 0.0, 400.0, 300.0);
        assert_eq!(b.position_at(500.0), Some(SliderPosition::END));
        assert_eq!(b.position_at(-30.0), Some(SliderPosition::START));
    }

    #[test]
    fn every_sample_stays_in_range() {
        let b = BoxBounds::new(-17.5, 0.0, 333.0, 10.0);
        let mut x = -500.0;
        while x < 900.0 {
            let p = b.position_at(x).unwrap().percent();
            assert!((0.0..=100.0).contains(&p), "x={x} gave {p}");
            x += 7.25;
        }
    }

    #[test]
    fn degenerate_box_yields_nothing() {
        assert!(BoxBounds::new(0.0, 0.0, 0.0, 100.0).position_at(10.0).is_none());
        assert!(BoxBounds::new(0.0, 0.0, -5.0, 100.0).position_at(10.0).is_none());
        assert!(BoxBounds::new(0.0, 0.0, f32::NAN, 100.0).position_at(10.0).is_none());
        assert!(BoxBounds::new(f32::INFINITY, 0.0, 10.0, 100.0).position_at(10.0).is_none());
    }

    #[test]
    fn non_finite_coordinate_yields_nothing() {
        let b = BoxBounds::new(0.0, 0.0, 400.0, 300.0);
        assert!(b.position_at(f32::NAN).is_none());
    }

    #[test]
    fn x_at_maps_back_to_host_coordinates() {
        let b = BoxBounds::new(100.0, 0.0, 200.0, 50.0);
        assert!(approx(b.x_at(SliderPosition::CENTRE), 200.0));
        assert!(approx(b.x_at(SliderPosition::END), 300.0));
    }
}
