/// Render geometry: the reveal clip of the `before` layer and the handle.
///
/// The `after` image is the full-size base layer. The `before` image is
/// laid out identically on top but only the polygon
/// `(0,0) (p,0) (p,100) (0,100)` is visible, `p` being the slider position
/// in percent. The handle sits on the same vertical line.
use crate::model::{BoxBounds, SliderPosition};

/// Width of the handle bar in host pixels.
pub const HANDLE_BAR_WIDTH: f32 = 4.0;

/// Radius of the circular grip in host pixels.
pub const HANDLE_GRIP_RADIUS: f32 = 20.0;

/// Visible region of the `before` layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealClip {
    position: SliderPosition,
}

impl RevealClip {
    pub fn new(position: SliderPosition) -> Self {
        Self { position }
    }

    /// Clip polygon in percent of the box, clockwise from the top-left.
    pub fn polygon(&self) -> [(f32, f32); 4] {
        let p = self.position.percent();
        [(0.0, 0.0), (p, 0.0), (p, 100.0), (0.0, 100.0)]
    }

    /// Right edge of the visible region as a texture `u` coordinate.
    pub fn uv_right(&self) -> f32 {
        self.position.fraction()
    }

    /// The visible `before` rectangle in host coordinates.
    pub fn visible_before(&self, bounds: &BoxBounds) -> BoxBounds {
        BoxBounds::new(
            bounds.left,
            bounds.top,
            bounds.width * self.position.fraction(),
            bounds.height,
        )
    }
}

/// Laid-out handle: a full-height bar plus a circular grip at mid-height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleGeometry {
    pub split_x: f32,
    pub top: f32,
    pub bottom: f32,
    pub bar_half_width: f32,
    pub grip_centre: (f32, f32),
    pub grip_radius: f32,
}

impl HandleGeometry {
    pub fn layout(bounds: &BoxBounds, position: SliderPosition) -> Self {
        let split_x = bounds.x_at(position);
        Self {
            split_x,
            top: bounds.top,
            bottom: bounds.bottom(),
            bar_half_width: HANDLE_BAR_WIDTH / 2.0,
            grip_centre: (split_x, bounds.top + bounds.height / 2.0),
            grip_radius: HANDLE_GRIP_RADIUS,
        }
    }

    /// `true` if the point lies on the bar or inside the grip.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let on_bar = (x - self.split_x).abs() <= self.bar_half_width
            && y >= self.top
            && y <= self.bottom;
        let (cx, cy) = self.grip_centre;
        let dx = x - cx;
        let dy = y - cy;
        on_bar || dx * dx + dy * dy <= self.grip_radius * self.grip_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(p: f32) -> SliderPosition {
        SliderPosition::try_from_percent(p).unwrap()
    }

    #[test]
    fn polygon_tracks_position() {
        let clip = RevealClip::new(pos(30.0));
        assert_eq!(
            clip.polygon(),
            [(0.0, 0.0), (30.0, 0.0), (30.0, 100.0), (0.0, 100.0)]
        );
        assert_eq!(clip.uv_right(), 0.3);
    }

    #[test]
    fn visible_before_spans_left_of_split() {
        let b = BoxBounds::new(10.0, 20.0, 400.0, 300.0);
        let v = RevealClip::new(pos(25.0)).visible_before(&b);
        assert_eq!(v, BoxBounds::new(10.0, 20.0, 100.0, 300.0));
    }

    #[test]
    fn handle_aligns_with_clip_edge() {
        let b = BoxBounds::new(0.0, 0.0, 200.0, 100.0);
        let h = HandleGeometry::layout(&b, pos(20.0));
        let clip = RevealClip::new(pos(20.0)).visible_before(&b);
        assert_eq!(h.split_x, clip.right());
        assert_eq!(h.grip_centre, (40.0, 50.0));
    }

    #[test]
    fn hit_test_covers_bar_and_grip() {
        let b = BoxBounds::new(0.0, 0.0, 200.0, 100.0);
        let h = HandleGeometry::layout(&b, SliderPosition::CENTRE);
        assert!(h.contains(100.0, 5.0), "bar near the top");
        assert!(h.contains(101.5, 95.0), "bar near the bottom");
        assert!(h.contains(115.0, 50.0), "inside the grip");
        assert!(!h.contains(115.0, 5.0), "beside the bar, away from the grip");
        assert!(!h.contains(40.0, 50.0), "image area");
        assert!(!h.contains(100.0, 120.0), "below the box");
    }
}
