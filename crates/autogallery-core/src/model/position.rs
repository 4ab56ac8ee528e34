//! Slider position -- the percentage of the comparator's width at which the
//! split between the `before` and `after` layers sits.
//!
//! Always within the closed range `[0, 100]`. Non-finite input is rejected
//! at construction so a NaN can never reach the rendered clip.

/// Percentage scalar in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SliderPosition(f32);

impl SliderPosition {
    /// Lower bound of the range.
    pub const MIN: f32 = 0.0;
    /// Upper bound of the range.
    pub const MAX: f32 = 100.0;
    /// Initial position of every freshly mounted comparator.
    pub const CENTRE: Self = Self(50.0);
    /// Fully left: only the `after` layer is visible.
    pub const START: Self = Self(Self::MIN);
    /// Fully right: only the `before` layer is visible.
    pub const END: Self = Self(Self::MAX);

    /// Build a position from a percentage, clamping into range.
    ///
    /// Returns `None` for NaN or infinite input.
    pub fn try_from_percent(percent: f32) -> Option<Self> {
        if percent.is_finite() {
            Some(Self(percent.clamp(Self::MIN, Self::MAX)))
        } else {
            None
        }
    }

    /// Build a position from a `0.0 – 1.0` fraction, clamping into range.
    pub fn try_from_fraction(fraction: f32) -> Option<Self> {
        Self::try_from_percent(fraction * 100.0)
    }

    /// The position as a percentage (`0.0 – 100.0`).
    #[inline]
    pub fn percent(self) -> f32 {
        self.0
    }

    /// The position as a fraction of the width (`0.0 – 1.0`).
    #[inline]
    pub fn fraction(self) -> f32 {
        self.0 / 100.0
    }
}

impl Default for SliderPosition {
    fn default() -> Self {
        Self::CENTRE
    }
}

impl std::fmt::Display for SliderPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
