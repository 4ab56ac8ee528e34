//! Narrow input events consumed by the comparator.
//!
//! Platform pointer and touch events carry far more than the interaction
//! needs. The host reduces them to these types before delivery, so the
//! comparator reads nothing but a horizontal coordinate, a finger id and
//! the result of the handle hit test.

/// Horizontal host coordinate of a pointer or touch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub client_x: f32,
}

impl PointerSample {
    pub fn new(client_x: f32) -> Self {
        Self { client_x }
    }
}

/// Identity of a finger for the lifetime of one touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TouchId(pub u64);

/// Where a touch started relative to the comparator's handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchTarget {
    /// On the handle bar, its grip, or anything inside them.
    Handle,
    /// Anywhere else, including the image area.
    Elsewhere,
}

/// Touch events observed at document level while a drag is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocumentTouch {
    Move { id: TouchId, sample: PointerSample },
    End { id: TouchId },
    Cancel { id: TouchId },
}

impl DocumentTouch {
    pub fn id(&self) -> TouchId {
        match *self {
            Self::Move { id, .. } | Self::End { id } | Self::Cancel { id } => id,
        }
    }
}
