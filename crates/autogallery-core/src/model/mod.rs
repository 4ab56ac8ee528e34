/// Data model for the comparator and its images.
///
/// Re-exports the slider position, bounding box and image pair types.
pub mod bounds;
pub mod pair;
pub mod position;

pub use bounds::BoxBounds;
pub use pair::{ComparisonPair, ImageSource, DEFAULT_AFTER_LABEL, DEFAULT_BEFORE_LABEL};
pub use position::SliderPosition;
