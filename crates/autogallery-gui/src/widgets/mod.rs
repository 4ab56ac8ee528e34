/// UI widgets for AutoGallery.

pub mod comparator;
pub mod status_bar;
pub mod toolbar;
