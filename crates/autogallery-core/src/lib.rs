/// AutoGallery Core -- comparator interaction model, gallery catalogue and
/// configuration.
///
/// This crate contains all behaviour with zero UI dependencies, so the
/// comparator state machine can be driven and tested without a window.
///
/// # Modules
///
/// - [`model`] -- Slider position, bounding box and image pair types.
/// - [`compare`] -- The before/after comparator state machine and geometry.
/// - [`host`] -- Document-wide resources: scroll lock and touch listeners.
/// - [`catalogue`] -- Work-example gallery content (built-in or JSON).
/// - [`lightbox`] -- Full-size viewer navigation.
/// - [`config`] -- Application configuration.
pub mod catalogue;
pub mod compare;
pub mod config;
pub mod host;
pub mod lightbox;
pub mod model;
