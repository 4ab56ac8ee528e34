/// AutoGallery GUI -- egui-based desktop frontend.
///
/// This crate contains all UI code. The comparator state machine, the
/// catalogue and the configuration live in `autogallery-core`.
pub mod app;
pub mod icon;
pub mod panels;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{AutoGalleryApp, AutoGalleryState};
