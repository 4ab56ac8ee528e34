/// Layout panels for AutoGallery.

pub mod gallery_panel;
pub mod lightbox_panel;
