/// Lightbox window -- one work example at full size, with navigation.
///
/// Escape / arrow keys are handled by the app; this panel provides the
/// on-screen equivalents.
use crate::panels::gallery_panel::card_caption;
use crate::state::{AppState, Surface};
use crate::theme::AutoGalleryTheme;
use crate::widgets;
use autogallery_core::catalogue::ItemKind;
use egui::RichText;

/// Largest width the lightbox grows to.
const MAX_WIDTH: f32 = 1200.0;

enum LightboxAction {
    Close,
    Prev,
    Next,
}

/// Draw the lightbox if it is open.
pub fn lightbox_panel(ctx: &egui::Context, state: &mut AppState, theme: &AutoGalleryTheme) {
    let Some(index) = state.lightbox.active() else {
        return;
    };
    let Some(item) = state.catalogue.get(index).cloned() else {
        state.close_lightbox();
        return;
    };
    let len = state.catalogue.len();

    let screen = ctx.screen_rect();
    let width = (screen.width() * 0.85).min(MAX_WIDTH);
    let image_height = (screen.height() * 0.65).max(200.0);

    let mut open = true;
    let mut action = None;

    egui::Window::new(RichText::new(&item.title).strong())
        .id(egui::Id::new("lightbox"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([width, 0.0])
        .show(ctx, |ui| {
            let size = egui::vec2(ui.available_width(), image_height);
            match &item.kind {
                ItemKind::Single { image } => {
                    ui.vertical_centered(|ui| {
                        ui.add(egui::Image::new(image.uri()).fit_to_exact_size(size));
                    });
                }
                ItemKind::BeforeAfter { .. } => {
                    if let Some(comparator) = state.comparator_for(index, Surface::Lightbox) {
                        widgets::comparator::comparator(ui, comparator, size, theme);
                    }
                }
            }

            ui.add_space(8.0);
            card_caption(ui, &item, theme);
            ui.add_space(8.0);
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("◀ Previous").on_hover_text("←").clicked() {
                    action = Some(LightboxAction::Prev);
                }
                ui.label(
                    RichText::new(format!("{} / {}", index + 1, len))
                        .size(12.0)
                        .color(theme.text_muted),
                );
                if ui.button("Next ▶").on_hover_text("→").clicked() {
                    action = Some(LightboxAction::Next);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✖ Close").on_hover_text("Esc").clicked() {
                        action = Some(LightboxAction::Close);
                    }
                });
            });
        });

    if !open {
        action = Some(LightboxAction::Close);
    }
    match action {
        Some(LightboxAction::Close) => {
            state.close_lightbox();
        }
        Some(LightboxAction::Prev) => {
            state.lightbox_prev();
        }
        Some(LightboxAction::Next) => {
            state.lightbox_next();
        }
        None => {}
    }
}
