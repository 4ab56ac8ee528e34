/// Gallery grid -- one card per work example.
///
/// Single-image items show their photo and open the lightbox on click.
/// Before/after items embed a comparator; since hovering scrubs the split,
/// those cards open the lightbox from a button under the image instead.
use crate::state::{AppState, Surface};
use crate::theme::AutoGalleryTheme;
use crate::widgets;
use autogallery_core::catalogue::{GalleryItem, ItemKind};
use egui::{RichText, Sense, Ui};

/// Cards never get narrower than this before the grid drops a column.
const MIN_CARD_WIDTH: f32 = 320.0;
const MAX_COLUMNS: usize = 3;
const CARD_SPACING: f32 = 16.0;

/// Draw the gallery.
pub fn gallery_panel(ui: &mut Ui, state: &mut AppState, theme: &AutoGalleryTheme) {
    // The grid is inert behind an open lightbox.
    if state.lightbox.is_open() {
        ui.disable();
    }

    ui.add_space(12.0);
    ui.label(
        RichText::new(&state.catalogue.title)
            .size(28.0)
            .strong()
            .color(theme.text_primary),
    );
    ui.label(
        RichText::new(
            "Hover over a before/after photo to compare, or drag the red handle on a touch screen.",
        )
        .size(13.0)
        .color(theme.text_muted),
    );
    ui.add_space(16.0);

    let len = state.catalogue.len();
    if len == 0 {
        ui.label(
            RichText::new("No work examples yet.")
                .size(14.0)
                .color(theme.text_secondary),
        );
        return;
    }

    let columns = column_count(ui.available_width());
    let card_width =
        (ui.available_width() - CARD_SPACING * (columns - 1) as f32) / columns as f32;

    for row_start in (0..len).step_by(columns) {
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = CARD_SPACING;
            for index in row_start..(row_start + columns).min(len) {
                ui.vertical(|ui| {
                    ui.set_width(card_width);
                    card(ui, state, index, card_width, theme);
                });
            }
        });
        ui.add_space(CARD_SPACING);
    }
}

/// Columns that fit in `width` without a card going below the minimum.
fn column_count(width: f32) -> usize {
    let fit = ((width + CARD_SPACING) / (MIN_CARD_WIDTH + CARD_SPACING)).floor();
    if fit.is_finite() && fit >= 1.0 {
        (fit as usize).min(MAX_COLUMNS)
    } else {
        1
    }
}

fn card(ui: &mut Ui, state: &mut AppState, index: usize, width: f32, theme: &AutoGalleryTheme) {
    let Some(item) = state.catalogue.get(index).cloned() else {
        return;
    };
    let size = egui::vec2(width, state.config.card_height);
    let mut open = false;

    match &item.kind {
        ItemKind::Single { image } => {
            let (rect, response) = ui.allocate_exact_size(size, Sense::click());
            if ui.is_rect_visible(rect) {
                ui.painter().rect_filled(rect, 0.0, theme.surface);
                egui::Image::new(image.uri()).paint_at(ui, rect);
            }
            open |= response
                .on_hover_cursor(egui::CursorIcon::ZoomIn)
                .on_hover_text(item.title.as_str())
                .clicked();
        }
        ItemKind::BeforeAfter { .. } => {
            if let Some(comparator) = state.comparator_for(index, Surface::Grid) {
                widgets::comparator::comparator(ui, comparator, size, theme);
            }
        }
    }

    ui.add_space(6.0);
    card_caption(ui, &item, theme);
    if ui.small_button("🔍 View larger").clicked() {
        open = true;
    }

    if open && state.open_lightbox(index) {
        tracing::debug!(item = %item.id, "opening lightbox");
    }
}

/// Kind tag, date, title and description under a card image.
pub(crate) fn card_caption(ui: &mut Ui, item: &GalleryItem, theme: &AutoGalleryTheme) {
    ui.horizontal(|ui| {
        let (tag, colour) = if item.is_before_after() {
            ("BEFORE / AFTER", theme.tag_pair)
        } else {
            ("PHOTO", theme.tag_single)
        };
        ui.label(RichText::new(tag).size(10.0).strong().color(colour));
        if let Some(date) = item.date {
            ui.label(
                RichText::new(date.format("%-d %B %Y").to_string())
                    .size(11.0)
                    .color(theme.text_muted),
            );
        }
    });
    ui.label(
        RichText::new(&item.title)
            .size(16.0)
            .strong()
            .color(theme.text_primary),
    );
    if !item.description.is_empty() {
        ui.label(
            RichText::new(&item.description)
                .size(12.0)
                .color(theme.text_secondary),
        );
    }
}
