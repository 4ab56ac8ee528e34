/// Bottom status bar -- catalogue summary and live interaction state.
use crate::state::AppState;
use crate::theme::AutoGalleryTheme;
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState, theme: &AutoGalleryTheme) {
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{} items", state.catalogue.len()))
                .size(12.0)
                .color(color_normal),
        );

        ui.separator();

        ui.label(
            egui::RichText::new(format!(
                "{} before/after",
                state.catalogue.comparison_count()
            ))
            .size(12.0)
            .color(color_accent),
        );

        ui.separator();

        let origin = truncate_middle(&state.catalogue_origin.to_string(), 60);
        ui.label(
            egui::RichText::new(format!("Source: {origin}"))
                .size(11.0)
                .color(color_weak),
        );

        let drags = state.active_drags();
        if drags > 0 {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("✋ {drags} dragging"))
                    .size(12.0)
                    .color(theme.success),
            );
        }

        if state.scroll_locked() {
            ui.separator();
            ui.label(
                egui::RichText::new("🔒 Scroll locked")
                    .size(12.0)
                    .color(color_weak),
            );
        }

        if let Some(ref error) = state.load_error {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("⚠ {}", truncate_middle(error, 80)))
                    .size(12.0)
                    .color(theme.warning),
            )
            .on_hover_text(error.as_str());
        }
    });
}

/// Shorten `text` to at most `max_chars` characters, replacing the middle
/// with "..." if needed.
fn truncate_middle(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    let half = (max_chars.saturating_sub(3)) / 2;
    let head: String = text.chars().take(half).collect();
    let tail: String = text.chars().skip(count - half).collect();
    format!("{head}...{tail}")
}
