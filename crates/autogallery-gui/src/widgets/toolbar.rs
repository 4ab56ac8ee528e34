/// Top action bar -- branding, catalogue reload, theme toggle and about.
use crate::state::AppState;
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("🔧 AutoGallery")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        ui.label(
            egui::RichText::new(&state.catalogue.title)
                .size(14.0)
                .color(ui.visuals().text_color()),
        );

        ui.separator();

        // Reload re-reads the manifest from disk; with no manifest it
        // restores the built-in samples. Disabled mid-drag so a drag is
        // never torn down by the toolbar.
        let can_reload = state.active_drags() == 0;
        let reload_tip = match &state.config.catalogue_path {
            Some(path) => format!("Reload {}", path.display()),
            None => "Restore the built-in samples".to_string(),
        };
        if ui
            .add_enabled(can_reload, egui::Button::new("🔄 Reload"))
            .on_hover_text(reload_tip)
            .clicked()
        {
            if let Err(e) = state.reload_catalogue() {
                tracing::warn!("{e:#}");
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About AutoGallery").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let dark = state.theme_mode.is_dark();
            let theme_label = if dark { "☀" } else { "🌙" };
            let theme_tip = if dark {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.theme_mode.toggle();
            }
        });
    });
}
