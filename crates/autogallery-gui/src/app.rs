/// Main `eframe::App` implementation for AutoGallery.
///
/// This is the top-level UI layout that composes all panels and widgets,
/// and the place where document-level input (touch moves/releases and the
/// lightbox keys) is routed into the state.
use crate::panels;
use crate::state::AppState;
use crate::theme::AutoGalleryTheme;
use crate::widgets;
use autogallery_core::compare::DocumentTouch;
use autogallery_core::config::AppConfig;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so the catalogue
/// is loaded and validated before the OS window is created, and the first
/// frame renders the gallery immediately.
pub struct AutoGalleryState {
    pub(crate) inner: AppState,
}

impl AutoGalleryState {
    /// Load the configured catalogue. Call this before `eframe::run_native`.
    pub fn build(config: AppConfig) -> Self {
        let state = AppState::new(config);
        tracing::info!(
            items = state.catalogue.len(),
            origin = %state.catalogue_origin,
            "gallery ready"
        );
        Self { inner: state }
    }
}

/// The AutoGallery application.
pub struct AutoGalleryApp {
    state: AppState,
}

impl AutoGalleryApp {
    /// Create a new application instance from pre-built state.
    ///
    /// The state should have been constructed by [`AutoGalleryState::build()`]
    /// *before* `eframe::run_native` is called.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: AutoGalleryState) -> Self {
        // Image loaders for `file://` and `https://` URIs.
        egui_extras::install_image_loaders(&cc.egui_ctx);

        AutoGalleryTheme::for_mode(state.inner.theme_mode).apply(&cc.egui_ctx);

        Self { state: state.inner }
    }
}

impl eframe::App for AutoGalleryApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        // Called every frame so that toggling the theme takes effect
        // immediately on the next rendered frame.
        let theme = AutoGalleryTheme::for_mode(self.state.theme_mode);
        theme.apply(ctx);

        // ── Lightbox keys ─────────────────────────────────────────────────
        if self.state.lightbox.is_open() {
            let (escape, left, right) = ctx.input(|i| {
                (
                    i.key_pressed(egui::Key::Escape),
                    i.key_pressed(egui::Key::ArrowLeft),
                    i.key_pressed(egui::Key::ArrowRight),
                )
            });
            if escape {
                self.state.close_lightbox();
            } else if left {
                self.state.lightbox_prev();
            } else if right {
                self.state.lightbox_next();
            }
        }

        self.state.begin_frame();

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About AutoGallery")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("🔧 AutoGallery")
                            .size(24.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "A showcase of finished bodywork.\n\
                             Hover to compare before and after,\n\
                             or drag the handle on a touch screen.",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state, &theme);
                ui.add_space(2.0);
            });

        // ── Lightbox ──────────────────────────────────────────────────────
        panels::lightbox_panel::lightbox_panel(ctx, &mut self.state, &theme);

        // ── Central panel (gallery grid) ──────────────────────────────────
        let scrolling = !self.state.scroll_locked();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .enable_scrolling(scrolling)
                .show(ui, |ui| {
                    panels::gallery_panel::gallery_panel(ui, &mut self.state, &theme);
                });
        });

        // ── Document-level touches ────────────────────────────────────────
        // Routed after the widgets have seen this frame's touch starts, so a
        // tap that starts and ends within one frame still ends its drag.
        let touches: Vec<DocumentTouch> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(widgets::comparator::document_touch)
                .collect()
        });
        let mut moved = false;
        for touch in touches {
            moved |= self.state.route_document_touch(touch);
        }

        let unmounted = self.state.end_frame();
        if unmounted > 0 {
            tracing::debug!(unmounted, "comparators unmounted");
        }

        if moved || self.state.active_drags() > 0 {
            ctx.request_repaint();
        }
    }
}
