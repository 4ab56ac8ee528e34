/// Colour scheme and visual theme for AutoGallery.
///
/// Provides both dark and light themes in the workshop's red-on-charcoal
/// branding. All colour constants are defined here so the rest of the UI
/// code references semantically-named values rather than raw hex codes.

use egui::{Color32, Stroke, Visuals};

/// Which theme is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Toggle between dark and light.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        };
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Semantic colour palette for AutoGallery.
pub struct AutoGalleryTheme {
    pub background: Color32,
    pub surface: Color32,
    pub surface_hover: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub accent_hover: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub separator: Color32,
    pub selection: Color32,
    /// Comparator handle bar and grip.
    pub handle: Color32,
    /// Outline and chevrons on the grip.
    pub handle_outline: Color32,
    /// Backdrop behind the Before/After labels.
    pub label_backdrop: Color32,
    /// Tag colours on gallery cards.
    pub tag_pair: Color32,
    pub tag_single: Color32,
}

impl AutoGalleryTheme {
    /// Dark theme -- the default.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x11, 0x18, 0x27),
            surface: Color32::from_rgb(0x1f, 0x29, 0x37),
            surface_hover: Color32::from_rgb(0x2b, 0x36, 0x45),
            text_primary: Color32::from_rgb(0xf3, 0xf4, 0xf6),
            text_secondary: Color32::from_rgb(0xd1, 0xd5, 0xdb),
            text_muted: Color32::from_rgb(0x9c, 0xa3, 0xaf),
            accent: Color32::from_rgb(0xef, 0x44, 0x44),
            accent_hover: Color32::from_rgb(0xdc, 0x26, 0x26),
            warning: Color32::from_rgb(0xfa, 0xb3, 0x87),
            success: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            separator: Color32::from_rgb(0x37, 0x41, 0x51),
            selection: Color32::from_rgb(0x4b, 0x1d, 0x1d),
            handle: Color32::from_rgb(0xdc, 0x26, 0x26),
            handle_outline: Color32::WHITE,
            label_backdrop: Color32::from_rgba_premultiplied(0, 0, 0, 150),
            tag_pair: Color32::from_rgb(0xdc, 0x26, 0x26),
            tag_single: Color32::from_rgb(0x25, 0x63, 0xeb),
        }
    }

    /// Light theme -- optional toggle.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
            surface: Color32::from_rgb(0xff, 0xff, 0xff),
            surface_hover: Color32::from_rgb(0xe8, 0xe8, 0xef),
            text_primary: Color32::from_rgb(0x11, 0x18, 0x27),
            text_secondary: Color32::from_rgb(0x37, 0x41, 0x51),
            text_muted: Color32::from_rgb(0x6b, 0x72, 0x80),
            accent: Color32::from_rgb(0xdc, 0x26, 0x26),
            accent_hover: Color32::from_rgb(0xb9, 0x1c, 0x1c),
            warning: Color32::from_rgb(0xd0, 0x80, 0x20),
            success: Color32::from_rgb(0x30, 0x98, 0x30),
            separator: Color32::from_rgb(0xd0, 0xd0, 0xd8),
            selection: Color32::from_rgba_premultiplied(0xdc, 0x26, 0x26, 0x30),
            handle: Color32::from_rgb(0xdc, 0x26, 0x26),
            handle_outline: Color32::WHITE,
            label_backdrop: Color32::from_rgba_premultiplied(0, 0, 0, 120),
            tag_pair: Color32::from_rgb(0xb9, 0x1c, 0x1c),
            tag_single: Color32::from_rgb(0x1d, 0x4e, 0xd8),
        }
    }

    /// Get the theme for the given mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.background.r() < 128 {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.surface;
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.hovered.bg_fill = self.surface_hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent_hover);

        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.background);

        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 4.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}
