//! Colors and spacing for the note window.

use eframe::egui::{Color32, Margin, Visuals};

use crate::core::config::{ResolvedConfig, Rgb};

/// Gap between the window edge and the inner frame.
pub const OUTER_PADDING: f32 = 5.0;
/// Gap between the inner frame and the text area.
pub const INNER_PADDING: f32 = 10.0;
/// Border drawn around the text area, in the frame color.
pub const TEXT_BORDER: f32 = 2.0;
/// Side of the square resize grip in the bottom-right corner.
pub const GRIP_SIZE: f32 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub frame: Color32,
    pub text_background: Color32,
    pub text: Color32,
    /// 0..=255, applied to every surface so the whole window is see-through.
    pub alpha: u8,
}

impl Theme {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            frame: color(config.frame_color),
            text_background: color(config.text_background),
            text: color(config.text_color),
            alpha: (config.opacity * 255.0).round() as u8,
        }
    }

    /// `color` at the configured window opacity.
    pub fn with_alpha(&self, color: Color32) -> Color32 {
        let [r, g, b, _] = color.to_array();
        Color32::from_rgba_unmultiplied(r, g, b, self.alpha)
    }

    /// Window background: the frame color at the configured opacity.
    pub fn window_fill(&self) -> Color32 {
        self.with_alpha(self.frame)
    }

    pub fn text_fill(&self) -> Color32 {
        self.with_alpha(self.text_background)
    }

    pub fn text_color(&self) -> Color32 {
        self.with_alpha(self.text)
    }

    pub fn border_color(&self) -> Color32 {
        self.window_fill()
    }

    pub fn outer_margin(&self) -> Margin {
        Margin::same(OUTER_PADDING + INNER_PADDING)
    }

    pub fn apply(&self, visuals: &mut Visuals) {
        let frame = self.window_fill();
        let hovered = self.with_alpha(shade(self.frame, 1.2));
        let active = self.with_alpha(shade(self.frame, 0.8));

        visuals.panel_fill = frame;
        visuals.window_fill = frame;
        visuals.extreme_bg_color = self.text_fill();
        visuals.override_text_color = Some(self.text_color());
        visuals.text_cursor.stroke.color = self.text_color();
        visuals.selection.stroke.color = self.text_color();
        for (widget, fill) in [
            (&mut visuals.widgets.inactive, frame),
            (&mut visuals.widgets.hovered, hovered),
            (&mut visuals.widgets.active, active),
        ] {
            widget.bg_fill = fill;
            widget.weak_bg_fill = fill;
        }
    }

    /// Every fill the window paints, for checking they all share the opacity.
    pub fn surfaces(&self) -> [Color32; 4] {
        [
            self.window_fill(),
            self.text_fill(),
            self.text_color(),
            self.border_color(),
        ]
    }
}

/// Scale the RGB channels of an opaque color, saturating at 255.
fn shade(color: Color32, factor: f32) -> Color32 {
    let scale = |c: u8| (c as f32 * factor).round().min(255.0) as u8;
    Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}

fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}
