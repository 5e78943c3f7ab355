pub const SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.5..=2.0;
pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<f32> = 8.0..=32.0;

/// Look-and-feel options, restored on the next start through eframe storage.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub scale: f32,
    pub font_size: f32,
    #[serde(skip)]
    show_window: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            font_size: 14.0,
            show_window: false,
        }
    }
}

impl Settings {
    pub fn show(&mut self) {
        self.show_window = true;
    }

    pub fn is_visible(&self) -> bool {
        self.show_window
    }

    pub fn hide(&mut self) {
        self.show_window = false;
    }

    /// Pulls restored values back into the ranges the sliders allow.
    pub fn sanitized(mut self) -> Self {
        self.scale = self.scale.clamp(*SCALE_RANGE.start(), *SCALE_RANGE.end());
        self.font_size = self
            .font_size
            .clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end());
        self
    }

    /// Point size used for `text_style`: headings a little larger, small
    /// text a little smaller than the body size.
    pub fn font_size_for(&self, text_style: &egui::TextStyle) -> f32 {
        match text_style {
            egui::TextStyle::Heading => self.font_size + 4.0,
            egui::TextStyle::Small => self.font_size - 2.0,
            _ => self.font_size,
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_pixels_per_point(self.scale);
        ctx.style_mut(|style| {
            for (text_style, font) in style.text_styles.iter_mut() {
                font.size = self.font_size_for(text_style);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_starts_hidden() {
        let mut settings = Settings::default();
        assert!(!settings.is_visible());
        settings.show();
        assert!(settings.is_visible());
        settings.hide();
        assert!(!settings.is_visible());
    }

    #[test]
    fn sanitized_clamps_restored_values() {
        let settings = Settings {
            scale: 9.0,
            font_size: 1.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.scale, 2.0);
        assert_eq!(settings.font_size, 8.0);
        assert_eq!(Settings::default().sanitized(), Settings::default());
    }

    #[test]
    fn text_sizes_follow_the_body_size() {
        let settings = Settings {
            font_size: 16.0,
            ..Default::default()
        };
        assert_eq!(settings.font_size_for(&egui::TextStyle::Body), 16.0);
        assert_eq!(settings.font_size_for(&egui::TextStyle::Button), 16.0);
        assert_eq!(settings.font_size_for(&egui::TextStyle::Heading), 20.0);
        assert_eq!(settings.font_size_for(&egui::TextStyle::Small), 14.0);
    }
}
