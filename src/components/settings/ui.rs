use super::state::{Settings, FONT_SIZE_RANGE, SCALE_RANGE};

pub fn show_settings_window(ctx: &egui::Context, settings: &mut Settings) {
    if !settings.is_visible() {
        return;
    }

    egui::Window::new("⚙ Settings")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("UI Scale:");
                ui.add(egui::Slider::new(&mut settings.scale, SCALE_RANGE).step_by(0.1));
            });

            ui.horizontal(|ui| {
                ui.label("Font Size:");
                ui.add(egui::Slider::new(&mut settings.font_size, FONT_SIZE_RANGE).step_by(1.0));
            });

            ui.separator();

            if ui.button("Close").clicked() {
                settings.hide();
            }
        });
}
