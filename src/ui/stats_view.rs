use crate::metrics::CpuHistory;

pub fn show_cpu_stats(ui: &mut egui::Ui, history: &CpuHistory) {
    ui.horizontal(|ui| {
        ui.label(format!("CPU: {}%", history.last().unwrap_or_default()));
        ui.add_space(16.0);
        ui.label(format!("Average: {:.1}%", history.average()));
        ui.add_space(16.0);
        ui.label(format!("Peak: {}%", history.peak().unwrap_or_default()));
    });
}
