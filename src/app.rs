use log::info;
use std::time::Instant;

use crate::components::settings::{show_settings_window, Settings};
use crate::metrics::sampler::{self, IntervalScheduler, Scheduler};
use crate::metrics::{CpuHistory, CpuSource, Sample, HISTORY_LEN};
use crate::ui::{cpu_plot, show_cpu_stats, PlotSeries};

/// The single window: one cpu history, ticked and drawn by egui frames.
pub struct CpuMonitorApp {
    source: Box<dyn CpuSource>,
    scheduler: Box<dyn Scheduler>,
    history: CpuHistory,
    series: PlotSeries,
    settings: Settings,
}

impl CpuMonitorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, source: Box<dyn CpuSource>) -> Self {
        // Load previous look-and-feel (if any).
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<Settings>(storage, eframe::APP_KEY))
            .map(Settings::sanitized)
            .unwrap_or_default();

        Self::with_parts(source, Box::new(IntervalScheduler::default()), settings)
    }

    pub fn with_parts(
        source: Box<dyn CpuSource>,
        scheduler: Box<dyn Scheduler>,
        settings: Settings,
    ) -> Self {
        let history = CpuHistory::new(HISTORY_LEN);
        let mut series = PlotSeries::default();
        sampler::redraw(&history, &mut series);
        info!("keeping the last {} cpu samples", history.capacity());

        Self {
            source,
            scheduler,
            history,
            series,
            settings,
        }
    }

    pub fn history(&self) -> &CpuHistory {
        &self.history
    }

    pub fn series(&self) -> &PlotSeries {
        &self.series
    }

    /// Runs a tick if one is due at `now`.
    fn update_metrics(&mut self, now: Instant) -> Option<Sample> {
        if !self.scheduler.is_due(now) {
            return None;
        }

        Some(sampler::tick(
            self.source.as_mut(),
            &mut self.history,
            &mut self.series,
        ))
    }
}

impl eframe::App for CpuMonitorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.settings.apply(ctx);
        let now = Instant::now();
        self.update_metrics(now);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.add_space(16.0);
                egui::widgets::global_theme_preference_buttons(ui);

                ui.add_space(16.0);
                if ui.button("⚙").clicked() {
                    self.settings.show();
                }
            });
        });

        show_settings_window(ctx, &mut self.settings);

        egui::CentralPanel::default().show(ctx, |ui| {
            show_cpu_stats(ui, &self.history);
            ui.add_space(4.0);

            let height = ui.available_height();
            cpu_plot(ui, "cpu_plot", height, &self.series, self.history.capacity());
        });

        ctx.request_repaint_after(self.scheduler.remaining(now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct Constant(f32);

    impl CpuSource for Constant {
        fn total_usage(&mut self) -> f32 {
            self.0
        }
    }

    fn app(reading: f32, start: Instant) -> CpuMonitorApp {
        CpuMonitorApp::with_parts(
            Box::new(Constant(reading)),
            Box::new(IntervalScheduler::starting_at(Duration::from_secs(1), start)),
            Settings::default(),
        )
    }

    #[test]
    fn starts_with_a_flat_full_width_chart() {
        let app = app(0.0, Instant::now());
        assert_eq!(app.history().snapshot(), vec![0; HISTORY_LEN]);
        assert_eq!(app.series().len(), HISTORY_LEN);
        assert!(app.series().plot_points().iter().all(|p| p[1] == 0.0));
    }

    #[test]
    fn first_sample_comes_one_interval_after_construction() {
        let start = Instant::now();
        let mut app = app(12.0, start);

        assert_eq!(app.update_metrics(start), None);
        assert_eq!(app.update_metrics(start + Duration::from_millis(999)), None);
        assert_eq!(app.history().snapshot(), vec![0; HISTORY_LEN]);

        assert_eq!(app.update_metrics(start + Duration::from_millis(1000)), Some(12));
    }

    #[test]
    fn ticks_once_per_interval() {
        let start = Instant::now();
        let mut app = app(33.3, start);

        assert_eq!(app.update_metrics(start + Duration::from_millis(1000)), Some(33));
        assert_eq!(app.update_metrics(start + Duration::from_millis(1400)), None);
        assert_eq!(app.update_metrics(start + Duration::from_millis(2000)), Some(33));

        let snapshot = app.history().snapshot();
        assert_eq!(snapshot.len(), HISTORY_LEN);
        assert_eq!(&snapshot[HISTORY_LEN - 2..], [33, 33]);
        assert_eq!(app.series().plot_points().last(), Some(&[39.0, 33.0]));
    }
}
