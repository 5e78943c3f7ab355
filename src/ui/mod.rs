mod stats_view;

pub use stats_view::*;

use crate::metrics::sampler::ChartSurface;
use crate::metrics::Sample;
use egui::{Color32, Vec2};

pub const CHART_BACKGROUND: Color32 = Color32::from_rgb(0x00, 0x00, 0x8B);
pub const CHART_LINE: Color32 = Color32::from_rgb(0x00, 0xFF, 0x00);
pub const CHART_GRID: Color32 = Color32::from_rgb(0x00, 0x82, 0x42);

/// Percent between horizontal grid lines.
const GRID_STEP_Y: usize = 10;
/// Samples between vertical grid lines.
const GRID_STEP_X: usize = 5;

/// Positions of the vertical and horizontal grid lines for a chart that
/// spans `max_points` samples and 0..=100 percent.
pub fn grid_lines(max_points: usize) -> (Vec<f64>, Vec<f64>) {
    let xs = (0..max_points).step_by(GRID_STEP_X).map(|x| x as f64).collect();
    let ys = (0..=100).step_by(GRID_STEP_Y).map(|y| y as f64).collect();
    (xs, ys)
}

/// The points currently shown on the cpu chart.
///
/// A series whose indices are all zero is an indexed series: points are laid
/// out by the order they were appended in.
#[derive(Debug, Default, Clone)]
pub struct PlotSeries {
    points: Vec<(usize, Sample)>,
}

impl PlotSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        let indexed = self.points.iter().all(|&(index, _)| index == 0);
        self.points
            .iter()
            .enumerate()
            .map(|(position, &(index, value))| {
                let x = if indexed { position } else { index };
                [x as f64, value as f64]
            })
            .collect()
    }
}

impl ChartSurface for PlotSeries {
    fn clear(&mut self) {
        self.points.clear();
    }

    fn append(&mut self, index: usize, value: Sample) {
        self.points.push((index, value));
    }
}

pub fn cpu_plot(ui: &mut egui::Ui, id: impl std::hash::Hash, height: f32, series: &PlotSeries, max_points: usize) {
    let plot = egui_plot::Plot::new(id)
        .height(height)
        .show_axes(true)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .set_margin_fraction(Vec2::ZERO)
        .include_x(0.0)
        .include_x(max_points.saturating_sub(1) as f64)
        .include_y(0.0)
        .include_y(100.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false);

    egui::Frame::none()
        .fill(CHART_BACKGROUND)
        .inner_margin(4.0)
        .show(ui, |ui| {
            let visuals = ui.visuals_mut();
            visuals.extreme_bg_color = Color32::TRANSPARENT;
            visuals.override_text_color = Some(Color32::WHITE);

            let (xs, ys) = grid_lines(max_points);
            plot.show(ui, |plot_ui| {
                for x in xs {
                    plot_ui.vline(egui_plot::VLine::new(x).color(CHART_GRID).width(1.0));
                }
                for y in ys {
                    plot_ui.hline(egui_plot::HLine::new(y).color(CHART_GRID).width(1.0));
                }

                let points: egui_plot::PlotPoints = series.plot_points().into_iter().collect();
                plot_ui.line(egui_plot::Line::new(points).color(CHART_LINE).width(1.0));
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{sampler, CpuHistory};

    #[test]
    fn zero_indices_are_laid_out_in_order() {
        let mut history = CpuHistory::new(3);
        history.record(25);
        let mut series = PlotSeries::default();

        sampler::redraw(&history, &mut series);
        assert_eq!(series.plot_points(), vec![[0.0, 0.0], [1.0, 0.0], [2.0, 25.0]]);
    }

    #[test]
    fn explicit_indices_are_kept() {
        let mut series = PlotSeries::default();
        series.append(4, 10);
        series.append(9, 20);
        assert_eq!(series.plot_points(), vec![[4.0, 10.0], [9.0, 20.0]]);
    }

    #[test]
    fn grid_covers_the_whole_chart() {
        let (xs, ys) = grid_lines(40);
        assert_eq!(xs, [0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0]);
        assert_eq!(ys.first(), Some(&0.0));
        assert_eq!(ys.last(), Some(&100.0));
        assert_eq!(ys.len(), 11);
    }

    #[test]
    fn clear_empties_the_series() {
        let mut series = PlotSeries::default();
        series.append(0, 1);
        series.clear();
        assert!(series.is_empty());
        assert!(series.plot_points().is_empty());
    }
}
