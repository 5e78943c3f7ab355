#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use cpugraph::metrics::SystemCpu;
use cpugraph::CpuMonitorApp;

fn main() -> cpugraph::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let source = SystemCpu::new()?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 320.0])
            .with_min_inner_size([240.0, 160.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Machine Checker",
        native_options,
        Box::new(|cc| Ok(Box::new(CpuMonitorApp::new(cc, Box::new(source))))),
    )?;

    Ok(())
}
