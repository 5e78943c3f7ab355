#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod error;
pub mod metrics;
pub mod ui;
pub use app::CpuMonitorApp;
pub use error::{MonitorError, Result};
