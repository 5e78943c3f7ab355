use thiserror::Error;

/// Errors that stop the monitor from starting.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("cpu usage is not available on {0}")]
    Unsupported(&'static str),

    #[error("window error: {0}")]
    Gui(#[from] eframe::Error),
}

pub type Result<T, E = MonitorError> = std::result::Result<T, E>;
