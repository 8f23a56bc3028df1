//! Background Tasks Module
//!
//! # Tasks
//! - Forecast cleanup: sweeps expired forecasts at configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
