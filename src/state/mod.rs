/// State management module
///
/// This module handles all application state, including:
/// - The NoImage / ImageLoaded state machine (meter.rs)
/// - Pixel readouts produced by the pointer sampler (readout.rs)

pub mod meter;
pub mod readout;
