/// Image loading and pixel buffers
///
/// This module handles:
/// - Decoding the selected file and shrinking it for display (loader.rs)
/// - The paired color/HSV buffers the pointer sampler reads (rasters.rs)

pub mod loader;
pub mod rasters;

pub use loader::LoadedImage;
