/// The color meter's state machine
///
/// Two states only:
/// - `NoImage`: initial, only the Open action is available
/// - `ImageLoaded`: pointer sampling is active
///
/// A successful load always replaces the loaded image as a whole.
/// A failed or cancelled load never touches it.

use iced::Point;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error};

use super::readout::PixelReading;
use crate::error::MeterError;
use crate::imaging::LoadedImage;

/// Which image, if any, is being metered
#[derive(Debug, Clone, Default)]
pub enum MeterState {
    #[default]
    NoImage,
    ImageLoaded(Arc<LoadedImage>),
}

impl MeterState {
    pub fn image(&self) -> Option<&LoadedImage> {
        match self {
            MeterState::NoImage => None,
            MeterState::ImageLoaded(image) => Some(image),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, MeterState::ImageLoaded(_))
    }

    /// Read both buffers under the pointer, if there is anything to read
    pub fn sample(&self, position: Point) -> Option<PixelReading> {
        self.image()?.rasters.sample(position.x, position.y)
    }
}

/// Status line below the controls
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    /// Nothing to report
    #[default]
    Idle,
    /// A file is being decoded in the background
    Loading(String),
    /// The last load failed
    Failed(String),
}

/// Meter state plus the values the UI shows for it
#[derive(Debug, Default)]
pub struct Meter {
    state: MeterState,
    readout: Option<PixelReading>,
    status: Status,
}

impl Meter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MeterState {
        &self.state
    }

    pub fn readout(&self) -> Option<&PixelReading> {
        self.readout.as_ref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, Status::Loading(_))
    }

    /// A file was chosen and is being decoded
    pub fn begin_load(&mut self, file_name: impl Into<String>) {
        self.status = Status::Loading(file_name.into());
    }

    /// Outcome of the file dialog
    ///
    /// `None` (cancelled) changes nothing. A chosen path starts a load
    /// and is handed back to the caller to decode.
    pub fn file_chosen(&mut self, picked: Option<PathBuf>) -> Option<PathBuf> {
        let path = picked?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.begin_load(name);
        Some(path)
    }

    /// Apply the outcome of a load
    ///
    /// Returns `true` when a new image was installed, which is when the
    /// window is brought back to its loaded size.
    pub fn finish_load(&mut self, result: Result<Arc<LoadedImage>, MeterError>) -> bool {
        match result {
            Ok(image) => {
                self.state = MeterState::ImageLoaded(image);
                self.readout = None;
                self.status = Status::Idle;
                true
            }
            Err(e) => {
                error!("{}", e);
                self.status = Status::Failed(e.user_message());
                false
            }
        }
    }

    /// Pointer moved over the display surface
    ///
    /// Out-of-bounds positions and the `NoImage` state leave the readout
    /// untouched.
    pub fn pointer_moved(&mut self, position: Point) {
        if let Some(reading) = self.state.sample(position) {
            if self.readout.as_ref() != Some(&reading) {
                debug!("Sampled ({}, {}): {:?}", reading.x, reading.y, reading.rgb);
            }
            self.readout = Some(reading);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MeterConfig;
    use crate::imaging::loader::prepare;
    use image::{DynamicImage, Rgb, RgbImage};
    use std::path::Path;

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Arc<LoadedImage> {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)));
        Arc::new(prepare(image, Path::new("solid.png"), &MeterConfig::default()).unwrap())
    }

    fn decode_error() -> MeterError {
        MeterError::decode(
            "bad.jpg",
            image::ImageError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, "bad")),
        )
    }

    #[test]
    fn test_starts_without_image() {
        let mut meter = Meter::new();
        assert!(!meter.state().is_loaded());

        meter.pointer_moved(Point::new(0.0, 0.0));
        assert!(meter.readout().is_none());
    }

    #[test]
    fn test_every_successful_load_reports_install() {
        let mut meter = Meter::new();
        meter.begin_load("red.png");
        assert!(meter.is_loading());

        assert!(meter.finish_load(Ok(solid(4, 4, [255, 0, 0]))));
        assert!(meter.state().is_loaded());
        assert_eq!(meter.status(), &Status::Idle);

        // Reopening also resizes the window again
        assert!(meter.finish_load(Ok(solid(4, 4, [0, 0, 255]))));
    }

    #[test]
    fn test_file_chosen_starts_load() {
        let mut meter = Meter::new();
        let path = meter.file_chosen(Some(PathBuf::from("/photos/sunset.jpg")));

        assert_eq!(path, Some(PathBuf::from("/photos/sunset.jpg")));
        assert_eq!(meter.status(), &Status::Loading("sunset.jpg".to_string()));
    }

    #[test]
    fn test_cancelled_dialog_keeps_image_and_sampling() {
        let mut meter = Meter::new();
        meter.finish_load(Ok(solid(4, 4, [255, 0, 0])));
        meter.pointer_moved(Point::new(1.0, 0.0));
        let before = *meter.readout().unwrap();

        assert_eq!(meter.file_chosen(None), None);

        assert!(meter.state().is_loaded());
        assert_eq!(meter.state().image().unwrap().display_size(), (2, 2));
        assert_eq!(meter.status(), &Status::Idle);
        assert!(!meter.is_loading());
        assert_eq!(meter.readout(), Some(&before));

        meter.pointer_moved(Point::new(0.0, 1.0));
        assert_eq!(meter.readout().unwrap().rgb, [255, 0, 0]);
        assert_eq!(meter.readout().unwrap().hsv_raw, [0, 255, 255]);
    }

    #[test]
    fn test_cancelled_dialog_without_image_stays_empty() {
        let mut meter = Meter::new();
        assert_eq!(meter.file_chosen(None), None);
        assert!(!meter.state().is_loaded());
        assert_eq!(meter.status(), &Status::Idle);
    }

    #[test]
    fn test_pointer_sampling_and_bounds() {
        let mut meter = Meter::new();
        meter.finish_load(Ok(solid(4, 4, [255, 0, 0])));

        meter.pointer_moved(Point::new(1.0, 1.0));
        let reading = *meter.readout().unwrap();
        assert_eq!(reading.labels()[0], "RGB: (255, 0, 0)");

        // Exactly at (width, height): nothing changes
        meter.pointer_moved(Point::new(2.0, 2.0));
        assert_eq!(meter.readout(), Some(&reading));

        // Same point twice gives the same reading
        meter.pointer_moved(Point::new(1.0, 1.0));
        assert_eq!(meter.readout(), Some(&reading));
    }

    #[test]
    fn test_failed_load_keeps_previous_image() {
        let mut meter = Meter::new();
        meter.finish_load(Ok(solid(4, 4, [255, 255, 255])));
        meter.pointer_moved(Point::new(0.0, 0.0));
        let before = *meter.readout().unwrap();

        meter.begin_load("bad.jpg");
        assert!(!meter.finish_load(Err(decode_error())));

        assert!(matches!(meter.status(), Status::Failed(_)));
        assert_eq!(meter.state().image().unwrap().display_size(), (2, 2));
        assert_eq!(meter.readout(), Some(&before));

        meter.pointer_moved(Point::new(1.0, 0.0));
        assert_eq!(meter.readout().unwrap().hsv_label(), "HSV: (0, 0, 100)");
    }

    #[test]
    fn test_failed_first_load_stays_without_image() {
        let mut meter = Meter::new();
        assert!(!meter.finish_load(Err(decode_error())));
        assert!(!meter.state().is_loaded());
    }

    #[test]
    fn test_new_image_replaces_buffers_and_clears_readout() {
        let mut meter = Meter::new();
        meter.finish_load(Ok(solid(4, 4, [255, 0, 0])));
        meter.pointer_moved(Point::new(0.0, 0.0));

        meter.finish_load(Ok(solid(10, 6, [0, 255, 0])));
        assert!(meter.readout().is_none());
        assert_eq!(meter.state().image().unwrap().display_size(), (5, 3));

        meter.pointer_moved(Point::new(4.0, 2.0));
        assert_eq!(meter.readout().unwrap().hsv_raw, [60, 255, 255]);
    }
}
