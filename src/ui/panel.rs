/// Widgets for the meter window: image surface, readout and status
use iced::widget::image::FilterMethod;
use iced::widget::{canvas, column, container, image, scrollable, stack, text};
use iced::{Element, Length};

use super::canvas::SamplerOverlay;
use crate::imaging::LoadedImage;
use crate::state::meter::Status;
use crate::state::readout::PixelReading;
use crate::Message;

/// Text shown before any image is opened
pub const INSTRUCTION: &str = "Select an image";

/// The Display Raster at 1:1 with the pointer overlay on top
pub fn image_surface<'a>(loaded: &LoadedImage, marker: Option<(u32, u32)>) -> Element<'a, Message> {
    let (width, height) = loaded.display_size();
    let width = Length::Fixed(width as f32);
    let height = Length::Fixed(height as f32);

    let picture = image(loaded.handle.clone())
        .width(width)
        .height(height)
        .filter_method(FilterMethod::Nearest);

    let overlay = canvas(SamplerOverlay { marker })
        .width(width)
        .height(height);

    scrollable(stack![picture, overlay])
        .direction(scrollable::Direction::Both {
            vertical: scrollable::Scrollbar::default(),
            horizontal: scrollable::Scrollbar::default(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The three readout lines; empty until the pointer first hits the image
pub fn readout<'a>(reading: Option<&PixelReading>) -> Element<'a, Message> {
    let [rgb, raw, hsv] = reading
        .map(PixelReading::labels)
        .unwrap_or_else(|| [String::new(), String::new(), String::new()]);

    container(column![text(rgb), text(raw), text(hsv)].spacing(8))
        .width(Length::Fixed(200.0))
        .padding(10)
        .into()
}

/// One-line status: loading, last error, or what is on screen
pub fn status_line<'a>(status: &Status, loaded: Option<&LoadedImage>) -> Element<'a, Message> {
    match status {
        Status::Loading(name) => text(format!("Loading {}...", name)).size(14).into(),
        Status::Failed(message) => text(message.clone()).size(14).style(text::danger).into(),
        Status::Idle => {
            let description = loaded
                .map(|shown| {
                    let (sw, sh) = shown.source_size;
                    let (dw, dh) = shown.display_size();
                    format!("{} ({}x{} shown at {}x{})", shown.file_name(), sw, sh, dw, dh)
                })
                .unwrap_or_default();
            text(description).size(14).into()
        }
    }
}
