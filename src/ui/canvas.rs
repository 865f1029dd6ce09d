use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Path, Program, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use crate::Message;

/// Transparent layer stacked on top of the displayed image
///
/// Reports pointer positions relative to the image's top-left corner
/// and outlines the pixel that was sampled last.
pub struct SamplerOverlay {
    /// Pixel to outline, if any
    pub marker: Option<(u32, u32)>,
}

impl Program<Message> for SamplerOverlay {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        if let Some((x, y)) = self.marker {
            // One pixel wider on each side so the sampled pixel stays visible
            let outline = Path::rectangle(
                Point::new(x as f32 - 1.0, y as f32 - 1.0),
                Size::new(3.0, 3.0),
            );
            frame.stroke(
                &outline,
                Stroke::default().with_color(Color::WHITE).with_width(1.0),
            );
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if let canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) = event {
            if let Some(position) = cursor.position_in(bounds) {
                return (
                    canvas::event::Status::Captured,
                    Some(Message::PointerMoved(position)),
                );
            }
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}
