use iced::widget::{button, column, container, row, text, Column};
use iced::{window, Alignment, Element, Length, Point, Size, Task, Theme};
use rfd::FileDialog;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod color;
mod config;
mod error;
mod imaging;
mod state;
mod ui;

use config::MeterConfig;
use error::MeterError;
use imaging::LoadedImage;
use state::meter::{Meter, MeterState};
use ui::panel;

/// Main application state
struct HsvMeter {
    /// Loaded image, readout and status
    meter: Meter,
    /// Settings read at startup
    config: MeterConfig,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Open" button
    OpenImage,
    /// Background decode finished
    ImageLoaded(Result<Arc<LoadedImage>, MeterError>),
    /// Pointer moved over the displayed image (image-relative position)
    PointerMoved(Point),
}

impl HsvMeter {
    /// Create a new instance of the application
    fn new(config: MeterConfig) -> (Self, Task<Message>) {
        info!("Digital Color Meter started");

        (
            HsvMeter {
                meter: Meter::new(),
                config,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenImage => {
                // Show the native file picker; no format filter on purpose
                let picked = FileDialog::new().set_title("Open Image").pick_file();
                let Some(path) = self.meter.file_chosen(picked) else {
                    return Task::none();
                };

                Task::perform(
                    imaging::loader::load_image(path, self.config.clone()),
                    |result| Message::ImageLoaded(result.map(Arc::new)),
                )
            }
            Message::ImageLoaded(result) => {
                if !self.meter.finish_load(result) {
                    return Task::none();
                }

                // Every new image brings the window back to its loaded size
                let (width, height) = self.config.loaded_window;
                window::get_oldest().and_then(move |id| window::resize(id, Size::new(width, height)))
            }
            Message::PointerMoved(position) => {
                self.meter.pointer_moved(position);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let open = button("Open")
            .on_press_maybe((!self.meter.is_loading()).then_some(Message::OpenImage))
            .padding(10);

        let status = panel::status_line(self.meter.status(), self.meter.state().image());

        let content: Column<Message> = match self.meter.state() {
            MeterState::NoImage => column![text(panel::INSTRUCTION), open, status]
                .spacing(10)
                .padding(10)
                .align_x(Alignment::Center),
            MeterState::ImageLoaded(image) => {
                let readout = self.meter.readout();
                let marker = readout.map(|r| (r.x, r.y));

                column![
                    row![panel::image_surface(image, marker), panel::readout(readout)]
                        .spacing(20)
                        .height(Length::Fill),
                    open,
                    status,
                ]
                .spacing(10)
                .padding(30)
                .align_x(Alignment::Center)
            }
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Install the fmt subscriber with the configured filter
fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let (config, config_error) = match MeterConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (MeterConfig::default(), Some(e)),
    };

    init_logging(&config.log_level);
    if let Some(e) = config_error {
        warn!("{}; using defaults", e);
    }

    let (width, height) = config.initial_window;

    iced::application("Digital Color Meter", HsvMeter::update, HsvMeter::view)
        .theme(HsvMeter::theme)
        .window_size(Size::new(width, height))
        .centered()
        .run_with(move || HsvMeter::new(config))
}
