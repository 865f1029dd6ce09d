/// User interface widgets
///
/// - `canvas.rs` - pointer capture layer over the displayed image
/// - `panel.rs` - image surface, readout lines and status line

pub mod canvas;
pub mod panel;
