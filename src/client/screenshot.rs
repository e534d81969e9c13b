use chrono::{Datelike, Timelike};
use futures::future::BoxFuture;
use thiserror::Error;

pub const SCREENSHOT_MIME: &str = "image/png";

#[derive(Debug, Error)]
pub enum ScreenshotError {
    #[error("no resource loaded to capture")]
    Unavailable,

    #[error("capture failed: {0}")]
    Capture(String),

    #[error("download failed: {0}")]
    Download(String),
}

/// Pixel capture of the figure element and hand-off of the resulting file.
pub trait ScreenshotBackend {
    /// Renders the figure over `background` and returns PNG bytes.
    fn capture<'a>(&'a mut self, background: &'a str)
        -> BoxFuture<'a, Result<Vec<u8>, ScreenshotError>>;

    fn download(&mut self, png: &[u8], filename: &str, mime: &str) -> Result<(), ScreenshotError>;
}

/// `screenshot-DD-MM-YYYY--HH-MM-SS.png` for the given local time.
pub fn screenshot_filename<T: Datelike + Timelike>(at: &T) -> String {
    format!(
        "screenshot-{:02}-{:02}-{:04}--{:02}-{:02}-{:02}.png",
        at.day(),
        at.month(),
        at.year(),
        at.hour(),
        at.minute(),
        at.second()
    )
}
