/// Error types shared across the application
///
/// Internal functions propagate these with `?`. Message handlers in
/// `main.rs` are the boundary where they get logged and swallowed.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The asset source answered, but not with a success status.
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("invalid asset URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to parse SVG: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("cannot rasterize at {0}px")]
    InvalidSize(u32),

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;
