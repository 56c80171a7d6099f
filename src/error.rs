use thiserror::Error;

/// Errors raised at the boundary between the renderer and its callers.
///
/// Tracing itself never fails; these only cover bad names, bad frame sizes
/// and writing the finished image.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no surface named {0:?}")]
    UnknownSurface(String),

    #[error("invalid resolution {width}x{height}")]
    InvalidResolution { width: usize, height: usize },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
