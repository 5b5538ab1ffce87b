//! The error type of the crate.

use crate::render::InvalidHexColor;


//------------ Error ---------------------------------------------------------

/// Something went wrong outside of a render pass.
///
/// Rendering itself never fails. Errors arise only at the edges: when raw
/// input is validated, when a surface is allocated, or when its raster is
/// read back or exported.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("invalid surface of {width}x{height} at pixel ratio {ratio}")]
    InvalidSurface { width: f64, height: f64, ratio: f64 },

    #[error(transparent)]
    Cairo(#[from] cairo::Error),

    #[error("surface raster is in use: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("failed to write PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error(transparent)]
    Color(#[from] InvalidHexColor),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
