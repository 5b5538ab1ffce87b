//! The raster a map is rendered into.

use std::io;
use crate::error::Error;
use super::canvas::Canvas;


//------------ Surface -------------------------------------------------------

/// A drawing target of a given logical size and device pixel ratio.
///
/// The raster behind the surface has the logical size multiplied by the
/// pixel ratio, rounded up. Drawing happens in logical units through a
/// [`Canvas`] acquired via [`canvas`][Self::canvas].
#[derive(Debug)]
pub struct Surface {
    raster: cairo::ImageSurface,
    width: f64,
    height: f64,
    ratio: f64,
}

impl Surface {
    /// Creates a new, fully transparent surface.
    pub fn new(width: f64, height: f64, ratio: f64) -> Result<Self, Error> {
        let (raster_width, raster_height) = raster_size(width, height, ratio)?;
        let raster = cairo::ImageSurface::create(
            cairo::Format::ARgb32, raster_width, raster_height
        )?;
        tracing::debug!(
            width, height, ratio, raster_width, raster_height,
            "allocated surface"
        );
        Ok(Surface { raster, width, height, ratio })
    }

    /// Changes the size or pixel ratio of the surface.
    ///
    /// The raster is only reallocated if something actually changed.
    pub fn resize(
        &mut self, width: f64, height: f64, ratio: f64
    ) -> Result<(), Error> {
        if width == self.width && height == self.height && ratio == self.ratio {
            return Ok(())
        }
        *self = Self::new(width, height, ratio)?;
        Ok(())
    }

    /// Returns the logical width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the logical height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the device pixel ratio.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Returns the width and height of the raster in pixels.
    pub fn raster_size(&self) -> (i32, i32) {
        (self.raster.width(), self.raster.height())
    }

    /// Returns a canvas for drawing onto the surface.
    ///
    /// Every canvas starts from a fresh transformation scaled by the pixel
    /// ratio. Nothing carries over from previously acquired canvases.
    pub fn canvas(&mut self) -> Canvas {
        Canvas::new(&self.raster, self.ratio)
    }

    /// Returns a copy of the raw raster data.
    ///
    /// The data is in Cairo’s ARGB32 format: premultiplied, native endian,
    /// row by row with a stride of [`stride`][Self::stride] bytes.
    pub fn pixels(&mut self) -> Result<Vec<u8>, Error> {
        self.raster.flush();
        let mut res = Vec::new();
        self.raster.with_data(|data| res.extend_from_slice(data))?;
        Ok(res)
    }

    /// Returns the number of bytes per raster row.
    pub fn stride(&self) -> i32 {
        self.raster.stride()
    }

    /// Writes the raster as a PNG image.
    pub fn write_png(&self, target: &mut impl io::Write) -> Result<(), Error> {
        self.raster.write_to_png(target)?;
        Ok(())
    }
}

fn raster_size(
    width: f64, height: f64, ratio: f64
) -> Result<(i32, i32), Error> {
    let err = || Error::InvalidSurface { width, height, ratio };
    let valid = |value: f64| value.is_finite() && value > 0.;
    if !valid(width) || !valid(height) || !valid(ratio) {
        return Err(err())
    }
    let pixels = |value: f64| {
        let value = (value * ratio).ceil();
        if value <= f64::from(i32::MAX) { Ok(value as i32) } else { Err(err()) }
    };
    Ok((pixels(width)?, pixels(height)?))
}


//============ Testing =======================================================
