pub mod planes;
pub mod rotate;

use image::{DynamicImage, RgbImage};
use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::RenderLogger;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RasterError {
    #[error("Raster image is not 3-channel RGB")]
    PixelFormat,
    #[error("Raster image has a zero dimension")]
    EmptyRaster,
    #[error("Raster image is {got_width}x{got_height}, expected {want_width}x{want_height}")]
    Dimensions {
        want_width: u32,
        want_height: u32,
        got_width: u32,
        got_height: u32,
    },
}

/// The two monochrome-semantics planes produced by one render cycle, already
/// rotated to the panel's mounting orientation.
#[derive(Debug)]
pub struct BitPlanes {
    pub black: RgbImage,
    pub red: RgbImage,
}

/// Turns one full-color screenshot into the two plane images a black/red
/// eInk controller accepts.
///
/// Width and height are the screenshot dimensions the caller configured for
/// the rasterizer; the rotation angle is counter-clockwise degrees and must
/// be a right angle.
pub struct Renderer<'a> {
    width: u32,
    height: u32,
    turns: u32,
    logger: &'a dyn RenderLogger,
}

impl<'a> Renderer<'a> {
    /// Fails fast on an angle the panel cannot be mounted at.
    pub fn new(
        width: u32,
        height: u32,
        angle: i32,
        logger: &'a dyn RenderLogger,
    ) -> Result<Self, ConfigError> {
        let turns = rotate::quarter_turns(angle)?;
        Ok(Self {
            width,
            height,
            turns,
            logger,
        })
    }

    /// Separate the screenshot into planes and rotate both.
    ///
    /// The screenshot is consumed once and never mutated; each plane is an
    /// independent copy. Both planes get the same rotation so they stay
    /// geometrically aligned.
    pub fn process(&self, screenshot: &DynamicImage) -> Result<BitPlanes, RasterError> {
        let source = match screenshot {
            DynamicImage::ImageRgb8(image) => image,
            _ => return Err(RasterError::PixelFormat),
        };
        if source.width() == 0 || source.height() == 0 {
            return Err(RasterError::EmptyRaster);
        }
        if (source.width(), source.height()) != (self.width, self.height) {
            return Err(RasterError::Dimensions {
                want_width: self.width,
                want_height: self.height,
                got_width: source.width(),
                got_height: source.height(),
            });
        }

        let (black, red) = planes::separate(source);
        self.logger
            .info("Extracted black and red planes from screenshot");

        let black = rotate::rotate_ccw(&black, self.turns);
        let red = rotate::rotate_ccw(&red, self.turns);
        self.logger.debug(&format!(
            "Rotated planes by {} quarter turns to {}x{}",
            self.turns,
            black.width(),
            black.height()
        ));

        Ok(BitPlanes { black, red })
    }
}
