use image::{imageops, RgbImage};

use crate::config::ConfigError;

/// Number of counter-clockwise quarter turns equivalent to `angle` degrees.
///
/// Panels mount at right angles, and quarter turns never clip pixel data, so
/// anything else is a configuration mistake.
pub fn quarter_turns(angle: i32) -> Result<u32, ConfigError> {
    if angle % 90 != 0 {
        return Err(ConfigError::RotationAngle(angle));
    }
    Ok((angle.rem_euclid(360) / 90) as u32)
}

/// Rotate counter-clockwise by the given number of quarter turns, swapping
/// the canvas dimensions for odd turns.
pub fn rotate_ccw(image: &RgbImage, turns: u32) -> RgbImage {
    match turns % 4 {
        0 => image.clone(),
        1 => imageops::rotate270(image),
        2 => imageops::rotate180(image),
        _ => imageops::rotate90(image),
    }
}
