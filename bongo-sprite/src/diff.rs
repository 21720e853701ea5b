//! Builds pixel frame word tables from sprites.
//!
//! A base frame lists every lit pixel of the base sprite. A diff frame lists only the pixels a
//! pose changes relative to the base, each carrying the state the pose wants.

use bongo_common::frame::{Pixel, PixelFrame};

use crate::{sprite::Bitmap, SpriteError};

fn with_count(mut pixels: Vec<u16>) -> Vec<u16> {
    pixels.insert(0, pixels.len() as u16);
    pixels
}

pub fn base_frame(base: &Bitmap) -> Vec<u16> {
    let pixels = (0..base.len())
        .filter(|i| base.get_index(*i))
        .map(|i| Pixel::new(i as u16, true).encode())
        .collect();
    with_count(pixels)
}

pub fn diff_frame(base: &Bitmap, pose: &Bitmap) -> Result<Vec<u16>, SpriteError> {
    if base.width() != pose.width() || base.height() != pose.height() {
        return Err(SpriteError::unspanned(format!(
            "Pose is {}x{} but the base sprite is {}x{}",
            pose.width(),
            pose.height(),
            base.width(),
            base.height()
        )));
    }
    let pixels = (0..base.len())
        .filter(|i| base.get_index(*i) != pose.get_index(*i))
        .map(|i| Pixel::new(i as u16, pose.get_index(i)).encode())
        .collect();
    Ok(with_count(pixels))
}

/// Draws `frame` over `bitmap` the same way the firmware writes it to the display.
pub fn apply(bitmap: &mut Bitmap, frame: PixelFrame<'_>) -> Result<(), SpriteError> {
    let len = bitmap.len();
    for (position, pixel) in frame.pixels().enumerate() {
        let index = pixel.index as usize;
        if index >= len {
            return Err(SpriteError::unspanned(format!(
                "Pixel index {index} at word {} is outside the {}x{} raster",
                position + 1,
                bitmap.width(),
                bitmap.height()
            )));
        }
        bitmap.set_index(index, pixel.on);
    }
    Ok(())
}

#[cfg(test)]
#[path = "diff_test.rs"]
mod test;
