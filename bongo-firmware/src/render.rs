use bongo_common::frame::PixelFrame;

use crate::oled::OledSurface;

/// Writes every pixel entry of `frame` to `surface`, in table order.
pub fn render_frame(surface: &mut impl OledSurface, frame: PixelFrame<'_>, width: u16) {
    for pixel in frame.pixels() {
        let (x, y) = pixel.xy(width);
        surface.set_pixel(x, y, pixel.on);
    }
}

/// Draws `base` and then overwrites it with `diff`.
pub fn render_composite(
    surface: &mut impl OledSurface,
    base: PixelFrame<'_>,
    diff: PixelFrame<'_>,
    width: u16,
) {
    render_frame(surface, base, width);
    render_frame(surface, diff, width);
}

#[cfg(test)]
#[path = "render_test.rs"]
mod test;
