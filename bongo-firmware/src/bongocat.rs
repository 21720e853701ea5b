//! Left and right aligned bongocat frame bundles.
//!
//! Both bundles are built at compile time; a malformed table fails the build.

use bongo_common::{
    frame::PixelFrame,
    globals::{IDLE_FRAMES, OLED_HEIGHT, OLED_RASTER_LEN, OLED_WIDTH, PREP_FRAMES, TAP_FRAMES},
};

use tables::*;

mod tables;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    Left,
    Right,
}

impl Orientation {
    /// Picks the cat that faces into the keyboard for this half.
    pub const fn from_is_left(is_left: bool) -> Self {
        if is_left {
            Orientation::Left
        } else {
            Orientation::Right
        }
    }
}

/// One orientation's base pose and the diff frames for every animation state.
#[derive(Debug)]
pub struct CatFrames {
    pub width: u16,
    pub height: u16,
    pub base: PixelFrame<'static>,
    pub idle: [PixelFrame<'static>; IDLE_FRAMES],
    pub prep: [PixelFrame<'static>; PREP_FRAMES],
    pub tap: [PixelFrame<'static>; TAP_FRAMES],
}

impl CatFrames {
    pub fn for_orientation(orientation: Orientation) -> &'static CatFrames {
        match orientation {
            Orientation::Left => &LEFT_CAT,
            Orientation::Right => &RIGHT_CAT,
        }
    }

    pub fn raster_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Every frame in the bundle, base first.
    pub fn all_frames(&self) -> impl Iterator<Item = &PixelFrame<'static>> {
        core::iter::once(&self.base)
            .chain(self.idle.iter())
            .chain(self.prep.iter())
            .chain(self.tap.iter())
    }
}

const fn frame(words: &'static [u16]) -> PixelFrame<'static> {
    PixelFrame::checked(words, OLED_RASTER_LEN)
}

const NO_CHANGE: PixelFrame<'static> = PixelFrame::EMPTY;

pub static RIGHT_CAT: CatFrames = CatFrames {
    width: OLED_WIDTH,
    height: OLED_HEIGHT,
    base: frame(RIGHT_BASE),
    idle: [
        NO_CHANGE,
        NO_CHANGE,
        frame(RIGHT_IDLE1),
        frame(RIGHT_IDLE2),
        frame(RIGHT_IDLE3),
    ],
    prep: [frame(RIGHT_PREP0)],
    tap: [frame(RIGHT_TAP0), frame(RIGHT_TAP1)],
};

pub static LEFT_CAT: CatFrames = CatFrames {
    width: OLED_WIDTH,
    height: OLED_HEIGHT,
    base: frame(LEFT_BASE),
    idle: [
        NO_CHANGE,
        NO_CHANGE,
        frame(LEFT_IDLE1),
        frame(LEFT_IDLE2),
        frame(LEFT_IDLE3),
    ],
    prep: [frame(LEFT_PREP0)],
    tap: [frame(LEFT_TAP0), frame(LEFT_TAP1)],
};

#[cfg(test)]
#[path = "bongocat_test.rs"]
mod test;
