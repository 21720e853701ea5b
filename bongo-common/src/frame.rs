//! Count-prefixed pixel frames.
//!
//! A frame is a slice of `u16` words. The first word is the number of pixel entries that follow.
//! Each pixel entry holds a linear raster index (`y * width + x`) in bits `0..=14` and the lit
//! state in bit 15.
//!
//! ```
//! use bongo_common::frame::{Pixel, PixelFrame};
//!
//! const FRAME: PixelFrame = PixelFrame::checked(&[2, 0x8021, 0x0003], 64);
//!
//! let pixels: Vec<Pixel> = FRAME.pixels().collect();
//! assert_eq!(pixels[0].xy(32), (1, 1));
//! assert!(pixels[0].on);
//! assert!(!pixels[1].on);
//! ```

use core::fmt;

pub const PIXEL_ON: u16 = 1 << 15;
pub const INDEX_MASK: u16 = !PIXEL_ON;
/// Largest raster a frame can address.
pub const MAX_RASTER_LEN: usize = INDEX_MASK as usize + 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub index: u16,
    pub on: bool,
}

impl Pixel {
    pub const fn new(index: u16, on: bool) -> Self {
        Self { index, on }
    }

    pub const fn at(x: u16, y: u16, width: u16, on: bool) -> Self {
        Self::new(y * width + x, on)
    }

    pub const fn decode(word: u16) -> Self {
        Self {
            index: word & INDEX_MASK,
            on: word & PIXEL_ON != 0,
        }
    }

    pub const fn encode(self) -> u16 {
        if self.on {
            (self.index & INDEX_MASK) | PIXEL_ON
        } else {
            self.index & INDEX_MASK
        }
    }

    pub const fn xy(self, width: u16) -> (u16, u16) {
        (self.index % width, self.index / width)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameError {
    /// No count word.
    Empty,
    CountMismatch { declared: usize, actual: usize },
    /// `position` is the word offset within the frame, counting the count word.
    OutOfRange { position: usize, index: u16 },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Empty => write!(f, "frame is missing its count word"),
            FrameError::CountMismatch { declared, actual } => write!(
                f,
                "frame declares {declared} pixels but has {actual} pixel entries"
            ),
            FrameError::OutOfRange { position, index } => {
                write!(f, "pixel index {index} at word {position} is outside the raster")
            }
        }
    }
}

/// Checks the count word and that every pixel index is below `raster_len`.
pub const fn validate(words: &[u16], raster_len: usize) -> Result<(), FrameError> {
    if words.is_empty() {
        return Err(FrameError::Empty);
    }
    let declared = words[0] as usize;
    let actual = words.len() - 1;
    if declared != actual {
        return Err(FrameError::CountMismatch { declared, actual });
    }
    let mut i = 1;
    while i < words.len() {
        let index = words[i] & INDEX_MASK;
        if index as usize >= raster_len {
            return Err(FrameError::OutOfRange { position: i, index });
        }
        i += 1;
    }
    Ok(())
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PixelFrame<'a>(&'a [u16]);

impl<'a> PixelFrame<'a> {
    pub const EMPTY: PixelFrame<'static> = PixelFrame(&[0]);

    /// Wraps `words` without checking them.
    pub const fn new(words: &'a [u16]) -> Self {
        Self(words)
    }

    /// Wraps `words`, failing constant evaluation when the frame is malformed.
    pub const fn checked(words: &'a [u16], raster_len: usize) -> Self {
        match validate(words, raster_len) {
            Ok(()) => Self(words),
            Err(FrameError::Empty) => panic!("pixel frame is missing its count word"),
            Err(FrameError::CountMismatch { .. }) => {
                panic!("pixel frame count does not match its entries")
            }
            Err(FrameError::OutOfRange { .. }) => panic!("pixel index is outside the raster"),
        }
    }

    pub const fn words(&self) -> &'a [u16] {
        self.0
    }

    /// Number of pixel entries actually present.
    pub const fn len(&self) -> usize {
        match self.0.split_first() {
            Some((count, rest)) => {
                if (*count as usize) < rest.len() {
                    *count as usize
                } else {
                    rest.len()
                }
            }
            None => 0,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + 'a {
        let entries = match self.0.split_first() {
            Some((_, rest)) => rest,
            None => &[],
        };
        entries[..self.len()].iter().map(|w| Pixel::decode(*w))
    }
}

#[cfg(test)]
#[path = "frame_test.rs"]
mod test;
