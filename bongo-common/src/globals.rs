pub const TAPPING_TERM: u16 = 280;
pub const THUMB_TAPPING_TERM_DELTA: u16 = 150;
pub const TAP_CODE_DELAY: u16 = 50;

pub const OLED_TIMEOUT: u32 = 10_000;

pub const FRAME_DURATION: u32 = 200;
pub const TAP_WINDOW_FRAMES: u32 = 2;
pub const PREP_WINDOW_FRAMES: u32 = 8;

pub const IDLE_FRAMES: usize = 5;
pub const PREP_FRAMES: usize = 1;
pub const TAP_FRAMES: usize = 2;

/// Width of the animation raster. The 128x32 panel is rotated 270 degrees.
pub const OLED_WIDTH: u16 = 32;
pub const OLED_HEIGHT: u16 = 128;
pub const OLED_RASTER_LEN: usize = OLED_WIDTH as usize * OLED_HEIGHT as usize;
