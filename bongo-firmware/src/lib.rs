#![no_std]
pub mod activity;
pub mod animation;
pub mod bongocat;
pub mod hooks;
pub mod indicators;
pub mod oled;
pub mod render;

#[cfg(any(test, feature = "test-utils"))]
pub mod oled_test_stub;
#[cfg(test)]
pub mod time_driver_test_stub;

#[macro_use]
mod macros;

pub use activity::{ActivitySource, ActivityTimer};
pub use animation::{AnimationConfig, AnimationState, Animator, BongoCat, Tick};
pub use bongocat::Orientation;
pub use oled::{init_rotation, OledSurface, Rotation};

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;
