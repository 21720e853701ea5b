//! Display primitives supplied by the host OLED driver.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

/// A pixel addressable display. Implemented by the host for its OLED driver.
pub trait OledSurface {
    fn set_pixel(&mut self, x: u16, y: u16, on: bool);
    fn clear(&mut self);
    fn off(&mut self);
    fn on(&mut self);
    fn is_on(&self) -> bool;
}

/// Display rotation the animation tables are drawn for. The host applies it once at setup.
pub const fn init_rotation() -> Rotation {
    Rotation::R270
}
