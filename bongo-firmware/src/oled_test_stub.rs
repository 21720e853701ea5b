extern crate alloc;
extern crate std;

use alloc::vec;
use std::vec::Vec;

use crate::oled::OledSurface;

/// An in memory display that records every call made to it.
#[derive(Debug)]
pub struct TestOled {
    pub width: u16,
    pub height: u16,
    raster: Vec<bool>,
    pub writes: Vec<(u16, u16, bool)>,
    pub clears: usize,
    pub offs: usize,
    powered: bool,
}

impl TestOled {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            raster: vec![false; width as usize * height as usize],
            writes: Vec::new(),
            clears: 0,
            offs: 0,
            powered: true,
        }
    }

    pub fn pixel(&self, x: u16, y: u16) -> bool {
        self.raster[y as usize * self.width as usize + x as usize]
    }

    /// Linear indexes of every lit pixel, in raster order.
    pub fn lit(&self) -> Vec<u16> {
        self.raster
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i as u16)
            .collect()
    }

    pub fn take_writes(&mut self) -> Vec<(u16, u16, bool)> {
        core::mem::take(&mut self.writes)
    }
}

impl OledSurface for TestOled {
    fn set_pixel(&mut self, x: u16, y: u16, on: bool) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) off screen");
        let i = y as usize * self.width as usize + x as usize;
        self.raster[i] = on;
        self.writes.push((x, y, on));
    }

    fn clear(&mut self) {
        self.raster.iter_mut().for_each(|p| *p = false);
        self.clears += 1;
    }

    fn off(&mut self) {
        self.powered = false;
        self.offs += 1;
    }

    fn on(&mut self) {
        self.powered = true;
    }

    fn is_on(&self) -> bool {
        self.powered
    }
}
