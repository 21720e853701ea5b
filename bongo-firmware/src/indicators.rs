//! RGB matrix indicators drawn over the running effect.

use bongo_common::keycodes::{mod_bits::MASK_CSAG, KC_TRNS};
use heapless::Vec;

pub mod led_flags {
    pub const NONE: u8 = 0x00;
    pub const MODIFIER: u8 = 0x01;
    pub const UNDERGLOW: u8 = 0x02;
    pub const KEYLIGHT: u8 = 0x04;
    pub const INDICATOR: u8 = 0x08;
    pub const ALL: u8 = 0xff;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per LED colour writes supplied by the host LED driver.
pub trait LedDriver {
    fn set_color(&mut self, index: usize, color: Rgb);
    fn set_color_all(&mut self, color: Rgb);
}

/// Looks up the keycode of the key under an LED.
pub trait Keymap {
    /// `None` for LEDs with no key, such as underglow.
    fn led_keycode(&self, layer: u8, led: usize) -> Option<u16>;
}

/// The flags of each LED on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedConfig<const LEDS: usize> {
    flags: Vec<u8, LEDS>,
}

impl<const LEDS: usize> LedConfig<LEDS> {
    /// Flags past `LEDS` are ignored.
    pub fn new(flags: &[u8]) -> Self {
        Self {
            flags: flags.iter().take(LEDS).copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn flags(&self, index: usize) -> u8 {
        self.flags.get(index).copied().unwrap_or(led_flags::NONE)
    }

    pub fn set_flags(&mut self, index: usize, flags: u8) {
        match self.flags.get_mut(index) {
            Some(f) => *f = flags,
            None => crate::warn!("no led {}", index),
        }
    }

    /// Stops the indicators from lighting underglow LEDs.
    pub fn disable_underglow(&mut self) {
        for f in self.flags.iter_mut() {
            if *f & led_flags::UNDERGLOW == led_flags::UNDERGLOW {
                *f = led_flags::NONE;
            }
        }
    }

    fn matching(&self, mask: u8) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(move |(_, f)| **f & mask != 0)
            .map(|(i, _)| i)
    }
}

/// Highest active layer in an 8 layer state mask.
pub const fn highest_layer(layer_state: u8) -> u8 {
    if layer_state == 0 {
        0
    } else {
        7 - layer_state.leading_zeros() as u8
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorState {
    pub caps_lock: bool,
    /// HID modifier byte.
    pub mods: u8,
    pub layer_state: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerStyle {
    /// Light keys that do something on the active layer.
    Keys,
    /// Light the whole board.
    All,
}

/// A host RGB matrix effect id.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EffectMode(pub u8);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Indicators {
    pub caps_color: Rgb,
    pub mods_color: Rgb,
    pub layer_color: Rgb,
    pub caps_flags: u8,
    pub mod_flags: u8,
    /// Alternate base layer; layers above it get the layer indicator.
    pub alternate_layer: u8,
    pub layer_style: LayerStyle,
    pub default_effect: EffectMode,
    pub alternate_effect: EffectMode,
}

impl Indicators {
    pub const fn new() -> Self {
        Self {
            caps_color: Rgb::new(0xff, 0x40, 0x00),
            mods_color: Rgb::new(0x00, 0xff, 0xff),
            layer_color: Rgb::new(0x7a, 0x00, 0xff),
            caps_flags: led_flags::KEYLIGHT | led_flags::INDICATOR,
            mod_flags: led_flags::MODIFIER,
            alternate_layer: 1,
            layer_style: LayerStyle::Keys,
            default_effect: EffectMode(1),
            alternate_effect: EffectMode(2),
        }
    }

    /// Effect to run after a layer change.
    pub fn effect_for_layers(&self, layer_state: u8) -> EffectMode {
        let bit = 1u8.checked_shl(self.alternate_layer as u32).unwrap_or(0);
        if layer_state & bit != 0 {
            self.alternate_effect
        } else {
            self.default_effect
        }
    }

    pub fn render<const LEDS: usize>(
        &self,
        driver: &mut impl LedDriver,
        leds: &LedConfig<LEDS>,
        keymap: &impl Keymap,
        state: &IndicatorState,
    ) {
        if state.caps_lock {
            for i in leds.matching(self.caps_flags) {
                driver.set_color(i, self.caps_color);
            }
        }

        if state.mods & MASK_CSAG != 0 {
            for i in leds.matching(self.mod_flags) {
                driver.set_color(i, self.mods_color);
            }
        }

        let layer = highest_layer(state.layer_state);
        if layer > self.alternate_layer {
            match self.layer_style {
                LayerStyle::All => driver.set_color_all(self.layer_color),
                LayerStyle::Keys => {
                    for i in 0..leds.len() {
                        if keymap.led_keycode(layer, i).is_some_and(|kc| kc > KC_TRNS) {
                            driver.set_color(i, self.layer_color);
                        }
                    }
                }
            }
        }
    }
}

impl Default for Indicators {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "indicators_test.rs"]
mod test;
