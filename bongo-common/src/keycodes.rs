//! Keycode values as the host keyboard framework numbers them.

pub const KC_NO: u16 = 0x00;
pub const KC_TRNS: u16 = 0x01;
pub const KC_A: u16 = 0x04;
pub const KC_C: u16 = 0x06;
pub const KC_M: u16 = 0x10;
pub const KC_N: u16 = 0x11;
pub const KC_Q: u16 = 0x14;
pub const KC_T: u16 = 0x17;
pub const KC_V: u16 = 0x19;
pub const KC_W: u16 = 0x1a;
pub const KC_X: u16 = 0x1b;
pub const KC_Z: u16 = 0x1d;
pub const KC_ENT: u16 = 0x28;
pub const KC_ESC: u16 = 0x29;
pub const KC_TAB: u16 = 0x2b;
pub const KC_SPC: u16 = 0x2c;
pub const KC_EQL: u16 = 0x2e;
pub const KC_COMM: u16 = 0x36;
pub const KC_DOT: u16 = 0x37;
pub const KC_SLSH: u16 = 0x38;
pub const KC_CAPS: u16 = 0x39;

/// Escape, or grave when shift or GUI is held.
pub const KC_GESC: u16 = key_range::GRAVE_ESCAPE;

/// Modifier bits used inside mod-tap keycodes.
pub mod mods {
    pub const LCTL: u8 = 0x01;
    pub const LSFT: u8 = 0x02;
    pub const LALT: u8 = 0x04;
    pub const LGUI: u8 = 0x08;
    pub const RIGHT: u8 = 0x10;
    pub const RCTL: u8 = RIGHT | LCTL;
    pub const RSFT: u8 = RIGHT | LSFT;
    pub const RALT: u8 = RIGHT | LALT;
    pub const RGUI: u8 = RIGHT | LGUI;
}

/// HID report modifier byte bits.
pub mod mod_bits {
    pub const LCTRL: u8 = 0x01;
    pub const LSHIFT: u8 = 0x02;
    pub const LALT: u8 = 0x04;
    pub const LGUI: u8 = 0x08;
    pub const RCTRL: u8 = 0x10;
    pub const RSHIFT: u8 = 0x20;
    pub const RALT: u8 = 0x40;
    pub const RGUI: u8 = 0x80;

    pub const MASK_CTRL: u8 = LCTRL | RCTRL;
    pub const MASK_SHIFT: u8 = LSHIFT | RSHIFT;
    pub const MASK_ALT: u8 = LALT | RALT;
    pub const MASK_GUI: u8 = LGUI | RGUI;
    pub const MASK_CSAG: u8 = MASK_CTRL | MASK_SHIFT | MASK_ALT | MASK_GUI;
}

pub mod key_range {
    pub const BASIC_MIN: u16 = 0x04;
    pub const BASIC_MAX: u16 = 0xff;

    pub const MODS: u16 = 0x0100;
    pub const MODS_MAX: u16 = 0x1fff;

    pub const LAYER_TAP: u16 = 0x4000;
    pub const LAYER_TAP_MAX: u16 = 0x4fff;

    pub const GRAVE_ESCAPE: u16 = 0x5c16;

    pub const MOD_TAP: u16 = 0x6000;
    pub const MOD_TAP_MAX: u16 = 0x7fff;

    /// High byte shared by every `LT(0, kc)` keycode.
    pub const LT0_BITS: u16 = LAYER_TAP;
    /// High nibble shared by every left hand mod-tap keycode.
    pub const LMT_BITS: u16 = MOD_TAP;
    /// High nibble shared by every right hand mod-tap keycode.
    pub const RMT_BITS: u16 = MOD_TAP | 0x1000;

    pub const fn base_code(code: u16) -> u16 {
        code & 0xff00
    }
}

/// `LT(layer, kc)`: `kc` on tap, momentary `layer` on hold.
pub const fn lt(layer: u8, kc: u16) -> u16 {
    key_range::LAYER_TAP | ((layer as u16 & 0xf) << 8) | (kc & 0xff)
}

/// `MT(mods, kc)`: `kc` on tap, `mods` on hold.
pub const fn mt(mods: u8, kc: u16) -> u16 {
    key_range::MOD_TAP | ((mods as u16 & 0x1f) << 8) | (kc & 0xff)
}

/// `C(kc)`: `kc` with left control.
pub const fn c(kc: u16) -> u16 {
    kc | ((mods::LCTL as u16) << 8)
}

/// `S(kc)`: `kc` with left shift.
pub const fn s(kc: u16) -> u16 {
    kc | ((mods::LSFT as u16) << 8)
}

pub const fn rsft_t(kc: u16) -> u16 {
    mt(mods::RSFT, kc)
}

pub const fn is_layer_tap(kc: u16) -> bool {
    kc >= key_range::LAYER_TAP && kc <= key_range::LAYER_TAP_MAX
}

pub const fn is_mod_tap(kc: u16) -> bool {
    kc >= key_range::MOD_TAP && kc <= key_range::MOD_TAP_MAX
}

pub const fn is_right_mod_tap(kc: u16) -> bool {
    kc & 0xf000 == key_range::RMT_BITS
}

pub const fn is_left_mod_tap(kc: u16) -> bool {
    kc & 0xf000 == key_range::LMT_BITS
}

/// The keycode sent when a mod-tap or layer-tap key is tapped. Other keycodes are returned
/// unchanged.
pub const fn tap_keycode(kc: u16) -> u16 {
    if is_layer_tap(kc) || is_mod_tap(kc) {
        kc & 0xff
    } else {
        kc
    }
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
