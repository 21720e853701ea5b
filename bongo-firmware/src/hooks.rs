//! Key event hooks called by the host before it processes a keycode.

use bongo_common::{
    globals::{TAPPING_TERM, THUMB_TAPPING_TERM_DELTA},
    keycodes::{
        c, is_left_mod_tap, is_right_mod_tap, key_range, lt, rsft_t, s, tap_keycode, KC_C,
        KC_CAPS, KC_COMM, KC_DOT, KC_ENT, KC_EQL, KC_ESC, KC_GESC, KC_M, KC_SLSH, KC_SPC,
        KC_TAB, KC_V, KC_X, KC_Z,
    },
};
use embassy_time::Instant;

use crate::activity::ActivityTimer;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyRecord {
    pub pressed: bool,
    /// Non zero once a tap-hold key has been resolved as a tap.
    pub tap_count: u8,
}

impl KeyRecord {
    pub const fn press() -> Self {
        Self {
            pressed: true,
            tap_count: 0,
        }
    }

    pub const fn release() -> Self {
        Self {
            pressed: false,
            tap_count: 0,
        }
    }

    pub const fn tapped(mut self, tap_count: u8) -> Self {
        self.tap_count = tap_count;
        self
    }

    pub const fn is_tap(&self) -> bool {
        self.tap_count != 0
    }
}

/// Services the host keyboard framework provides to the hooks.
pub trait KeyHost {
    fn tap_code(&mut self, keycode: u8);
    fn tap_code16(&mut self, keycode: u16);
    fn caps_lock(&self) -> bool;
}

/// A key that sends `keycode` on tap and `hold` once held past the tapping term.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapHold {
    pub keycode: u16,
    pub hold: u16,
}

impl TapHold {
    pub const fn new(keycode: u16, hold: u16) -> Self {
        Self { keycode, hold }
    }
}

pub const UNDO: u16 = c(KC_Z);
pub const CUT: u16 = c(KC_X);
pub const COPY: u16 = c(KC_C);
pub const PASTE: u16 = c(KC_V);
pub const PASTE_PLAIN: u16 = s(c(KC_V));

pub const DEFAULT_TAP_HOLDS: &[TapHold] = &[
    TapHold::new(lt(0, KC_SLSH), UNDO),
    TapHold::new(lt(0, KC_DOT), CUT),
    TapHold::new(lt(0, KC_COMM), COPY),
    TapHold::new(lt(0, KC_M), PASTE),
    TapHold::new(lt(0, KC_V), PASTE_PLAIN),
];

/// Keys that end a capitalised word by switching caps lock off.
pub const DEFAULT_CAPS_BREAKERS: &[u16] =
    &[KC_TAB, KC_ESC, KC_SPC, KC_ENT, KC_DOT, KC_EQL, KC_GESC];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HookConfig {
    pub tapping_term_ms: u16,
    /// Subtracted from the tapping term for right hand mod-taps on the thumbs.
    pub thumb_tapping_delta_ms: u16,
    pub force_hold: u16,
    pub tap_holds: &'static [TapHold],
    pub caps_breakers: &'static [u16],
}

impl HookConfig {
    pub const fn new() -> Self {
        Self {
            tapping_term_ms: TAPPING_TERM,
            thumb_tapping_delta_ms: THUMB_TAPPING_TERM_DELTA,
            force_hold: rsft_t(KC_SPC),
            tap_holds: DEFAULT_TAP_HOLDS,
            caps_breakers: DEFAULT_CAPS_BREAKERS,
        }
    }
}

impl Default for HookConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub struct UserHooks<'a> {
    config: HookConfig,
    activity: &'a ActivityTimer,
}

impl<'a> UserHooks<'a> {
    pub fn new(config: HookConfig, activity: &'a ActivityTimer) -> Self {
        Self { config, activity }
    }

    pub fn config(&self) -> &HookConfig {
        &self.config
    }

    pub fn tapping_term(&self, keycode: u16) -> u16 {
        if is_right_mod_tap(keycode) {
            self.config
                .tapping_term_ms
                .saturating_sub(self.config.thumb_tapping_delta_ms)
        } else {
            self.config.tapping_term_ms
        }
    }

    /// Permissive hold is disabled for tap-hold macros and home row mods.
    pub fn permissive_hold(&self, keycode: u16) -> bool {
        !(key_range::base_code(keycode) == key_range::LT0_BITS || is_left_mod_tap(keycode))
    }

    pub fn tapping_force_hold(&self, keycode: u16) -> bool {
        keycode == self.config.force_hold
    }

    /// Returns `false` when the host should stop processing `keycode`.
    pub fn process_record(
        &self,
        host: &mut impl KeyHost,
        keycode: u16,
        record: &KeyRecord,
        now: Instant,
    ) -> bool {
        if record.pressed {
            self.activity.record_press(now);

            if host.caps_lock() {
                self.process_caps_word(host, keycode, record);
            }
        }

        match self.config.tap_holds.iter().find(|th| th.keycode == keycode) {
            Some(th) => process_tap_hold(host, th.hold, record),
            None => true,
        }
    }

    fn process_caps_word(&self, host: &mut impl KeyHost, keycode: u16, record: &KeyRecord) {
        let keycode = if record.is_tap() {
            tap_keycode(keycode)
        } else {
            keycode
        };
        if self.config.caps_breakers.contains(&keycode) {
            crate::debug!("caps lock off by {:?}", keycode);
            host.tap_code(KC_CAPS as u8);
        }
    }
}

fn process_tap_hold(host: &mut impl KeyHost, hold: u16, record: &KeyRecord) -> bool {
    if record.is_tap() {
        return true;
    }
    if record.pressed {
        host.tap_code16(hold);
    }
    false
}

#[cfg(test)]
#[path = "hooks_test.rs"]
mod test;
