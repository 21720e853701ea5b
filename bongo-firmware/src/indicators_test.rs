extern crate std;

use std::vec::Vec;

use bongo_common::keycodes::{mod_bits, KC_A, KC_NO};

use super::*;
use led_flags::*;

#[derive(Default)]
struct TestDriver {
    set: Vec<(usize, Rgb)>,
    all: Vec<Rgb>,
}

impl LedDriver for TestDriver {
    fn set_color(&mut self, index: usize, color: Rgb) {
        self.set.push((index, color));
    }

    fn set_color_all(&mut self, color: Rgb) {
        self.all.push(color);
    }
}

/// Layer 2 has a key on leds 0 and 3 only; led 4 is underglow.
struct TestKeymap;

impl Keymap for TestKeymap {
    fn led_keycode(&self, layer: u8, led: usize) -> Option<u16> {
        match (layer, led) {
            (_, 4) => None,
            (2, 0) | (2, 3) => Some(KC_A),
            (2, 1) => Some(KC_TRNS),
            _ => Some(KC_NO),
        }
    }
}

fn leds() -> LedConfig<5> {
    LedConfig::new(&[MODIFIER, KEYLIGHT, KEYLIGHT, MODIFIER | KEYLIGHT, UNDERGLOW])
}

fn indices(driver: &TestDriver) -> Vec<usize> {
    driver.set.iter().map(|(i, _)| *i).collect()
}

#[test]
fn nothing_active() {
    let mut driver = TestDriver::default();
    Indicators::default().render(&mut driver, &leds(), &TestKeymap, &IndicatorState::default());
    assert!(driver.set.is_empty());
    assert!(driver.all.is_empty());
}

#[test]
fn caps_lock_lights_caps_leds() {
    let ind = Indicators::default();
    let mut driver = TestDriver::default();
    let state = IndicatorState {
        caps_lock: true,
        ..Default::default()
    };
    ind.render(&mut driver, &leds(), &TestKeymap, &state);

    assert_eq!(indices(&driver), [1, 2, 3]);
    assert!(driver.set.iter().all(|(_, c)| *c == ind.caps_color));
}

#[test]
fn modifiers_light_mod_leds() {
    let ind = Indicators::default();
    let mut driver = TestDriver::default();
    let state = IndicatorState {
        mods: mod_bits::RSHIFT,
        ..Default::default()
    };
    ind.render(&mut driver, &leds(), &TestKeymap, &state);

    assert_eq!(driver.set, [(0, ind.mods_color), (3, ind.mods_color)]);
}

#[test]
fn layer_keys_light_on_upper_layers() {
    let ind = Indicators::default();
    let mut driver = TestDriver::default();

    let state = IndicatorState {
        layer_state: 0b11,
        ..Default::default()
    };
    ind.render(&mut driver, &leds(), &TestKeymap, &state);
    assert!(driver.set.is_empty(), "alternate base layer is not indicated");

    let state = IndicatorState {
        layer_state: 0b101,
        ..Default::default()
    };
    ind.render(&mut driver, &leds(), &TestKeymap, &state);
    assert_eq!(driver.set, [(0, ind.layer_color), (3, ind.layer_color)]);
}

#[test]
fn layer_all_style() {
    let ind = Indicators {
        layer_style: LayerStyle::All,
        ..Default::default()
    };
    let mut driver = TestDriver::default();
    let state = IndicatorState {
        layer_state: 0b1000,
        ..Default::default()
    };
    ind.render(&mut driver, &leds(), &TestKeymap, &state);

    assert_eq!(driver.all, [ind.layer_color]);
    assert!(driver.set.is_empty());
}

#[test]
fn underglow_can_be_disabled() {
    let mut leds = leds();
    let ind = Indicators {
        caps_flags: UNDERGLOW | KEYLIGHT,
        ..Default::default()
    };
    let state = IndicatorState {
        caps_lock: true,
        ..Default::default()
    };

    let mut driver = TestDriver::default();
    ind.render(&mut driver, &leds, &TestKeymap, &state);
    assert_eq!(indices(&driver), [1, 2, 3, 4]);

    leds.disable_underglow();
    assert_eq!(leds.flags(4), NONE);

    let mut driver = TestDriver::default();
    ind.render(&mut driver, &leds, &TestKeymap, &state);
    assert_eq!(indices(&driver), [1, 2, 3]);
}

#[test]
fn led_config_flags() {
    let mut leds = leds();
    leds.set_flags(1, KEYLIGHT | MODIFIER);
    assert_eq!(leds.flags(1), KEYLIGHT | MODIFIER);
    assert_eq!(leds.flags(99), NONE);

    let big = LedConfig::<2>::new(&[KEYLIGHT, KEYLIGHT, KEYLIGHT]);
    assert_eq!(big.len(), 2);
}

#[test]
fn highest_layer_of_state() {
    assert_eq!(highest_layer(0), 0);
    assert_eq!(highest_layer(1), 0);
    assert_eq!(highest_layer(0b110), 2);
    assert_eq!(highest_layer(0x80), 7);
}

#[test]
fn effect_follows_alternate_layer() {
    let ind = Indicators::default();
    assert_eq!(ind.effect_for_layers(0b1), ind.default_effect);
    assert_eq!(ind.effect_for_layers(0b11), ind.alternate_effect);
    assert_eq!(ind.effect_for_layers(0b101), ind.default_effect);
}

#[test]
fn alternate_layer_beyond_mask_uses_default_effect() {
    let ind = Indicators {
        alternate_layer: 8,
        ..Indicators::default()
    };
    assert_eq!(ind.effect_for_layers(0xff), ind.default_effect);

    let ind = Indicators {
        alternate_layer: 7,
        ..Indicators::default()
    };
    assert_eq!(ind.effect_for_layers(0x80), ind.alternate_effect);
}
