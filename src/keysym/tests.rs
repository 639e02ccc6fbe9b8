// src/keysym/tests.rs

use super::*;

#[test]
fn it_should_return_low_24_bits_of_unicode_tagged_keysyms() {
    for low in (0..=0x00FF_FFFFu32).step_by(0x1_0001) {
        assert_eq!(keysym_to_unicode(0x0100_0000 | low), low);
    }
    assert_eq!(keysym_to_unicode(0x0100_20AC), 0x20AC);
    // Only top byte 0x01 is the tag.
    assert_eq!(keysym_to_unicode(0x0200_0041), 0);
}

#[test]
fn it_should_translate_one_keysym_from_each_range() {
    assert_eq!(keysym_to_unicode(0x0061), 0x0061); // a
    assert_eq!(keysym_to_unicode(0x01a1), 0x0104); // Aogonek
    assert_eq!(keysym_to_unicode(0xfe51), 0x0301); // dead_acute
    assert_eq!(keysym_to_unicode(0xffb5), 0x0035); // KP_5
    assert_eq!(keysym_to_unicode(0xfe00), 0);
}

#[test]
fn it_should_cover_the_historical_blocks() {
    assert_eq!(keysym_to_unicode(0x06c1), 0x0430); // Cyrillic_a
    assert_eq!(keysym_to_unicode(0x07e1), 0x03B1); // Greek_alpha
    assert_eq!(keysym_to_unicode(0x05c7), 0x0627); // Arabic_alef
    assert_eq!(keysym_to_unicode(0x0ce0), 0x05D0); // hebrew_aleph
    assert_eq!(keysym_to_unicode(0x0da1), 0x0E01); // Thai_kokai
    assert_eq!(keysym_to_unicode(0x20ac), 0x20AC); // EuroSign
    assert_eq!(keysym_to_unicode(0x13bd), 0x0153); // oe
}

#[test]
fn it_should_return_zero_for_unpopulated_and_out_of_range_keysyms() {
    assert_eq!(keysym_to_unicode(NO_SYMBOL), 0);
    assert_eq!(keysym_to_unicode(0x0001), 0);
    assert_eq!(keysym_to_unicode(0x20ad), 0);
    assert_eq!(keysym_to_unicode(0xfe6f), 0); // dead_currency, unmapped
    assert_eq!(keysym_to_unicode(0xff0d), 0); // Return
    assert_eq!(keysym_to_unicode(0xffba), 0); // hole in the keypad range
    assert_eq!(keysym_to_unicode(0xffbe), 0); // F1
}

#[test]
fn it_should_map_keypad_operators_to_ascii() {
    assert_eq!(keysym_to_unicode(0xffaa), '*' as u32);
    assert_eq!(keysym_to_unicode(0xffab), '+' as u32);
    assert_eq!(keysym_to_unicode(0xffaf), '/' as u32);
    assert_eq!(keysym_to_unicode(0xffbd), '=' as u32);
}

#[test]
fn it_should_report_dead_keys_by_range_only() {
    assert!(!keysym_is_dead(0xfe4f));
    assert!(keysym_is_dead(0xfe50));
    assert!(keysym_is_dead(0xfe6f)); // dead even without a translation
    assert!(keysym_is_dead(0xfe93));
    assert!(!keysym_is_dead(0xfe94));
    for ks in 0xfe50..=0xfe93 {
        assert!(keysym_is_dead(ks));
    }
}

#[test]
fn it_should_convert_to_char_when_valid() {
    assert_eq!(keysym_to_char(0x0041), Some('A'));
    assert_eq!(keysym_to_char(0x0100_D800), None); // surrogate
    assert_eq!(keysym_to_char(0xff0d), None);
}
