// src/keysym/mod.rs

//! X keysym to Unicode translation.
//!
//! Four disjoint keysym ranges are checked in priority order, first match
//! wins:
//! 1. Unicode-tagged keysyms (`0x01xxxxxx`) carry the scalar in their low 24 bits.
//! 2. Regular keysyms below `0x20AD`, organised by legacy character-set block.
//! 3. Dead keysyms `0xFE50..=0xFE93`, which map to combining marks.
//! 4. Keypad keysyms `0xFFAA..=0xFFBD`, which map to ASCII.
//!
//! Anything else, and any unpopulated table slot, translates to `0`.

mod tables;

use tables::{
    DEAD_MAP, FIRST_DEAD, FIRST_KEYPAD, KEYPAD_MAP, LAST_DEAD, LAST_KEYPAD, REGULAR_BOUND,
    REGULAR_MAP,
};

/// A raw X keysym.
pub type Keysym = u32;

/// The "no symbol" keysym.
pub const NO_SYMBOL: Keysym = 0;

const UNICODE_TAG_MASK: u32 = 0xFF00_0000;
const UNICODE_TAG: u32 = 0x0100_0000;
const UNICODE_VALUE_MASK: u32 = 0x00FF_FFFF;

#[inline]
pub fn is_unicode_keysym(keysym: Keysym) -> bool {
    keysym & UNICODE_TAG_MASK == UNICODE_TAG
}

#[inline]
pub fn is_regular_keysym(keysym: Keysym) -> bool {
    keysym < REGULAR_BOUND
}

/// Whether `keysym` is a dead (accent-composing) key.
///
/// Independent of translation: a dead keysym whose table slot is empty is
/// still dead.
#[inline]
pub fn keysym_is_dead(keysym: Keysym) -> bool {
    (FIRST_DEAD..=LAST_DEAD).contains(&keysym)
}

#[inline]
pub fn is_keypad_keysym(keysym: Keysym) -> bool {
    (FIRST_KEYPAD..=LAST_KEYPAD).contains(&keysym)
}

/// Translates a keysym to a Unicode scalar value, `0` if it has none.
pub fn keysym_to_unicode(keysym: Keysym) -> u32 {
    if is_unicode_keysym(keysym) {
        keysym & UNICODE_VALUE_MASK
    } else if is_regular_keysym(keysym) {
        REGULAR_MAP[keysym as usize] as u32
    } else if keysym_is_dead(keysym) {
        DEAD_MAP[(keysym - FIRST_DEAD) as usize] as u32
    } else if is_keypad_keysym(keysym) {
        KEYPAD_MAP[(keysym - FIRST_KEYPAD) as usize] as u32
    } else {
        0
    }
}

/// [`keysym_to_unicode`] as a `char`, `None` for `0` and for values that are
/// not valid scalars (a Unicode-tagged keysym can name a surrogate).
pub fn keysym_to_char(keysym: Keysym) -> Option<char> {
    match keysym_to_unicode(keysym) {
        0 => None,
        u => char::from_u32(u),
    }
}

#[cfg(test)]
mod tests;
