// src/keys.rs

use crate::keyboard::KeyResolution;
use crate::keysym::Keysym;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use x11::keysym;

// Core protocol modifier bits of a key event state field.
const STATE_SHIFT: u32 = 1 << 0;
const STATE_LOCK: u32 = 1 << 1;
const STATE_CONTROL: u32 = 1 << 2;
const STATE_MOD1: u32 = 1 << 3; // Alt
const STATE_MOD2: u32 = 1 << 4; // NumLock
const STATE_MOD4: u32 = 1 << 6; // Super
const STATE_MOD5: u32 = 1 << 7; // ISO_Level3_Shift (AltGr)

bitflags! {
    /// Represents a keyboard modifier.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2;
        const SUPER = 1 << 3;
        const CAPS_LOCK = 1 << 4;
        const NUM_LOCK = 1 << 5;
        const ALT_GR = 1 << 6;
    }
}

impl Modifiers {
    /// Decodes the modifier bits of a raw key event state field, using the
    /// conventional assignment of Mod1/Mod2/Mod4/Mod5.
    pub fn from_x11_state(state: u32) -> Self {
        let mut mods = Modifiers::empty();
        mods.set(Modifiers::SHIFT, state & STATE_SHIFT != 0);
        mods.set(Modifiers::CAPS_LOCK, state & STATE_LOCK != 0);
        mods.set(Modifiers::CONTROL, state & STATE_CONTROL != 0);
        mods.set(Modifiers::ALT, state & STATE_MOD1 != 0);
        mods.set(Modifiers::NUM_LOCK, state & STATE_MOD2 != 0);
        mods.set(Modifiers::SUPER, state & STATE_MOD4 != 0);
        mods.set(Modifiers::ALT_GR, state & STATE_MOD5 != 0);
        mods
    }
}

/// Coarse meaning of a resolved key.
///
/// Printing keys become `Char`; dead keys keep their combining mark so the
/// caller can compose; the common non-printing keys are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum KeySymbol {
    Char(char),
    Dead(char),

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    Shift,
    Control,
    Alt,
    Super,
    CapsLock,
    NumLock,

    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,

    Enter,
    Backspace,
    Tab,
    Escape,

    #[default]
    Unknown,
}

impl KeySymbol {
    pub fn from_resolution(res: &KeyResolution) -> Self {
        match res.as_char() {
            Some(c) if res.is_dead => KeySymbol::Dead(c),
            Some(c) if !c.is_control() => KeySymbol::Char(c),
            _ => Self::from_keysym(res.keysym),
        }
    }

    /// Names the non-printing keys; anything else is `Unknown`.
    pub fn from_keysym(ks: Keysym) -> Self {
        match ks {
            keysym::XK_Return | keysym::XK_KP_Enter => KeySymbol::Enter,
            keysym::XK_BackSpace => KeySymbol::Backspace,
            keysym::XK_Tab | keysym::XK_ISO_Left_Tab => KeySymbol::Tab,
            keysym::XK_Escape => KeySymbol::Escape,
            keysym::XK_Home | keysym::XK_KP_Home => KeySymbol::Home,
            keysym::XK_End | keysym::XK_KP_End => KeySymbol::End,
            keysym::XK_Left | keysym::XK_KP_Left => KeySymbol::Left,
            keysym::XK_Right | keysym::XK_KP_Right => KeySymbol::Right,
            keysym::XK_Up | keysym::XK_KP_Up => KeySymbol::Up,
            keysym::XK_Down | keysym::XK_KP_Down => KeySymbol::Down,
            keysym::XK_Prior | keysym::XK_KP_Prior => KeySymbol::PageUp,
            keysym::XK_Next | keysym::XK_KP_Next => KeySymbol::PageDown,
            keysym::XK_Insert | keysym::XK_KP_Insert => KeySymbol::Insert,
            keysym::XK_Delete | keysym::XK_KP_Delete => KeySymbol::Delete,
            keysym::XK_F1 => KeySymbol::F1,
            keysym::XK_F2 => KeySymbol::F2,
            keysym::XK_F3 => KeySymbol::F3,
            keysym::XK_F4 => KeySymbol::F4,
            keysym::XK_F5 => KeySymbol::F5,
            keysym::XK_F6 => KeySymbol::F6,
            keysym::XK_F7 => KeySymbol::F7,
            keysym::XK_F8 => KeySymbol::F8,
            keysym::XK_F9 => KeySymbol::F9,
            keysym::XK_F10 => KeySymbol::F10,
            keysym::XK_F11 => KeySymbol::F11,
            keysym::XK_F12 => KeySymbol::F12,
            keysym::XK_Shift_L | keysym::XK_Shift_R => KeySymbol::Shift,
            keysym::XK_Control_L | keysym::XK_Control_R => KeySymbol::Control,
            keysym::XK_Alt_L | keysym::XK_Alt_R | keysym::XK_Meta_L | keysym::XK_Meta_R => {
                KeySymbol::Alt
            }
            keysym::XK_Super_L | keysym::XK_Super_R => KeySymbol::Super,
            keysym::XK_Caps_Lock => KeySymbol::CapsLock,
            keysym::XK_Num_Lock => KeySymbol::NumLock,
            _ => KeySymbol::Unknown,
        }
    }

    /// Returns true if the key symbol represents a modifier key.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            KeySymbol::Shift
                | KeySymbol::Control
                | KeySymbol::Alt
                | KeySymbol::Super
                | KeySymbol::CapsLock
                | KeySymbol::NumLock
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn res(keysym: Keysym) -> KeyResolution {
        KeyResolution {
            keysym,
            unicode: crate::keysym::keysym_to_unicode(keysym),
            is_dead: crate::keysym::keysym_is_dead(keysym),
        }
    }

    #[test]
    fn it_should_decode_core_modifier_bits() {
        assert_eq!(Modifiers::from_x11_state(0), Modifiers::empty());
        assert_eq!(
            Modifiers::from_x11_state(0x01 | 0x04),
            Modifiers::SHIFT | Modifiers::CONTROL
        );
        assert_eq!(
            Modifiers::from_x11_state(0x08 | 0x10 | 0x40 | 0x80),
            Modifiers::ALT | Modifiers::NUM_LOCK | Modifiers::SUPER | Modifiers::ALT_GR
        );
        // Group bits and Mod3 carry no modifier.
        assert_eq!(Modifiers::from_x11_state(0x6000 | 0x20), Modifiers::empty());
    }

    #[test]
    fn it_should_classify_printing_dead_and_named_keys() {
        assert_eq!(KeySymbol::from_resolution(&res(keysym::XK_a)), KeySymbol::Char('a'));
        assert_eq!(KeySymbol::from_resolution(&res(0xffb7)), KeySymbol::Char('7'));
        assert_eq!(
            KeySymbol::from_resolution(&res(keysym::XK_dead_grave)),
            KeySymbol::Dead('\u{300}')
        );
        assert_eq!(KeySymbol::from_resolution(&res(keysym::XK_Return)), KeySymbol::Enter);
        assert_eq!(KeySymbol::from_resolution(&res(keysym::XK_KP_Left)), KeySymbol::Left);
        assert_eq!(KeySymbol::from_resolution(&res(keysym::XK_F12)), KeySymbol::F12);
        assert_eq!(KeySymbol::from_resolution(&res(0)), KeySymbol::Unknown);
        assert!(KeySymbol::from_keysym(keysym::XK_Shift_R).is_modifier());
    }
}
