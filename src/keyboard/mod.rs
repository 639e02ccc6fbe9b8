// src/keyboard/mod.rs

//! XKB-style keyboard state resolution.
//!
//! A [`KeyboardLayout`] holds the read-only description of the keyboard as
//! reported by the server: the key types, and for every hardware keycode its
//! group info, the key type used by each group, and a flat symbol table of
//! `groups x width` keysyms.
//!
//! Resolving an event is a pure lookup:
//! 1. No groups on the key means no symbol.
//! 2. The requested group comes from bits 13-14 of the state field and is
//!    brought into range by the key's overflow policy.
//! 3. The group's key type masks the state; the first active entry whose
//!    modifiers equal the masked state selects the level (default 0).
//! 4. A level outside the group's width falls back to level 0.
//! 5. The keysym is `syms[group * width + level]`.
//!
//! Layout changes replace the whole table set (see [`Keyboard::replace_layout`]);
//! a layout is never mutated after construction.

use crate::keysym::{self, Keysym, NO_SYMBOL};
use log::{info, trace};
use std::sync::Arc;

/// Number of keycodes a layout can describe.
pub const KEYCODE_COUNT: usize = 256;

/// Largest group count encodable in a group info byte.
pub const MAX_GROUPS: u8 = 15;

const STATE_GROUP_MASK: u32 = 0x6000;
const STATE_GROUP_SHIFT: u32 = 13;

const GROUP_COUNT_MASK: u8 = 0x0F;
const GROUP_POLICY_MASK: u8 = 0xC0;
const GROUP_REDIRECT_MASK: u8 = 0x30;
const GROUP_REDIRECT_SHIFT: u8 = 4;

const POLICY_CLAMP: u8 = 0x40;
const POLICY_REDIRECT: u8 = 0x80;

/// What to do when the state requests a group the key does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Requested group modulo the group count.
    #[default]
    Wrap,
    /// The last group.
    Clamp,
    /// A fixed group; group 0 if that one is out of range too.
    Redirect(u8),
}

/// Per-key group count and overflow policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupInfo {
    count: u8,
    overflow: OverflowPolicy,
}

impl GroupInfo {
    /// `count` is truncated to [`MAX_GROUPS`].
    pub fn new(count: u8, overflow: OverflowPolicy) -> Self {
        Self {
            count: count.min(MAX_GROUPS),
            overflow,
        }
    }

    /// Decodes the XKB `group_info` byte: count in bits 0-3, redirect target
    /// in bits 4-5, policy in bits 6-7. The unassigned policy value decodes
    /// as `Wrap`.
    pub fn from_raw(raw: u8) -> Self {
        let count = raw & GROUP_COUNT_MASK;
        let overflow = match raw & GROUP_POLICY_MASK {
            POLICY_CLAMP => OverflowPolicy::Clamp,
            POLICY_REDIRECT => {
                OverflowPolicy::Redirect((raw & GROUP_REDIRECT_MASK) >> GROUP_REDIRECT_SHIFT)
            }
            _ => OverflowPolicy::Wrap,
        };
        Self { count, overflow }
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Brings `requested` into `0..count`. `None` when the key has no groups.
    pub fn effective_group(&self, requested: u8) -> Option<u8> {
        if self.count == 0 {
            return None;
        }
        if requested < self.count {
            return Some(requested);
        }
        let group = match self.overflow {
            OverflowPolicy::Wrap => requested % self.count,
            OverflowPolicy::Clamp => self.count - 1,
            OverflowPolicy::Redirect(target) if target < self.count => target,
            OverflowPolicy::Redirect(_) => 0,
        };
        Some(group)
    }
}

/// One row of a key type's map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTypeEntry {
    pub active: bool,
    /// Modifiers that must be exactly the masked state.
    pub mods: u8,
    pub level: u8,
}

/// Which modifier combinations select which level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyType {
    pub mods_mask: u8,
    pub entries: Vec<KeyTypeEntry>,
}

impl KeyType {
    pub fn new(mods_mask: u8, entries: Vec<KeyTypeEntry>) -> Self {
        Self { mods_mask, entries }
    }

    /// Level selected by `state`; 0 when no active entry matches.
    pub fn level(&self, state: u32) -> u8 {
        let mods = (state & self.mods_mask as u32) as u8;
        self.entries
            .iter()
            .find(|e| e.active && e.mods == mods)
            .map_or(0, |e| e.level)
    }
}

/// Everything the layout knows about one keycode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyMapping {
    pub groups: GroupInfo,
    /// Index into [`KeyboardLayout::types`] for each group.
    pub types: Vec<usize>,
    /// Symbols per group.
    pub width: u8,
    /// `groups.count() * width` keysyms, group-major.
    pub syms: Vec<Keysym>,
}

/// Immutable keyboard description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    types: Vec<KeyType>,
    keys: Vec<KeyMapping>,
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self {
            types: Vec::new(),
            keys: vec![KeyMapping::default(); KEYCODE_COUNT],
        }
    }
}

impl KeyboardLayout {
    /// Keycodes not listed in `keys` get no groups.
    pub fn new(types: Vec<KeyType>, keys: impl IntoIterator<Item = (u8, KeyMapping)>) -> Self {
        let mut layout = Self {
            types,
            ..Default::default()
        };
        for (keycode, mapping) in keys {
            layout.keys[keycode as usize] = mapping;
        }
        layout
    }

    pub fn types(&self) -> &[KeyType] {
        &self.types
    }

    pub fn key(&self, keycode: u8) -> &KeyMapping {
        &self.keys[keycode as usize]
    }

    /// Resolves `(keycode, state)` to a keysym, [`NO_SYMBOL`] if there is none.
    pub fn keysym(&self, keycode: u8, state: u32) -> Keysym {
        let key = &self.keys[keycode as usize];

        let requested = ((state & STATE_GROUP_MASK) >> STATE_GROUP_SHIFT) as u8;
        let Some(group) = key.groups.effective_group(requested) else {
            return NO_SYMBOL;
        };

        let level = key
            .types
            .get(group as usize)
            .and_then(|&t| self.types.get(t))
            .map_or(0, |kt| kt.level(state));

        // Malformed descriptions are tolerated by falling back to level 0.
        let level = if level >= key.width { 0 } else { level };

        let index = group as usize * key.width as usize + level as usize;
        let keysym = key.syms.get(index).copied().unwrap_or(NO_SYMBOL);
        trace!(
            "keycode {} state {:#06x}: group {} (requested {}), level {} -> keysym {:#x}",
            keycode,
            state,
            group,
            requested,
            level,
            keysym
        );
        keysym
    }
}

/// Result of resolving one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyResolution {
    pub keysym: Keysym,
    /// Unicode scalar, 0 for non-printing keys.
    pub unicode: u32,
    pub is_dead: bool,
}

impl KeyResolution {
    pub fn as_char(&self) -> Option<char> {
        match self.unicode {
            0 => None,
            u => char::from_u32(u),
        }
    }
}

/// Resolves a raw key event to its keysym, Unicode scalar and dead-key flag.
pub fn resolve_key_event(layout: &KeyboardLayout, keycode: u8, state: u32) -> KeyResolution {
    let keysym = layout.keysym(keycode, state);
    KeyResolution {
        keysym,
        unicode: keysym::keysym_to_unicode(keysym),
        is_dead: keysym::keysym_is_dead(keysym),
    }
}

/// The current layout, swapped wholesale when the server reports a change.
///
/// Resolution works on a snapshot, so a replacement never becomes visible in
/// the middle of resolving an event.
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    layout: Arc<KeyboardLayout>,
}

impl Keyboard {
    pub fn new(layout: KeyboardLayout) -> Self {
        Self {
            layout: Arc::new(layout),
        }
    }

    pub fn layout(&self) -> Arc<KeyboardLayout> {
        Arc::clone(&self.layout)
    }

    /// Installs `layout` and returns the previous one.
    pub fn replace_layout(&mut self, layout: KeyboardLayout) -> Arc<KeyboardLayout> {
        info!("Keyboard layout replaced");
        std::mem::replace(&mut self.layout, Arc::new(layout))
    }

    pub fn resolve(&self, keycode: u8, state: u32) -> KeyResolution {
        resolve_key_event(&self.layout, keycode, state)
    }
}

#[cfg(test)]
mod tests;
