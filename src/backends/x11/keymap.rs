// src/backends/x11/keymap.rs
#![allow(non_snake_case)] // Allow non-snake case for X11 types

//! Reads the server's XKB client map into a [`KeyboardLayout`].
//!
//! Only the key types and the per-key symbol maps are fetched. The layout is
//! a plain copy, so the XKB description is freed before returning.

use super::connection::Connection;
use crate::error::{Error, Result};
use crate::keyboard::{GroupInfo, KeyMapping, KeyType, KeyTypeEntry, KeyboardLayout};
use crate::keysym::Keysym;

use libc::{c_uchar, c_uint, c_ushort, c_void};
use log::{debug, info, warn};
use std::ptr::NonNull;
use x11::xlib;

const XKB_USE_CORE_KBD: c_uint = 0x0100;
const XKB_KEY_TYPES_MASK: c_uint = 1 << 0;
const XKB_KEY_SYMS_MASK: c_uint = 1 << 1;

/// Groups a symbol map can reference through `kt_index`.
const SYM_MAP_GROUPS: usize = 4;

// Layouts of the XKBlib structures read here (X11/extensions/XKBstr.h).

#[allow(dead_code)]
#[repr(C)]
struct XkbModsRec {
    mask: c_uchar,
    real_mods: c_uchar,
    vmods: c_ushort,
}

#[allow(dead_code)]
#[repr(C)]
struct XkbKTMapEntryRec {
    active: xlib::Bool,
    level: c_uchar,
    mods: XkbModsRec,
}

#[allow(dead_code)]
#[repr(C)]
struct XkbKeyTypeRec {
    mods: XkbModsRec,
    num_levels: c_uchar,
    map_count: c_uchar,
    map: *mut XkbKTMapEntryRec,
    preserve: *mut XkbModsRec,
    name: xlib::Atom,
    level_names: *mut xlib::Atom,
}

#[allow(dead_code)]
#[repr(C)]
struct XkbSymMapRec {
    kt_index: [c_uchar; SYM_MAP_GROUPS],
    group_info: c_uchar,
    width: c_uchar,
    offset: c_ushort,
}

#[allow(dead_code)]
#[repr(C)]
struct XkbClientMapRec {
    size_types: c_uchar,
    num_types: c_uchar,
    types: *mut XkbKeyTypeRec,
    size_syms: c_ushort,
    num_syms: c_ushort,
    syms: *mut xlib::KeySym,
    key_sym_map: *mut XkbSymMapRec,
    modmap: *mut c_uchar,
}

#[allow(dead_code)]
#[repr(C)]
struct XkbDescRec {
    dpy: *mut xlib::Display,
    flags: c_ushort,
    device_spec: c_ushort,
    min_key_code: xlib::KeyCode,
    max_key_code: xlib::KeyCode,
    ctrls: *mut c_void,
    server: *mut c_void,
    map: *mut XkbClientMapRec,
    indicators: *mut c_void,
    names: *mut c_void,
    compat: *mut c_void,
    geom: *mut c_void,
}

#[link(name = "X11")]
extern "C" {
    fn XkbGetMap(display: *mut xlib::Display, which: c_uint, device_spec: c_uint)
        -> *mut XkbDescRec;
    fn XkbFreeKeyboard(xkb: *mut XkbDescRec, which: c_uint, free_all: xlib::Bool);
}

/// An XKB keyboard description, freed on drop.
struct XkbDesc(NonNull<XkbDescRec>);

impl Drop for XkbDesc {
    fn drop(&mut self) {
        // SAFETY: allocated by XkbGetMap and freed once, with everything it owns.
        unsafe { XkbFreeKeyboard(self.0.as_ptr(), 0, xlib::True) }
    }
}

/// Fetches the core keyboard's key types and symbol maps.
pub fn load_layout(connection: &Connection) -> Result<KeyboardLayout> {
    // SAFETY: live display.
    let raw = unsafe {
        XkbGetMap(
            connection.display(),
            XKB_KEY_TYPES_MASK | XKB_KEY_SYMS_MASK,
            XKB_USE_CORE_KBD,
        )
    };
    let desc = NonNull::new(raw)
        .map(XkbDesc)
        .ok_or_else(|| Error::ProtocolFailure("XkbGetMap returned no keyboard".into()))?;

    // SAFETY: `desc` is a complete description as returned by XkbGetMap and
    // stays alive (and unmodified) until the end of this function.
    let layout = unsafe { copy_layout(desc.0.as_ref())? };
    info!("Loaded XKB layout: {} key types", layout.types().len());
    Ok(layout)
}

/// # Safety
///
/// Every pointer in `desc` must be valid for the counts stored alongside it.
unsafe fn copy_layout(desc: &XkbDescRec) -> Result<KeyboardLayout> {
    let map = desc
        .map
        .as_ref()
        .ok_or_else(|| Error::ProtocolFailure("XKB description has no client map".into()))?;

    let types = slice(map.types, map.num_types as usize)
        .iter()
        .map(|kt| {
            let entries = slice(kt.map, kt.map_count as usize)
                .iter()
                .map(|e| KeyTypeEntry {
                    active: e.active != 0,
                    mods: e.mods.mask,
                    level: e.level,
                })
                .collect();
            KeyType::new(kt.mods.mask, entries)
        })
        .collect::<Vec<_>>();

    let syms = slice(map.syms, map.num_syms as usize);
    let sym_maps = slice(map.key_sym_map, desc.max_key_code as usize + 1);

    let mut keys = Vec::new();
    for keycode in desc.min_key_code..=desc.max_key_code {
        let Some(sm) = sym_maps.get(keycode as usize) else {
            break;
        };
        let groups = GroupInfo::from_raw(sm.group_info);
        let count = (groups.count() as usize).min(SYM_MAP_GROUPS);
        let wanted = count * sm.width as usize;
        let start = (sm.offset as usize).min(syms.len());
        let end = (start + wanted).min(syms.len());
        if end - start < wanted {
            warn!(
                "keycode {}: symbol map wants {} keysyms at {}, table has {}",
                keycode,
                wanted,
                sm.offset,
                syms.len()
            );
        }

        keys.push((
            keycode,
            KeyMapping {
                groups,
                types: sm.kt_index[..count].iter().map(|&t| t as usize).collect(),
                width: sm.width,
                syms: syms[start..end].iter().map(|&ks| ks as Keysym).collect(),
            },
        ));
    }
    debug!(
        "XKB keycodes {}..={}: {} mapped",
        desc.min_key_code,
        desc.max_key_code,
        keys.len()
    );

    Ok(KeyboardLayout::new(types, keys))
}

/// # Safety
///
/// `ptr` must be null or valid for `len` reads.
unsafe fn slice<'a, T>(ptr: *const T, len: usize) -> &'a [T] {
    if ptr.is_null() || len == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(ptr, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::OverflowPolicy;
    use std::ptr;

    const SHIFT: c_uchar = 0x01;

    fn mods(mask: c_uchar) -> XkbModsRec {
        XkbModsRec {
            mask,
            real_mods: mask,
            vmods: 0,
        }
    }

    #[test]
    fn it_should_copy_types_and_symbol_maps() {
        let mut two_level_map = [XkbKTMapEntryRec {
            active: xlib::True,
            level: 1,
            mods: mods(SHIFT),
        }];
        let mut types = [
            XkbKeyTypeRec {
                mods: mods(0),
                num_levels: 1,
                map_count: 0,
                map: ptr::null_mut(),
                preserve: ptr::null_mut(),
                name: 0,
                level_names: ptr::null_mut(),
            },
            XkbKeyTypeRec {
                mods: mods(SHIFT),
                num_levels: 2,
                map_count: 1,
                map: two_level_map.as_mut_ptr(),
                preserve: ptr::null_mut(),
                name: 0,
                level_names: ptr::null_mut(),
            },
        ];
        let mut syms: [xlib::KeySym; 3] = [0xff1b, 0x61, 0x41];
        let mut sym_maps: Vec<XkbSymMapRec> = (0..=38)
            .map(|_| XkbSymMapRec {
                kt_index: [0; 4],
                group_info: 0,
                width: 0,
                offset: 0,
            })
            .collect();
        sym_maps[9] = XkbSymMapRec {
            kt_index: [0, 0, 0, 0],
            group_info: 0x01,
            width: 1,
            offset: 0,
        };
        sym_maps[38] = XkbSymMapRec {
            kt_index: [1, 0, 0, 0],
            group_info: 0x41,
            width: 2,
            offset: 1,
        };

        let mut client = XkbClientMapRec {
            size_types: 2,
            num_types: 2,
            types: types.as_mut_ptr(),
            size_syms: 3,
            num_syms: 3,
            syms: syms.as_mut_ptr(),
            key_sym_map: sym_maps.as_mut_ptr(),
            modmap: ptr::null_mut(),
        };
        let desc = XkbDescRec {
            dpy: ptr::null_mut(),
            flags: 0,
            device_spec: 0x0100,
            min_key_code: 8,
            max_key_code: 38,
            ctrls: ptr::null_mut(),
            server: ptr::null_mut(),
            map: &mut client,
            indicators: ptr::null_mut(),
            names: ptr::null_mut(),
            compat: ptr::null_mut(),
            geom: ptr::null_mut(),
        };

        let layout = unsafe { copy_layout(&desc) }.unwrap();

        assert_eq!(layout.types().len(), 2);
        assert_eq!(layout.key(38).groups, GroupInfo::new(1, OverflowPolicy::Clamp));
        assert_eq!(layout.keysym(9, 0), 0xff1b);
        assert_eq!(layout.keysym(38, 0), 0x61);
        assert_eq!(layout.keysym(38, SHIFT as u32), 0x41);
        assert_eq!(layout.keysym(20, 0), 0);
    }

    #[test]
    fn it_should_truncate_symbol_maps_that_overrun_the_table() {
        let mut syms: [xlib::KeySym; 1] = [0x31];
        let mut sym_maps: Vec<XkbSymMapRec> = (0..=10)
            .map(|_| XkbSymMapRec {
                kt_index: [0; 4],
                group_info: 0x02,
                width: 2,
                offset: 0,
            })
            .collect();
        let mut client = XkbClientMapRec {
            size_types: 0,
            num_types: 0,
            types: ptr::null_mut(),
            size_syms: 1,
            num_syms: 1,
            syms: syms.as_mut_ptr(),
            key_sym_map: sym_maps.as_mut_ptr(),
            modmap: ptr::null_mut(),
        };
        let desc = XkbDescRec {
            dpy: ptr::null_mut(),
            flags: 0,
            device_spec: 0x0100,
            min_key_code: 8,
            max_key_code: 10,
            ctrls: ptr::null_mut(),
            server: ptr::null_mut(),
            map: &mut client,
            indicators: ptr::null_mut(),
            names: ptr::null_mut(),
            compat: ptr::null_mut(),
            geom: ptr::null_mut(),
        };

        let layout = unsafe { copy_layout(&desc) }.unwrap();
        assert_eq!(layout.key(10).syms, vec![0x31]);
        assert_eq!(layout.keysym(10, 0), 0x31);
        // Group 1 lies past the truncated table.
        assert_eq!(layout.keysym(10, 1 << 13), 0);
    }

    #[test]
    fn it_should_reject_descriptions_without_a_client_map() {
        let desc = XkbDescRec {
            dpy: ptr::null_mut(),
            flags: 0,
            device_spec: 0,
            min_key_code: 8,
            max_key_code: 255,
            ctrls: ptr::null_mut(),
            server: ptr::null_mut(),
            map: ptr::null_mut(),
            indicators: ptr::null_mut(),
            names: ptr::null_mut(),
            compat: ptr::null_mut(),
            geom: ptr::null_mut(),
        };
        assert!(matches!(
            unsafe { copy_layout(&desc) },
            Err(Error::ProtocolFailure(_))
        ));
    }
}
