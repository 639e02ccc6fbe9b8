// src/keyboard/tests.rs

use super::*;

const SHIFT: u8 = 0x01;
const LOCK: u8 = 0x02;
const MOD5: u8 = 0x80;

/// `state` with group `g` in bits 13-14.
fn with_group(state: u32, g: u32) -> u32 {
    state | (g << 13)
}

/// ONE_LEVEL (0), TWO_LEVEL (1), FOUR_LEVEL-ish (2) key types.
fn types() -> Vec<KeyType> {
    vec![
        KeyType::new(0, vec![]),
        KeyType::new(
            SHIFT,
            vec![KeyTypeEntry {
                active: true,
                mods: SHIFT,
                level: 1,
            }],
        ),
        KeyType::new(
            SHIFT | MOD5,
            vec![
                KeyTypeEntry {
                    active: true,
                    mods: SHIFT,
                    level: 1,
                },
                KeyTypeEntry {
                    active: false,
                    mods: MOD5,
                    level: 3,
                },
                KeyTypeEntry {
                    active: true,
                    mods: MOD5,
                    level: 2,
                },
                KeyTypeEntry {
                    active: true,
                    mods: SHIFT | MOD5,
                    level: 3,
                },
            ],
        ),
    ]
}

/// keycode 38: 'a'/'A' in group 0, Cyrillic ef/EF in group 1.
fn two_group_key(overflow: OverflowPolicy) -> KeyMapping {
    KeyMapping {
        groups: GroupInfo::new(2, overflow),
        types: vec![1, 1],
        width: 2,
        syms: vec![0x0061, 0x0041, 0x06c6, 0x06e6],
    }
}

#[test]
fn it_should_apply_each_overflow_policy() {
    let wrap = GroupInfo::new(2, OverflowPolicy::Wrap);
    let clamp = GroupInfo::new(2, OverflowPolicy::Clamp);
    let redirect = GroupInfo::new(2, OverflowPolicy::Redirect(0));

    assert_eq!(wrap.effective_group(3), Some(1));
    assert_eq!(clamp.effective_group(3), Some(1));
    assert_eq!(redirect.effective_group(3), Some(0));

    // In range: untouched whatever the policy.
    for info in [wrap, clamp, redirect] {
        assert_eq!(info.effective_group(0), Some(0));
        assert_eq!(info.effective_group(1), Some(1));
    }
}

#[test]
fn it_should_redirect_to_group_zero_when_target_is_out_of_range() {
    let info = GroupInfo::new(2, OverflowPolicy::Redirect(3));
    assert_eq!(info.effective_group(2), Some(0));
    let info = GroupInfo::new(3, OverflowPolicy::Redirect(2));
    assert_eq!(info.effective_group(3), Some(2));
}

#[test]
fn it_should_yield_no_group_for_keys_without_groups() {
    let info = GroupInfo::new(0, OverflowPolicy::Clamp);
    assert_eq!(info.effective_group(0), None);
    assert_eq!(info.effective_group(3), None);
}

#[test]
fn it_should_decode_raw_group_info_bytes() {
    assert_eq!(GroupInfo::from_raw(0x02), GroupInfo::new(2, OverflowPolicy::Wrap));
    assert_eq!(GroupInfo::from_raw(0x43), GroupInfo::new(3, OverflowPolicy::Clamp));
    assert_eq!(
        GroupInfo::from_raw(0x80 | 0x20 | 0x04),
        GroupInfo::new(4, OverflowPolicy::Redirect(2))
    );
    // Unassigned policy bits behave like Wrap.
    assert_eq!(GroupInfo::from_raw(0xC1).overflow(), OverflowPolicy::Wrap);
    assert_eq!(GroupInfo::from_raw(0xFF).count(), 15);
    assert_eq!(GroupInfo::new(40, OverflowPolicy::Wrap).count(), MAX_GROUPS);
}

#[test]
fn it_should_pick_the_first_active_matching_entry() {
    let kt = &types()[2];
    assert_eq!(kt.level(0), 0);
    assert_eq!(kt.level(SHIFT as u32), 1);
    // The inactive MOD5 -> 3 entry is skipped.
    assert_eq!(kt.level(MOD5 as u32), 2);
    assert_eq!(kt.level((SHIFT | MOD5) as u32), 3);
    // Bits outside the mask are ignored; Lock alone matches nothing.
    assert_eq!(kt.level((SHIFT | LOCK) as u32), 1);
    assert_eq!(kt.level(LOCK as u32), 0);
}

#[test]
fn it_should_resolve_group_and_level_to_a_keysym() {
    let layout = KeyboardLayout::new(types(), [(38, two_group_key(OverflowPolicy::Wrap))]);

    assert_eq!(layout.keysym(38, 0), 0x0061);
    assert_eq!(layout.keysym(38, SHIFT as u32), 0x0041);
    assert_eq!(layout.keysym(38, with_group(0, 1)), 0x06c6);
    assert_eq!(layout.keysym(38, with_group(SHIFT as u32, 1)), 0x06e6);
    // Group 3 wraps to group 1.
    assert_eq!(layout.keysym(38, with_group(0, 3)), 0x06c6);
}

#[test]
fn it_should_apply_clamp_and_redirect_during_resolution() {
    let clamp = KeyboardLayout::new(types(), [(38, two_group_key(OverflowPolicy::Clamp))]);
    assert_eq!(clamp.keysym(38, with_group(0, 2)), 0x06c6);

    let redirect =
        KeyboardLayout::new(types(), [(38, two_group_key(OverflowPolicy::Redirect(0)))]);
    assert_eq!(redirect.keysym(38, with_group(0, 3)), 0x0061);
}

#[test]
fn it_should_return_no_symbol_for_unknown_keycodes() {
    let layout = KeyboardLayout::new(types(), [(38, two_group_key(OverflowPolicy::Wrap))]);
    assert_eq!(layout.keysym(9, 0), NO_SYMBOL);
    let res = resolve_key_event(&layout, 9, SHIFT as u32);
    assert_eq!(res.unicode, 0);
    assert!(!res.is_dead);
}

#[test]
fn it_should_fall_back_to_level_zero_when_level_exceeds_width() {
    // Four-level type on a key that only declares one symbol per group.
    let key = KeyMapping {
        groups: GroupInfo::new(1, OverflowPolicy::Wrap),
        types: vec![2],
        width: 1,
        syms: vec![0x0031],
    };
    let layout = KeyboardLayout::new(types(), [(10, key)]);
    assert_eq!(layout.keysym(10, (SHIFT | MOD5) as u32), 0x0031);
    assert_eq!(layout.keysym(10, MOD5 as u32), 0x0031);
}

#[test]
fn it_should_never_index_outside_the_symbol_table() {
    // Every combination of group count, width, policy and state on a key whose
    // table is sized exactly `count * width`.
    let policies = [
        OverflowPolicy::Wrap,
        OverflowPolicy::Clamp,
        OverflowPolicy::Redirect(0),
        OverflowPolicy::Redirect(3),
    ];
    for count in 1..=4u8 {
        for width in 1..=4u8 {
            for overflow in policies {
                let syms: Vec<Keysym> = (0..count as u32 * width as u32).map(|i| 0x100 + i).collect();
                let key = KeyMapping {
                    groups: GroupInfo::new(count, overflow),
                    types: vec![2; count as usize],
                    width,
                    syms: syms.clone(),
                };
                let layout = KeyboardLayout::new(types(), [(50, key)]);
                for group in 0..4 {
                    for mods in [0u8, SHIFT, MOD5, SHIFT | MOD5, LOCK] {
                        let ks = layout.keysym(50, with_group(mods as u32, group));
                        assert!(syms.contains(&ks), "count={count} width={width} {overflow:?}");
                    }
                }
            }
        }
    }
}

#[test]
fn it_should_tolerate_missing_key_types_and_short_tables() {
    let key = KeyMapping {
        groups: GroupInfo::new(2, OverflowPolicy::Wrap),
        types: vec![99],
        width: 2,
        syms: vec![0x0062],
    };
    let layout = KeyboardLayout::new(types(), [(20, key)]);
    // Unknown type -> level 0.
    assert_eq!(layout.keysym(20, SHIFT as u32), 0x0062);
    // Group 1 has neither a type nor symbols.
    assert_eq!(layout.keysym(20, with_group(0, 1)), NO_SYMBOL);
}

#[test]
fn it_should_report_unicode_and_dead_keys() {
    let key = KeyMapping {
        groups: GroupInfo::new(1, OverflowPolicy::Wrap),
        types: vec![1],
        width: 2,
        syms: vec![0xfe51, 0x01a1],
    };
    let layout = KeyboardLayout::new(types(), [(34, key)]);

    let dead = resolve_key_event(&layout, 34, 0);
    assert_eq!(dead.keysym, 0xfe51);
    assert_eq!(dead.unicode, 0x0301);
    assert!(dead.is_dead);

    let ogonek = resolve_key_event(&layout, 34, SHIFT as u32);
    assert_eq!(ogonek.as_char(), Some('Ą'));
    assert!(!ogonek.is_dead);
}

#[test_log::test]
fn it_should_swap_layouts_without_touching_snapshots() {
    let mut keyboard = Keyboard::new(KeyboardLayout::new(
        types(),
        [(38, two_group_key(OverflowPolicy::Wrap))],
    ));
    let snapshot = keyboard.layout();
    assert_eq!(keyboard.resolve(38, 0).unicode, 'a' as u32);

    let qwerty_b = KeyMapping {
        syms: vec![0x0062, 0x0042],
        groups: GroupInfo::new(1, OverflowPolicy::Wrap),
        types: vec![1],
        width: 2,
    };
    let old = keyboard.replace_layout(KeyboardLayout::new(types(), [(38, qwerty_b)]));

    assert_eq!(keyboard.resolve(38, SHIFT as u32).unicode, 'B' as u32);
    assert_eq!(old.keysym(38, 0), 0x0061);
    assert_eq!(snapshot.keysym(38, 0), 0x0061);
}
