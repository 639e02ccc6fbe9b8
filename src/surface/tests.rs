// src/surface/tests.rs

use super::*;

fn headless(width: u32, height: u32) -> Surface {
    Surface::create(Target::Headless, width, height).unwrap()
}

/// Writes `row * 100 + col + 1` into every cell.
fn number_cells(surface: &mut Surface) {
    let mut px = surface.pixels().unwrap();
    for row in 0..px.height() {
        for col in 0..px.width() {
            px.set(row, col, (row * 100 + col + 1) as Cell);
        }
    }
}

fn last_frame(surface: &mut Surface) -> Vec<Cell> {
    match surface.backend_mut().unwrap() {
        Backend::Headless(h) => h.last_frame().unwrap().to_vec(),
        other => panic!("expected headless backend, got {:?}", other.kind()),
    }
}

#[test]
fn it_should_create_a_zeroed_surface_of_the_requested_size() {
    let mut surface = headless(4, 3);
    assert_eq!(surface.size().unwrap(), (4, 3));
    assert_eq!(surface.kind().unwrap(), BackendKind::Headless);

    let px = surface.pixels().unwrap();
    assert_eq!((px.width(), px.height()), (4, 3));
    assert!((0..3).all(|r| px.as_pixmap().row(r).iter().all(|&c| c == 0)));
}

#[test]
fn it_should_reject_zero_dimensions() {
    assert!(matches!(
        Surface::create(Target::Headless, 0, 10),
        Err(Error::InvalidDimensions { width: 0, height: 10 })
    ));

    let mut surface = headless(2, 2);
    assert!(matches!(
        surface.resize(5, 0),
        Err(Error::InvalidDimensions { .. })
    ));
    assert_eq!(surface.size().unwrap(), (2, 2));
}

#[test_log::test]
fn it_should_keep_the_overlap_and_zero_new_cells_when_growing() {
    let mut surface = headless(3, 2);
    number_cells(&mut surface);

    surface.resize(5, 4).unwrap();
    assert_eq!(surface.size().unwrap(), (5, 4));

    let px = surface.pixels().unwrap();
    for row in 0..4 {
        for col in 0..5 {
            let expected = if row < 2 && col < 3 {
                (row * 100 + col + 1) as Cell
            } else {
                0
            };
            assert_eq!(px.at(row, col), expected, "cell ({row}, {col})");
        }
    }
}

#[test]
fn it_should_keep_the_top_left_corner_when_shrinking() {
    let mut surface = headless(4, 4);
    number_cells(&mut surface);

    surface.resize(2, 3).unwrap();
    let px = surface.pixels().unwrap();
    assert_eq!((px.width(), px.height()), (2, 3));
    assert_eq!(px.as_pixmap().row(0), &[1, 2]);
    assert_eq!(px.as_pixmap().row(2), &[201, 202]);
}

#[test]
fn it_should_handle_mixed_grow_and_shrink() {
    let mut surface = headless(4, 2);
    number_cells(&mut surface);

    surface.resize(2, 4).unwrap();
    let px = surface.pixels().unwrap();
    assert_eq!(px.as_pixmap().row(0), &[1, 2]);
    assert_eq!(px.as_pixmap().row(1), &[101, 102]);
    assert_eq!(px.as_pixmap().row(2), &[0, 0]);
    assert_eq!(px.as_pixmap().row(3), &[0, 0]);
}

#[test]
fn it_should_leave_the_surface_untouched_when_allocation_fails() {
    let mut surface = headless(3, 3);
    number_cells(&mut surface);

    let err = surface.resize(u32::MAX, u32::MAX).unwrap_err();
    assert!(matches!(err, Error::AllocationFailure { .. }), "{err}");

    assert_eq!(surface.size().unwrap(), (3, 3));
    assert_eq!(surface.pixels().unwrap().at(2, 2), 203);
}

#[test]
fn it_should_present_the_current_buffer() {
    let mut surface = headless(2, 1);
    surface.pixels().unwrap().fill(0x00ff_00ff);
    surface.present().unwrap();
    assert_eq!(last_frame(&mut surface), vec![0x00ff_00ff, 0x00ff_00ff]);

    surface.resize(3, 1).unwrap();
    surface.present().unwrap();
    assert_eq!(last_frame(&mut surface), vec![0x00ff_00ff, 0x00ff_00ff, 0]);
}

#[test_log::test]
fn it_should_survive_a_rejected_frame() {
    let mut surface = headless(2, 2);
    match surface.backend_mut().unwrap() {
        Backend::Headless(h) => h.reject_next_present(),
        _ => unreachable!(),
    }

    assert!(matches!(surface.present(), Err(Error::ProtocolFailure(_))));
    assert_eq!(surface.size().unwrap(), (2, 2));

    surface.present().unwrap();
    match surface.backend_mut().unwrap() {
        Backend::Headless(h) => assert_eq!(h.presented(), 1),
        _ => unreachable!(),
    }
}

#[test_log::test]
fn it_should_fail_every_operation_after_destroy() {
    let mut surface = headless(2, 2);
    surface.destroy().unwrap();
    assert!(surface.is_destroyed());

    assert!(matches!(surface.resize(4, 4), Err(Error::UseAfterDestroy)));
    assert!(matches!(surface.present(), Err(Error::UseAfterDestroy)));
    assert!(matches!(surface.pixels(), Err(Error::UseAfterDestroy)));
    assert!(matches!(surface.size(), Err(Error::UseAfterDestroy)));
    assert!(matches!(surface.kind(), Err(Error::UseAfterDestroy)));
    assert!(matches!(surface.destroy(), Err(Error::UseAfterDestroy)));
}

#[test]
fn it_should_report_frame_sizes_that_cannot_be_addressed() {
    assert_eq!(frame_cells(3, 4).unwrap(), 12);
    if usize::BITS == 64 {
        // 2^32 cells fit in memory arithmetic; 2^64 do not.
        assert!(frame_cells(65536, 65536).is_ok());
    }
    assert!(matches!(
        frame_cells(u32::MAX, u32::MAX),
        Err(Error::AllocationFailure { .. })
    ));
}
