// src/backends/x11/surface.rs
#![allow(non_snake_case)] // Allow non-snake case for X11 types

//! XImage-backed surface.
//!
//! The pixel buffer is a heap vector owned by the surface; an `XImage`
//! describes it in ZPixmap format (32 bits per pixel) and `present` copies it
//! to the window with `XPutImage`. Xlib never owns the buffer: the image's
//! data pointer is cleared before the image is destroyed.
//!
//! `create` and `present` synchronise with the server and turn any protocol
//! error their requests caused into [`Error::ProtocolFailure`].

use super::connection::{Connection, ErrorTrap};
use crate::error::{Error, Result};
use crate::pixmap::{copy_overlap, Cell, Pixmap, PixmapMut, CELL_SIZE};
use crate::surface::{alloc_cells, frame_cells};

use libc::{c_char, c_int, c_uint};
use log::{debug, trace};
use std::ptr::{self, NonNull};
use x11::xlib;

const BITS_PER_PIXEL: c_int = 32;

/// Graphics context, freed on drop.
#[derive(Debug)]
struct Gc {
    display: *mut xlib::Display,
    gc: xlib::GC,
}

impl Gc {
    fn create(display: *mut xlib::Display, window: xlib::Window) -> Result<Self> {
        // SAFETY: live display; no XGCValues are passed.
        let gc = unsafe { xlib::XCreateGC(display, window, 0, ptr::null_mut()) };
        if gc.is_null() {
            return Err(Error::ProtocolFailure(format!(
                "XCreateGC failed for window {}",
                window
            )));
        }
        Ok(Self { display, gc })
    }
}

impl Drop for Gc {
    fn drop(&mut self) {
        // SAFETY: `gc` was created on `display` and is freed once.
        unsafe {
            xlib::XFreeGC(self.display, self.gc);
        }
    }
}

/// Geometry of a packed ZPixmap over a `width x height` cell buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ImageLayout {
    width: c_uint,
    height: c_uint,
    bytes_per_line: c_int,
    cells: usize,
}

impl ImageLayout {
    fn new(width: u32, height: u32) -> Result<Self> {
        let cells = frame_cells(width, height)?;
        let bytes_per_line = c_int::try_from(width as usize * CELL_SIZE).map_err(|_| {
            Error::allocation_msg(format!("{} pixel rows exceed XImage limits", width))
        })?;
        Ok(Self {
            width: width as c_uint,
            height: height as c_uint,
            bytes_per_line,
            cells,
        })
    }
}

/// XImage header describing a buffer it does not own.
#[derive(Debug)]
struct Image {
    ptr: NonNull<xlib::XImage>,
}

impl Image {
    /// Describes `pixels` with `layout`. The caller keeps `pixels` alive and
    /// unmoved for the life of the image.
    fn wrap(
        display: *mut xlib::Display,
        visual: *mut xlib::Visual,
        depth: c_int,
        pixels: &mut [Cell],
        layout: ImageLayout,
    ) -> Result<Self> {
        if pixels.len() < layout.cells {
            return Err(Error::allocation_msg(format!(
                "{} cells cannot back a {}x{} image",
                pixels.len(),
                layout.width,
                layout.height
            )));
        }
        // SAFETY: live display and visual; `pixels` holds at least
        // `layout.cells` cells.
        let raw = unsafe {
            xlib::XCreateImage(
                display,
                visual,
                depth as c_uint,
                xlib::ZPixmap,
                0,
                pixels.as_mut_ptr() as *mut c_char,
                layout.width,
                layout.height,
                BITS_PER_PIXEL,
                layout.bytes_per_line,
            )
        };
        let image = NonNull::new(raw)
            .map(|ptr| Self { ptr })
            .ok_or_else(|| Error::ProtocolFailure("XCreateImage failed".into()))?;

        // SAFETY: `image.ptr` is a valid XImage.
        let bpp = unsafe { image.ptr.as_ref().bits_per_pixel };
        if bpp != BITS_PER_PIXEL {
            return Err(Error::ProtocolFailure(format!(
                "visual of depth {} uses {} bits per pixel, need {}",
                depth, bpp, BITS_PER_PIXEL
            )));
        }
        Ok(image)
    }
}

impl Drop for Image {
    fn drop(&mut self) {
        // SAFETY: the image is valid; clearing `data` keeps XDestroyImage
        // from freeing the buffer we own.
        unsafe {
            (*self.ptr.as_ptr()).data = ptr::null_mut();
            xlib::XDestroyImage(self.ptr.as_ptr());
        }
    }
}

/// Surface presenting into an Xlib window.
#[derive(Debug)]
pub struct X11Surface {
    display: *mut xlib::Display,
    visual: *mut xlib::Visual,
    depth: c_int,
    window: xlib::Window,
    gc: Gc,
    // Declared before `pixels`: the header goes before the buffer it describes.
    image: Image,
    pixels: Vec<Cell>,
    width: u32,
    height: u32,
}

impl X11Surface {
    /// Fails with [`Error::ProtocolFailure`] if the server rejects the
    /// graphics context, e.g. because `window` is not a live drawable.
    pub fn create(
        connection: &Connection,
        window: xlib::Window,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let display = connection.display();
        let (visual, depth) = (connection.visual(), connection.depth());

        let layout = ImageLayout::new(width, height)?;
        let mut pixels = alloc_cells(layout.cells)?;
        let trap = ErrorTrap::begin(display);
        let gc = Gc::create(display, window)?;
        let image = Image::wrap(display, visual, depth, &mut pixels, layout)?;
        if let Some(err) = trap.finish() {
            return Err(Error::ProtocolFailure(format!(
                "surface for window {}: {}",
                window, err
            )));
        }
        debug!(
            "X11Surface: window {} {}x{} (depth {})",
            window, width, height, depth
        );

        Ok(Self {
            display,
            visual,
            depth,
            window,
            gc,
            image,
            pixels,
            width,
            height,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&mut self) -> PixmapMut<'_> {
        PixmapMut::packed(&mut self.pixels, self.width as usize, self.height as usize)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let (layout, mut pixels) = resized_pixels(&self.pixels, self.size(), width, height)?;
        let image = Image::wrap(self.display, self.visual, self.depth, &mut pixels, layout)?;

        // Swap header and buffer together, then release the old pair.
        let old_image = std::mem::replace(&mut self.image, image);
        let old_pixels = std::mem::replace(&mut self.pixels, pixels);
        self.width = width;
        self.height = height;
        drop(old_image);
        drop(old_pixels);
        Ok(())
    }

    /// Copies the buffer to the window and waits for the server to accept
    /// it. A rejected frame is a [`Error::ProtocolFailure`]; the surface is
    /// unchanged.
    pub fn present(&mut self) -> Result<()> {
        let trap = ErrorTrap::begin(self.display);
        // SAFETY: image, gc and window all belong to the live display.
        unsafe {
            xlib::XPutImage(
                self.display,
                self.window,
                self.gc.gc,
                self.image.ptr.as_ptr(),
                0,
                0,
                0,
                0,
                self.width as c_uint,
                self.height as c_uint,
            );
        }
        if let Some(err) = trap.finish() {
            return Err(Error::ProtocolFailure(format!("XPutImage: {}", err)));
        }
        trace!("X11Surface: put {}x{} to window {}", self.width, self.height, self.window);
        Ok(())
    }
}

/// Layout and contents of the buffer replacing `old` (of size `old_size`) at
/// `width x height`: the top-left overlap is kept, everything else is zero.
fn resized_pixels(
    old: &[Cell],
    old_size: (u32, u32),
    width: u32,
    height: u32,
) -> Result<(ImageLayout, Vec<Cell>)> {
    let layout = ImageLayout::new(width, height)?;
    let mut pixels = alloc_cells(layout.cells)?;
    copy_overlap(
        &mut PixmapMut::packed(&mut pixels, width as usize, height as usize),
        &Pixmap::packed(old, old_size.0 as usize, old_size.1 as usize),
    );
    Ok((layout, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_describe_packed_rows_of_four_byte_cells() {
        let layout = ImageLayout::new(3, 2).unwrap();
        assert_eq!(
            layout,
            ImageLayout {
                width: 3,
                height: 2,
                bytes_per_line: 12,
                cells: 6,
            }
        );
    }

    #[test]
    fn it_should_reject_rows_wider_than_an_image_can_address() {
        // 2^29 cells per row is 2^31 bytes, one past c_int.
        assert!(matches!(
            ImageLayout::new(1 << 29, 1),
            Err(Error::AllocationFailure { .. })
        ));
        assert!(ImageLayout::new((1 << 29) - 1, 1).is_ok());
    }

    #[test]
    fn it_should_rebuild_buffer_and_layout_for_the_new_size() {
        // 3x2 numbered 1..=6.
        let old: Vec<Cell> = (1..=6).collect();

        let (layout, grown) = resized_pixels(&old, (3, 2), 4, 3).unwrap();
        assert_eq!((layout.width, layout.height, layout.bytes_per_line), (4, 3, 16));
        assert_eq!(grown, vec![1, 2, 3, 0, 4, 5, 6, 0, 0, 0, 0, 0]);

        let (layout, shrunk) = resized_pixels(&old, (3, 2), 2, 1).unwrap();
        assert_eq!((layout.width, layout.height, layout.cells), (2, 1, 2));
        assert_eq!(shrunk, vec![1, 2]);
    }
}
