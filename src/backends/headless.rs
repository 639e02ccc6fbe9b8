// src/backends/headless.rs

//! Surface backend without a window system.
//!
//! Keeps the buffer in process memory and records presented frames. Used by
//! the demo when no display is available and by the surface tests.

use crate::error::{Error, Result};
use crate::pixmap::{copy_overlap, Cell, Pixmap, PixmapMut};
use crate::surface::{alloc_cells, frame_cells};
use log::{info, trace};

#[derive(Debug)]
pub struct HeadlessSurface {
    buffer: Vec<Cell>,
    width: u32,
    height: u32,
    presented: u64,
    last_frame: Option<Vec<Cell>>,
    fail_next_present: bool,
}

impl HeadlessSurface {
    pub fn create(width: u32, height: u32) -> Result<Self> {
        let buffer = alloc_cells(frame_cells(width, height)?)?;
        info!("HeadlessSurface: {}x{} buffer allocated", width, height);
        Ok(Self {
            buffer,
            width,
            height,
            presented: 0,
            last_frame: None,
            fail_next_present: false,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&mut self) -> PixmapMut<'_> {
        PixmapMut::packed(&mut self.buffer, self.width as usize, self.height as usize)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let mut next = alloc_cells(frame_cells(width, height)?)?;
        copy_overlap(
            &mut PixmapMut::packed(&mut next, width as usize, height as usize),
            &Pixmap::packed(&self.buffer, self.width as usize, self.height as usize),
        );
        let old = std::mem::replace(&mut self.buffer, next);
        self.width = width;
        self.height = height;
        drop(old);
        trace!("HeadlessSurface: resized to {}x{}", width, height);
        Ok(())
    }

    /// Snapshots the buffer as the latest frame.
    pub fn present(&mut self) -> Result<()> {
        if std::mem::take(&mut self.fail_next_present) {
            return Err(Error::ProtocolFailure("headless present rejected".into()));
        }
        self.presented += 1;
        self.last_frame = Some(self.buffer.clone());
        trace!("HeadlessSurface: frame {} presented", self.presented);
        Ok(())
    }

    /// Frames presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Contents of the most recent presented frame.
    pub fn last_frame(&self) -> Option<&[Cell]> {
        self.last_frame.as_deref()
    }

    /// Makes the next `present` fail, as a compositor rejecting a frame would.
    pub fn reject_next_present(&mut self) {
        self.fail_next_present = true;
    }
}
