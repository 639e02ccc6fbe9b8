// src/surface/mod.rs

//! The drawable surface and its lifecycle.
//!
//! A [`Surface`] is either `Active`, holding exactly one [`Backend`] variant,
//! or `Destroyed`. Every backend owns its pixel buffer and keeps buffer and
//! dimensions in step: `resize` builds the complete new buffer (overlap
//! copied, the rest zeroed) before swapping it in, so neither drawing code
//! nor `present` can ever see a half-copied buffer or a buffer whose extent
//! disagrees with `width()`/`height()`.
//!
//! Failures are transactional. `create` releases everything it acquired
//! before returning an error; a failed `resize` leaves the old buffer and
//! dimensions in place; a failed `present` only drops that frame.

use crate::backends::headless::HeadlessSurface;
use crate::backends::wayland::{WaylandSurface, WaylandTarget};
use crate::backends::x11::{Connection as X11Connection, X11Surface};
use crate::error::{Error, Result};
use crate::pixmap::{Cell, PixmapMut, CELL_SIZE};

use log::{debug, error, info, trace, warn};
use x11::xlib;

/// Where a surface is presented.
pub enum Target<'a> {
    /// An Xlib window. The connection must outlive the surface.
    X11 {
        connection: &'a X11Connection,
        window: xlib::Window,
    },
    /// A `wl_surface` plus the `wl_shm` global to allocate from.
    Wayland(&'a WaylandTarget),
    /// No window system; frames are only counted.
    Headless,
}

/// Tag of a [`Backend`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    X11,
    Wayland,
    Headless,
}

/// Backend-specific buffer and presentation state.
#[derive(Debug)]
pub enum Backend {
    X11(X11Surface),
    Wayland(WaylandSurface),
    Headless(HeadlessSurface),
}

impl Backend {
    pub fn kind(&self) -> BackendKind {
        match self {
            Backend::X11(_) => BackendKind::X11,
            Backend::Wayland(_) => BackendKind::Wayland,
            Backend::Headless(_) => BackendKind::Headless,
        }
    }

    fn size(&self) -> (u32, u32) {
        match self {
            Backend::X11(s) => s.size(),
            Backend::Wayland(s) => s.size(),
            Backend::Headless(s) => s.size(),
        }
    }

    fn pixels(&mut self) -> PixmapMut<'_> {
        match self {
            Backend::X11(s) => s.pixels(),
            Backend::Wayland(s) => s.pixels(),
            Backend::Headless(s) => s.pixels(),
        }
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        match self {
            Backend::X11(s) => s.resize(width, height),
            Backend::Wayland(s) => s.resize(width, height),
            Backend::Headless(s) => s.resize(width, height),
        }
    }

    fn present(&mut self) -> Result<()> {
        match self {
            Backend::X11(s) => s.present(),
            Backend::Wayland(s) => s.present(),
            Backend::Headless(s) => s.present(),
        }
    }
}

#[derive(Debug)]
enum State {
    Active(Backend),
    Destroyed,
}

/// A drawable surface bound to one native window.
#[derive(Debug)]
pub struct Surface {
    state: State,
}

impl Surface {
    /// Creates a `width x height` surface presenting to `target`.
    ///
    /// Fails with [`Error::InvalidDimensions`] for a zero dimension,
    /// [`Error::AllocationFailure`] / [`Error::RetriesExhausted`] if the pixel
    /// buffer could not be obtained, and [`Error::ProtocolFailure`] if the
    /// window system rejected a request.
    pub fn create(target: Target<'_>, width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;

        let backend = match target {
            Target::X11 { connection, window } => {
                Backend::X11(X11Surface::create(connection, window, width, height)?)
            }
            Target::Wayland(target) => {
                Backend::Wayland(WaylandSurface::create(target, width, height)?)
            }
            Target::Headless => Backend::Headless(HeadlessSurface::create(width, height)?),
        };

        info!("Created {:?} surface {}x{}", backend.kind(), width, height);
        Ok(Self {
            state: State::Active(backend),
        })
    }

    fn active(&self) -> Result<&Backend> {
        match &self.state {
            State::Active(backend) => Ok(backend),
            State::Destroyed => {
                error!("Surface used after destroy");
                Err(Error::UseAfterDestroy)
            }
        }
    }

    fn active_mut(&mut self) -> Result<&mut Backend> {
        match &mut self.state {
            State::Active(backend) => Ok(backend),
            State::Destroyed => {
                error!("Surface used after destroy");
                Err(Error::UseAfterDestroy)
            }
        }
    }

    pub fn is_destroyed(&self) -> bool {
        matches!(self.state, State::Destroyed)
    }

    pub fn kind(&self) -> Result<BackendKind> {
        self.active().map(Backend::kind)
    }

    /// Committed `(width, height)`.
    pub fn size(&self) -> Result<(u32, u32)> {
        self.active().map(Backend::size)
    }

    pub fn width(&self) -> Result<u32> {
        self.size().map(|(w, _)| w)
    }

    pub fn height(&self) -> Result<u32> {
        self.size().map(|(_, h)| h)
    }

    /// The current pixel buffer, for drawing.
    pub fn pixels(&mut self) -> Result<PixmapMut<'_>> {
        self.active_mut().map(Backend::pixels)
    }

    /// Direct access to the backend, e.g. for backend-specific queries.
    pub fn backend_mut(&mut self) -> Result<&mut Backend> {
        self.active_mut()
    }

    /// Reallocates the buffer at the new size, keeping the top-left overlap
    /// and zeroing newly exposed cells. On failure nothing changes.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let backend = self.active_mut()?;
        check_dimensions(width, height)?;

        let (old_w, old_h) = backend.size();
        backend.resize(width, height)?;
        debug!(
            "Resized {:?} surface {}x{} -> {}x{}",
            backend.kind(),
            old_w,
            old_h,
            width,
            height
        );
        Ok(())
    }

    /// Submits the current buffer for display.
    ///
    /// A rejected frame is logged and returned as an error, but the surface
    /// stays usable.
    pub fn present(&mut self) -> Result<()> {
        let backend = self.active_mut()?;
        match backend.present() {
            Ok(()) => {
                trace!("Presented {:?} frame {:?}", backend.kind(), backend.size());
                Ok(())
            }
            Err(e) => {
                warn!("Dropped {:?} frame: {}", backend.kind(), e);
                Err(e)
            }
        }
    }

    /// Releases the backend's presentation state and pixel buffer.
    ///
    /// The surface is `Destroyed` afterwards; destroying it again fails with
    /// [`Error::UseAfterDestroy`].
    pub fn destroy(&mut self) -> Result<()> {
        self.active()?;
        if let State::Active(backend) = std::mem::replace(&mut self.state, State::Destroyed) {
            let kind = backend.kind();
            drop(backend);
            info!("Destroyed {:?} surface", kind);
        }
        Ok(())
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        if !self.is_destroyed() {
            let _ = self.destroy();
        }
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Number of cells in a `width x height` frame, if it is addressable.
pub(crate) fn frame_cells(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .filter(|cells| cells.checked_mul(CELL_SIZE).is_some())
        .ok_or_else(|| Error::allocation_msg(format!("{}x{} frame is too large", width, height)))
}

/// Zeroed heap buffer of `cells` cells; allocation failure is an error, not
/// an abort.
pub(crate) fn alloc_cells(cells: usize) -> Result<Vec<Cell>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(cells)
        .map_err(|e| Error::allocation_msg(format!("pixel buffer of {} cells: {}", cells, e)))?;
    buf.resize(cells, 0);
    Ok(buf)
}

#[cfg(test)]
mod tests;
