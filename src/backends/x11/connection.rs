// src/backends/x11/connection.rs
#![allow(non_snake_case)] // Allow non-snake case for X11 types

use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::cell::Cell;
use std::ffi::CString;
use std::fmt;
use std::os::unix::io::RawFd;
use std::ptr;

use libc::{c_int, c_uchar, c_ulong};
use x11::xlib;

/// A protocol error reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XErrorRecord {
    pub serial: c_ulong,
    pub error_code: c_uchar,
    pub request_code: c_uchar,
    pub minor_code: c_uchar,
    pub resource_id: xlib::XID,
}

impl fmt::Display for XErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X error {} on request {}.{} (resource {:#x}, serial {})",
            self.error_code, self.request_code, self.minor_code, self.resource_id, self.serial
        )
    }
}

// Latest error delivered to this thread's handler. Errors arrive in serial
// order, so the latest one has the highest serial.
thread_local! {
    static LAST_ERROR: Cell<Option<XErrorRecord>> = const { Cell::new(None) };
}

/// Error handler installed by [`Connection::open`]. Replaces Xlib's default
/// handler, which exits the process.
unsafe extern "C" fn record_error(
    _display: *mut xlib::Display,
    event: *mut xlib::XErrorEvent,
) -> c_int {
    if let Some(ev) = event.as_ref() {
        let record = XErrorRecord {
            serial: ev.serial,
            error_code: ev.error_code,
            request_code: ev.request_code,
            minor_code: ev.minor_code,
            resource_id: ev.resourceid,
        };
        debug!("Recorded {}", record);
        LAST_ERROR.with(|e| e.set(Some(record)));
    }
    0
}

fn take_error() -> Option<XErrorRecord> {
    LAST_ERROR.with(|e| e.take())
}

/// `record` if it was caused by a request issued at or after `first_serial`.
fn error_since(record: Option<XErrorRecord>, first_serial: c_ulong) -> Option<XErrorRecord> {
    record.filter(|r| r.serial >= first_serial)
}

/// Collects protocol errors caused by the requests issued between
/// [`ErrorTrap::begin`] and [`ErrorTrap::finish`].
#[derive(Debug)]
pub(crate) struct ErrorTrap {
    display: *mut xlib::Display,
    first_serial: c_ulong,
}

impl ErrorTrap {
    pub(crate) fn begin(display: *mut xlib::Display) -> Self {
        // SAFETY: live display.
        let first_serial = unsafe { xlib::XNextRequest(display) };
        Self {
            display,
            first_serial,
        }
    }

    /// Waits for the server to process every request so far and returns the
    /// error, if any, one of the trapped requests caused.
    pub(crate) fn finish(self) -> Option<XErrorRecord> {
        // SAFETY: live display.
        unsafe {
            xlib::XSync(self.display, xlib::False);
        }
        error_since(take_error(), self.first_serial)
    }
}

/// Owns an Xlib `Display` pointer and closes it on drop.
#[derive(Debug)]
struct ManagedDisplay {
    ptr: *mut xlib::Display,
}

impl ManagedDisplay {
    /// Calls `XOpenDisplay`. `None` means the `DISPLAY` environment variable.
    fn open(name: Option<&str>) -> Result<Self> {
        let name = name.map(CString::new).transpose()?;
        let name_ptr = name.as_ref().map_or(ptr::null(), |n| n.as_ptr());
        // SAFETY: `name_ptr` is null or a NUL-terminated string that outlives the call.
        let display_ptr = unsafe { xlib::XOpenDisplay(name_ptr) };
        if display_ptr.is_null() {
            Err(anyhow!(
                "Failed to open X display {:?}. Check DISPLAY environment variable or X server status.",
                name
            ))
        } else {
            debug!("X display opened: {:p}", display_ptr);
            Ok(Self { ptr: display_ptr })
        }
    }

    #[inline]
    fn raw(&self) -> *mut xlib::Display {
        self.ptr
    }
}

impl Drop for ManagedDisplay {
    fn drop(&mut self) {
        if self.ptr.is_null() {
            return;
        }
        info!("Closing X11 display connection: {:p}", self.ptr);
        // SAFETY: `ptr` came from XOpenDisplay and is closed exactly once.
        let status = unsafe { xlib::XCloseDisplay(self.ptr) };
        if status != 0 {
            warn!(
                "XCloseDisplay returned non-zero status: {}. Display may not have closed cleanly.",
                status
            );
        }
    }
}

/// Connection to the X server plus the default screen's visual and depth.
///
/// Everything created against this connection (windows, surfaces, keyboard
/// descriptions) borrows the display pointer, so the `Connection` must be
/// dropped last.
#[derive(Debug)]
pub struct Connection {
    managed_display: ManagedDisplay,
    screen: c_int,
    root: xlib::Window,
    visual: *mut xlib::Visual,
    depth: c_int,
}

impl Connection {
    /// Opens `display_name`, or the display named by `DISPLAY` when `None`.
    pub fn open(display_name: Option<&str>) -> Result<Self> {
        info!("Establishing X11 server connection.");
        let managed_display = ManagedDisplay::open(display_name)?;
        let display = managed_display.raw();

        // SAFETY: `display` is a live connection for all of these queries.
        let (screen, root, visual, depth) = unsafe {
            let screen = xlib::XDefaultScreen(display);
            (
                screen,
                xlib::XRootWindow(display, screen),
                xlib::XDefaultVisual(display, screen),
                xlib::XDefaultDepth(display, screen),
            )
        };
        if visual.is_null() {
            // ManagedDisplay's Drop closes the display.
            return Err(anyhow!("Failed to get default visual for screen {}.", screen));
        }
        // SAFETY: `record_error` only reads the event it is handed.
        unsafe {
            xlib::XSetErrorHandler(Some(record_error));
        }

        debug!(
            "Default screen {}: root {}, visual {:p}, depth {}",
            screen, root, visual, depth
        );

        info!("X11 server connection established.");
        Ok(Connection {
            managed_display,
            screen,
            root,
            visual,
            depth,
        })
    }

    /// The raw display pointer. Valid as long as `self` is.
    #[inline]
    pub fn display(&self) -> *mut xlib::Display {
        self.managed_display.raw()
    }

    #[inline]
    pub fn screen(&self) -> c_int {
        self.screen
    }

    #[inline]
    pub fn root(&self) -> xlib::Window {
        self.root
    }

    #[inline]
    pub fn visual(&self) -> *mut xlib::Visual {
        self.visual
    }

    #[inline]
    pub fn depth(&self) -> c_int {
        self.depth
    }

    /// Descriptor to poll for pending X events.
    pub fn event_fd(&self) -> Option<RawFd> {
        if self.managed_display.ptr.is_null() {
            warn!("event_fd called on a closed or invalid X display.");
            None
        } else {
            // SAFETY: non-null display.
            Some(unsafe { xlib::XConnectionNumber(self.display()) })
        }
    }
}
