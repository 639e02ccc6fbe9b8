// src/backends/x11/window.rs
#![allow(non_snake_case)] // Allow non-snake case for X11 types

//! A top-level Xlib window for the demo driver, and translation of the few
//! X events it reacts to.

use super::connection::Connection;
use anyhow::{anyhow, Context, Result};
use log::{debug, info, trace};
use std::ffi::CString;
use std::mem;

use libc::{c_char, c_uint};
use x11::xlib;

/// Events the demo loop cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// Raw keycode and core state field, ready for keyboard resolution.
    Key { keycode: u8, state: u32 },
    /// The window now has this size.
    Resized { width: u32, height: u32 },
    /// Contents need redrawing.
    Expose,
    /// The server's keyboard mapping changed; reload the layout.
    KeyboardMappingChanged,
    /// The window manager asked the window to close.
    CloseRequested,
}

/// An InputOutput window on the default screen, destroyed on drop.
#[derive(Debug)]
pub struct Window {
    display: *mut xlib::Display,
    id: xlib::Window,
    wm_delete_window: xlib::Atom,
    protocols_atom: xlib::Atom,
    width: u32,
    height: u32,
}

impl Window {
    /// Creates, titles and maps a `width x height` window.
    pub fn create(connection: &Connection, width: u32, height: u32, title: &str) -> Result<Self> {
        info!("Creating X11 window: {}x{}px '{}'", width, height, title);
        let display = connection.display();
        let title_cstr = CString::new(title).context("Failed to create CString for title")?;

        // SAFETY: Xlib calls on a live display; `attributes` outlives the call.
        let id = unsafe {
            let mut attributes: xlib::XSetWindowAttributes = mem::zeroed();
            attributes.background_pixel = xlib::XBlackPixel(display, connection.screen());
            attributes.event_mask =
                xlib::ExposureMask | xlib::KeyPressMask | xlib::StructureNotifyMask;

            xlib::XCreateWindow(
                display,
                connection.root(),
                0,
                0,
                width as c_uint,
                height as c_uint,
                0,
                connection.depth(),
                xlib::InputOutput as c_uint,
                connection.visual(),
                xlib::CWBackPixel | xlib::CWEventMask,
                &mut attributes,
            )
        };
        if id == 0 {
            return Err(anyhow!("XCreateWindow failed"));
        }
        debug!("X window created (ID: {})", id);

        // SAFETY: as above, `id` is the window just created.
        let (wm_delete_window, protocols_atom) = unsafe {
            let wm_delete_window = xlib::XInternAtom(
                display,
                b"WM_DELETE_WINDOW\0".as_ptr() as *const c_char,
                xlib::False,
            );
            let protocols_atom = xlib::XInternAtom(
                display,
                b"WM_PROTOCOLS\0".as_ptr() as *const c_char,
                xlib::False,
            );
            let mut protocols = [wm_delete_window];
            xlib::XSetWMProtocols(display, id, protocols.as_mut_ptr(), 1);
            xlib::XStoreName(display, id, title_cstr.as_ptr() as *mut c_char);
            xlib::XMapWindow(display, id);
            xlib::XFlush(display);
            (wm_delete_window, protocols_atom)
        };

        Ok(Self {
            display,
            id,
            wm_delete_window,
            protocols_atom,
            width,
            height,
        })
    }

    pub fn id(&self) -> xlib::Window {
        self.id
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Next interesting event, without blocking. Events of other kinds are
    /// consumed and skipped.
    pub fn poll_event(&mut self) -> Option<WindowEvent> {
        // SAFETY: XPending/XNextEvent on the live display; `event` is fully
        // written by XNextEvent before any union field is read.
        unsafe {
            while xlib::XPending(self.display) > 0 {
                let mut event: xlib::XEvent = mem::zeroed();
                xlib::XNextEvent(self.display, &mut event);
                if let Some(translated) = self.translate(&event) {
                    return Some(translated);
                }
            }
        }
        None
    }

    /// # Safety
    ///
    /// `event` must have been filled in by Xlib.
    unsafe fn translate(&mut self, event: &xlib::XEvent) -> Option<WindowEvent> {
        match event.get_type() {
            xlib::KeyPress => {
                let key = event.key;
                Some(WindowEvent::Key {
                    keycode: key.keycode as u8,
                    state: key.state,
                })
            }
            xlib::ConfigureNotify => {
                let cfg = event.configure;
                let (width, height) = (cfg.width.max(1) as u32, cfg.height.max(1) as u32);
                if (width, height) == (self.width, self.height) {
                    return None;
                }
                self.width = width;
                self.height = height;
                Some(WindowEvent::Resized { width, height })
            }
            xlib::Expose if event.expose.count == 0 => Some(WindowEvent::Expose),
            xlib::MappingNotify => {
                let mut mapping = event.mapping;
                xlib::XRefreshKeyboardMapping(&mut mapping);
                (mapping.request == xlib::MappingKeyboard)
                    .then_some(WindowEvent::KeyboardMappingChanged)
            }
            xlib::ClientMessage => {
                let msg = event.client_message;
                let is_delete = msg.message_type == self.protocols_atom
                    && msg.format == 32
                    && msg.data.get_long(0) as xlib::Atom == self.wm_delete_window;
                is_delete.then_some(WindowEvent::CloseRequested)
            }
            other => {
                trace!("Ignoring X event type {}", other);
                None
            }
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        info!("Destroying X11 window {}", self.id);
        // SAFETY: the window was created on this display, which outlives it.
        unsafe {
            xlib::XDestroyWindow(self.display, self.id);
            xlib::XFlush(self.display);
        }
    }
}
