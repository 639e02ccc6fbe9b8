// src/backends/x11/mod.rs

//! X11 backend: Xlib connection and window, the XImage surface, and the XKB
//! keymap reader.

pub mod connection;
pub mod keymap;
pub mod surface;
pub mod window;

pub use connection::Connection;
pub use keymap::load_layout;
pub use surface::X11Surface;
pub use window::{Window, WindowEvent};
