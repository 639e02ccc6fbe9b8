// src/lib.rs

//! Native back-end of the canvas drawing surface.
//!
//! Two independent halves live here:
//! - [`surface`]: one lifecycle contract (`create`, `resize`, `present`,
//!   `destroy`) over divergent native buffer models, with the concrete
//!   window-system code under [`backends`] and the anonymous shared-memory
//!   allocator in [`shm`].
//! - [`keyboard`] and [`keysym`]: resolution of raw hardware key events
//!   (keycode + modifier state) through XKB group/level tables into a keysym,
//!   and translation of that keysym into a Unicode scalar.

pub mod backends;
pub mod config;
pub mod error;
pub mod keyboard;
pub mod keys;
pub mod keysym;
pub mod pixmap;
pub mod shm;
pub mod surface;

pub use error::{Error, Result};
pub use keyboard::{resolve_key_event, Keyboard, KeyboardLayout, KeyResolution};
pub use surface::{Surface, Target};
