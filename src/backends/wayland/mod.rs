// src/backends/wayland/mod.rs

//! Wayland backend: display connection and xdg toplevel, and the `wl_shm`
//! surface.

pub mod connection;
pub mod surface;

pub use connection::{WaylandConnection, WaylandWindow};
pub use surface::{WaylandSurface, WaylandTarget, POOL_SLACK};
