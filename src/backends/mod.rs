// src/backends/mod.rs

//! Native presentation backends.
//!
//! Each backend owns one pixel buffer plus whatever the window system needs
//! to show it, and implements the same four operations the
//! [`Surface`](crate::surface::Surface) dispatches to: `create`, `pixels`,
//! `resize` and `present`. Destruction is `Drop`.

pub mod headless;
pub mod wayland;
pub mod x11;
