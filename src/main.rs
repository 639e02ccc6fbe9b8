// src/main.rs

//! Demo driver: opens a window on the configured backend, animates a
//! gradient through a [`Surface`], resizes it once, and (on X11) resolves key
//! presses through the server's XKB layout.

use canvas_native::backends::wayland::WaylandConnection;
use canvas_native::backends::x11::{self, WindowEvent};
use canvas_native::config::{BackendChoice, Config, CONFIG};
use canvas_native::keys::{KeySymbol, Modifiers};
use canvas_native::pixmap::Cell;
use canvas_native::{Keyboard, Surface, Target};

use anyhow::Context;
use log::{debug, info, warn};
use std::time::Duration;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config: &Config = &CONFIG;
    let backend = config.backend.resolve();
    info!("Starting canvas-native demo on {:?}", backend);

    match backend {
        BackendChoice::X11 => run_x11(config),
        BackendChoice::Wayland => run_wayland(config),
        BackendChoice::Headless | BackendChoice::Auto => run_headless(config),
    }
}

/// Sizes to animate at, in order. Each gets `frames` frames.
fn phases(config: &Config) -> Vec<(u32, u32)> {
    let mut sizes = vec![(config.window.width, config.window.height)];
    sizes.extend(config.window.resize_to);
    sizes
}

/// Diagonal gradient that scrolls with `frame`.
fn draw(surface: &mut Surface, frame: u32) -> anyhow::Result<()> {
    let mut px = surface.pixels()?;
    let (w, h) = (px.width().max(1), px.height().max(1));
    for row in 0..px.height() {
        let line = px.row_mut(row);
        for (col, cell) in line.iter_mut().enumerate() {
            let r = (col * 255 / w) as Cell;
            let g = (row * 255 / h) as Cell;
            let b = frame.wrapping_mul(4) & 0xff;
            *cell = (r << 16) | (g << 8) | b;
        }
    }
    Ok(())
}

fn present_or_log(surface: &mut Surface) {
    if let Err(e) = surface.present() {
        debug!("Frame skipped: {}", e);
    }
}

fn run_headless(config: &Config) -> anyhow::Result<()> {
    let (width, height) = (config.window.width, config.window.height);
    let mut surface = Surface::create(Target::Headless, width, height)?;

    for (phase, (w, h)) in phases(config).into_iter().enumerate() {
        if phase > 0 {
            surface.resize(w, h)?;
        }
        for frame in 0..config.window.frames {
            draw(&mut surface, frame)?;
            present_or_log(&mut surface);
        }
        info!("Presented {} frames at {}x{}", config.window.frames, w, h);
    }

    surface.destroy()?;
    Ok(())
}

fn run_x11(config: &Config) -> anyhow::Result<()> {
    let conn = x11::Connection::open(None)?;
    let mut window = x11::Window::create(
        &conn,
        config.window.width,
        config.window.height,
        &config.window.title,
    )?;
    let mut keyboard = Keyboard::new(x11::load_layout(&conn).context("loading XKB layout")?);

    let (width, height) = window.size();
    let mut surface = Surface::create(
        Target::X11 {
            connection: &conn,
            window: window.id(),
        },
        width,
        height,
    )?;

    let mut frame = 0u32;
    let budget = config.window.frames.saturating_mul(phases(config).len() as u32);
    let mut pending_resize = config.window.resize_to;
    'frames: while frame < budget {
        while let Some(event) = window.poll_event() {
            match event {
                WindowEvent::Key { keycode, state } => {
                    let res = keyboard.resolve(keycode, state);
                    let symbol = KeySymbol::from_resolution(&res);
                    let mods = Modifiers::from_x11_state(state);
                    if config.keyboard.log_keys {
                        info!("key {} {:?} -> {:?} {:?}", keycode, mods, res, symbol);
                    } else {
                        debug!("key {} {:?} -> {:?} {:?}", keycode, mods, res, symbol);
                    }
                    if symbol == KeySymbol::Escape {
                        break 'frames;
                    }
                }
                WindowEvent::Resized { width, height } => surface.resize(width, height)?,
                WindowEvent::Expose => present_or_log(&mut surface),
                WindowEvent::KeyboardMappingChanged => match x11::load_layout(&conn) {
                    Ok(layout) => {
                        keyboard.replace_layout(layout);
                    }
                    Err(e) => warn!("Keeping previous keyboard layout: {}", e),
                },
                WindowEvent::CloseRequested => break 'frames,
            }
        }

        if frame == config.window.frames {
            if let Some((w, h)) = pending_resize.take() {
                surface.resize(w, h)?;
            }
        }
        draw(&mut surface, frame)?;
        present_or_log(&mut surface);
        frame += 1;
        std::thread::sleep(FRAME_INTERVAL);
    }

    surface.destroy()?;
    drop(window);
    Ok(())
}

fn run_wayland(config: &Config) -> anyhow::Result<()> {
    let mut conn = WaylandConnection::connect()?;
    let window = conn.create_window(&config.window.title)?;
    let target = conn.target(&window)?;

    let (mut width, mut height) = conn
        .take_resize()
        .unwrap_or((config.window.width, config.window.height));
    let mut surface = Surface::create(Target::Wayland(&target), width, height)?;

    let mut frame = 0u32;
    let budget = config.window.frames.saturating_mul(phases(config).len() as u32);
    let mut pending_resize = config.window.resize_to;
    while frame < budget && !conn.close_requested() {
        conn.dispatch()?;
        let requested = conn.take_resize().or_else(|| {
            (frame == config.window.frames)
                .then(|| pending_resize.take())
                .flatten()
        });
        if let Some((w, h)) = requested {
            if (w, h) != (width, height) {
                surface.resize(w, h)?;
                (width, height) = (w, h);
            }
        }

        draw(&mut surface, frame)?;
        present_or_log(&mut surface);
        frame += 1;
        std::thread::sleep(FRAME_INTERVAL);
    }

    surface.destroy()?;
    drop(window);
    Ok(())
}
