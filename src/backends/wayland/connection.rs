// src/backends/wayland/connection.rs

//! Wayland display connection, global binding and an xdg toplevel window
//! for the demo driver.

use super::surface::WaylandTarget;
use anyhow::{anyhow, Context, Result};
use log::{debug, info, trace};
use wayland_client::{
    protocol::{wl_compositor, wl_registry, wl_shm, wl_surface},
    Connection, Dispatch, EventQueue, QueueHandle,
};
use wayland_protocols::xdg::shell::client::{xdg_surface, xdg_toplevel, xdg_wm_base};

/// Globals and window state updated by the main event queue.
#[derive(Debug, Default)]
pub struct WaylandState {
    pub compositor: Option<wl_compositor::WlCompositor>,
    pub shm: Option<wl_shm::WlShm>,
    pub xdg_wm_base: Option<xdg_wm_base::XdgWmBase>,
    configured: bool,
    pending_size: Option<(u32, u32)>,
    close_requested: bool,
}

/// A connected display with its globals bound.
pub struct WaylandConnection {
    conn: Connection,
    queue: EventQueue<WaylandState>,
    state: WaylandState,
}

impl WaylandConnection {
    /// Connects through `WAYLAND_DISPLAY` and binds `wl_compositor`, `wl_shm`
    /// and `xdg_wm_base`.
    pub fn connect() -> Result<Self> {
        info!("Connecting to Wayland display...");
        let conn = Connection::connect_to_env().context("Wayland connection failed")?;
        let mut queue: EventQueue<WaylandState> = conn.new_event_queue();
        let qh = queue.handle();

        let _registry = conn.display().get_registry(&qh, ());
        let mut state = WaylandState::default();
        queue
            .roundtrip(&mut state)
            .context("Wayland roundtrip failed while discovering globals")?;
        debug!("Globals discovered: {:?}", state);

        if state.compositor.is_none() {
            return Err(anyhow!("wl_compositor not found"));
        }
        if state.shm.is_none() {
            return Err(anyhow!("wl_shm not found"));
        }
        if state.xdg_wm_base.is_none() {
            return Err(anyhow!("xdg_wm_base not found"));
        }

        info!("Wayland connection established.");
        Ok(Self { conn, queue, state })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Creates a toplevel and waits for its first configure.
    pub fn create_window(&mut self, title: &str) -> Result<WaylandWindow> {
        let qh = self.queue.handle();
        let (compositor, wm_base) = match (&self.state.compositor, &self.state.xdg_wm_base) {
            (Some(c), Some(w)) => (c, w),
            _ => return Err(anyhow!("Cannot create window: globals not bound")),
        };

        let surface = compositor.create_surface(&qh, ());
        let xdg_surface = wm_base.get_xdg_surface(&surface, &qh, ());
        let toplevel = xdg_surface.get_toplevel(&qh, ());
        toplevel.set_title(title.to_string());
        toplevel.set_app_id("canvas-native".to_string());
        surface.commit();

        self.state.configured = false;
        while !self.state.configured {
            self.queue
                .blocking_dispatch(&mut self.state)
                .context("Wayland dispatch failed while waiting for configure")?;
        }
        info!("Wayland: toplevel '{}' configured", title);

        Ok(WaylandWindow {
            surface,
            xdg_surface,
            toplevel,
        })
    }

    /// What a [`Surface`](crate::surface::Surface) needs to present into `window`.
    pub fn target(&self, window: &WaylandWindow) -> Result<WaylandTarget> {
        let shm = self
            .state
            .shm
            .clone()
            .ok_or_else(|| anyhow!("wl_shm not bound"))?;
        Ok(WaylandTarget::new(
            self.conn.clone(),
            shm,
            window.surface.clone(),
        ))
    }

    /// Sends pending requests and processes whatever the compositor has sent,
    /// without blocking.
    pub fn dispatch(&mut self) -> Result<()> {
        self.conn.flush().context("Wayland flush failed")?;
        if let Some(guard) = self.conn.prepare_read() {
            // Nothing to read is not an error.
            if let Err(e) = guard.read() {
                trace!("Wayland read: {}", e);
            }
        }
        self.queue
            .dispatch_pending(&mut self.state)
            .context("Wayland dispatch failed")?;
        Ok(())
    }

    /// Size the compositor asked for since the last call, if any.
    pub fn take_resize(&mut self) -> Option<(u32, u32)> {
        self.state.pending_size.take()
    }

    pub fn close_requested(&self) -> bool {
        self.state.close_requested
    }
}

/// An xdg toplevel and its `wl_surface`, destroyed on drop.
#[derive(Debug)]
pub struct WaylandWindow {
    surface: wl_surface::WlSurface,
    xdg_surface: xdg_surface::XdgSurface,
    toplevel: xdg_toplevel::XdgToplevel,
}

impl Drop for WaylandWindow {
    fn drop(&mut self) {
        info!("Destroying Wayland toplevel");
        self.toplevel.destroy();
        self.xdg_surface.destroy();
        self.surface.destroy();
    }
}

impl Dispatch<wl_registry::WlRegistry, ()> for WaylandState {
    fn event(
        state: &mut Self,
        registry: &wl_registry::WlRegistry,
        event: wl_registry::Event,
        _: &(),
        _: &Connection,
        qh: &QueueHandle<Self>,
    ) {
        if let wl_registry::Event::Global {
            name,
            interface,
            version,
        } = event
        {
            trace!(
                "Wayland global: name={}, interface={}, version={}",
                name,
                interface,
                version
            );
            match interface.as_str() {
                "wl_compositor" => {
                    // damage_buffer needs version 4.
                    let compositor = registry.bind::<wl_compositor::WlCompositor, _, _>(
                        name,
                        version.min(4),
                        qh,
                        (),
                    );
                    state.compositor = Some(compositor);
                }
                "wl_shm" => {
                    let shm = registry.bind::<wl_shm::WlShm, _, _>(name, version.min(1), qh, ());
                    state.shm = Some(shm);
                }
                "xdg_wm_base" => {
                    let wm_base =
                        registry.bind::<xdg_wm_base::XdgWmBase, _, _>(name, version.min(1), qh, ());
                    state.xdg_wm_base = Some(wm_base);
                }
                _ => {}
            }
        }
    }
}

impl Dispatch<wl_compositor::WlCompositor, ()> for WaylandState {
    fn event(
        _: &mut Self,
        _: &wl_compositor::WlCompositor,
        _: wl_compositor::Event,
        _: &(),
        _: &Connection,
        _: &QueueHandle<Self>,
    ) {
    }
}

impl Dispatch<wl_shm::WlShm, ()> for WaylandState {
    fn event(
        _: &mut Self,
        _: &wl_shm::WlShm,
        event: wl_shm::Event,
        _: &(),
        _: &Connection,
        _: &QueueHandle<Self>,
    ) {
        if let wl_shm::Event::Format { format } = event {
            trace!("wl_shm supports {:?}", format);
        }
    }
}

impl Dispatch<wl_surface::WlSurface, ()> for WaylandState {
    fn event(
        _: &mut Self,
        _: &wl_surface::WlSurface,
        _: wl_surface::Event,
        _: &(),
        _: &Connection,
        _: &QueueHandle<Self>,
    ) {
    }
}

impl Dispatch<xdg_wm_base::XdgWmBase, ()> for WaylandState {
    fn event(
        _: &mut Self,
        wm_base: &xdg_wm_base::XdgWmBase,
        event: xdg_wm_base::Event,
        _: &(),
        _: &Connection,
        _: &QueueHandle<Self>,
    ) {
        if let xdg_wm_base::Event::Ping { serial } = event {
            wm_base.pong(serial);
            trace!("XdgWmBase: ponged serial {}", serial);
        }
    }
}

impl Dispatch<xdg_surface::XdgSurface, ()> for WaylandState {
    fn event(
        state: &mut Self,
        xdg_surface: &xdg_surface::XdgSurface,
        event: xdg_surface::Event,
        _: &(),
        _: &Connection,
        _: &QueueHandle<Self>,
    ) {
        if let xdg_surface::Event::Configure { serial } = event {
            xdg_surface.ack_configure(serial);
            state.configured = true;
        }
    }
}

impl Dispatch<xdg_toplevel::XdgToplevel, ()> for WaylandState {
    fn event(
        state: &mut Self,
        _: &xdg_toplevel::XdgToplevel,
        event: xdg_toplevel::Event,
        _: &(),
        _: &Connection,
        _: &QueueHandle<Self>,
    ) {
        match event {
            // 0x0 means "client decides".
            xdg_toplevel::Event::Configure { width, height, .. } if width > 0 && height > 0 => {
                state.pending_size = Some((width as u32, height as u32));
            }
            xdg_toplevel::Event::Close => {
                info!("Compositor requested close");
                state.close_requested = true;
            }
            _ => {}
        }
    }
}
