// src/backends/wayland/surface.rs

//! `wl_shm`-backed surface.
//!
//! Pixels live in a shared-memory pool sized [`POOL_SLACK`] times the frame,
//! so the compositor and the client can both map it. The current frame is a
//! `wl_buffer` at some offset in the pool. A resize first tries to place the
//! new frame in the part of the pool the current frame does not occupy; only
//! if it does not fit is a fresh pool allocated. Either way the overlap is
//! copied into the new frame before it replaces the old one.
//!
//! A replaced frame the compositor has not released yet is kept as retired:
//! its buffer stays alive and its region is not handed out again until the
//! `release` event arrives.
//!
//! Buffer and pool objects are dispatched on a private event queue, so
//! release events are tracked without involving the caller's queue.

use crate::error::{Error, Result};
use crate::pixmap::{copy_overlap, Cell, Pixmap, PixmapMut, CELL_SIZE};
use crate::shm::SharedBuffer;
use crate::surface::frame_cells;

use log::{debug, trace, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::ops::Range;
use std::sync::Arc;
use wayland_client::{
    protocol::{wl_buffer, wl_shm, wl_shm_pool, wl_surface},
    Connection, Dispatch, EventQueue, Proxy, QueueHandle,
};

/// Pool size as a multiple of the frame size.
pub const POOL_SLACK: usize = 2;

const FORMAT: wl_shm::Format = wl_shm::Format::Xrgb8888;

/// A `wl_surface` to present into and the `wl_shm` global to allocate from.
#[derive(Debug, Clone)]
pub struct WaylandTarget {
    conn: Connection,
    shm: wl_shm::WlShm,
    surface: wl_surface::WlSurface,
}

impl WaylandTarget {
    pub fn new(conn: Connection, shm: wl_shm::WlShm, surface: wl_surface::WlSurface) -> Self {
        Self { conn, shm, surface }
    }
}

/// State of the private queue. Buffer release is tracked per buffer through
/// its user data.
#[derive(Debug, Default)]
struct ShmQueue;

/// Cleared when the compositor releases the buffer.
#[derive(Debug, Clone, Default)]
struct BufferBusy(Arc<AtomicBool>);

#[derive(Debug)]
struct Pool {
    pool: wl_shm_pool::WlShmPool,
    memory: SharedBuffer,
}

impl Pool {
    /// Maps `len` bytes and shares them with the compositor. The descriptor is
    /// closed once the compositor has it.
    fn create(shm: &wl_shm::WlShm, qh: &QueueHandle<ShmQueue>, len: usize) -> Result<Self> {
        let size = i32::try_from(len)
            .map_err(|_| Error::allocation_msg(format!("{} byte pool exceeds wl_shm limits", len)))?;
        let mut memory = SharedBuffer::allocate(len)?;
        let fd = memory
            .fd()
            .ok_or_else(|| Error::allocation_msg("shared buffer has no descriptor"))?;
        let pool = shm.create_pool(fd, size, qh, ());
        memory.close_fd();
        debug!("Created wl_shm pool of {} bytes", len);
        Ok(Self { pool, memory })
    }

    fn len(&self) -> usize {
        self.memory.len()
    }
}

impl Drop for Pool {
    fn drop(&mut self) {
        self.pool.destroy();
    }
}

/// Where a frame sits in its pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placement {
    /// Byte offset.
    offset: usize,
    width: u32,
    height: u32,
}

impl Placement {
    fn bytes(&self) -> usize {
        self.width as usize * self.height as usize * CELL_SIZE
    }

    /// Byte range in the pool.
    fn byte_range(&self) -> Range<usize> {
        self.offset..self.offset + self.bytes()
    }

    /// Index range in the pool's cells.
    fn cells(&self) -> Range<usize> {
        let start = self.offset / CELL_SIZE;
        start..start + self.bytes() / CELL_SIZE
    }
}

/// One frame: a `wl_buffer` over the placed region of the pool.
#[derive(Debug)]
struct Frame {
    buffer: wl_buffer::WlBuffer,
    busy: BufferBusy,
    place: Placement,
}

impl Frame {
    fn is_busy(&self) -> bool {
        self.busy.0.load(Ordering::Acquire)
    }

    fn create(pool: &Pool, qh: &QueueHandle<ShmQueue>, place: Placement) -> Result<Self> {
        let Placement {
            offset,
            width,
            height,
        } = place;
        let stride = width as usize * CELL_SIZE;
        let (offset_i, width_i, height_i, stride_i) = match (
            i32::try_from(offset),
            i32::try_from(width),
            i32::try_from(height),
            i32::try_from(stride),
        ) {
            (Ok(o), Ok(w), Ok(h), Ok(s)) => (o, w, h, s),
            _ => {
                return Err(Error::allocation_msg(format!(
                    "{}x{} frame at {} exceeds wl_shm limits",
                    width, height, offset
                )))
            }
        };
        let busy = BufferBusy::default();
        let buffer =
            pool.pool
                .create_buffer(offset_i, width_i, height_i, stride_i, FORMAT, qh, busy.clone());
        Ok(Self {
            buffer,
            busy,
            place,
        })
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        self.buffer.destroy();
    }
}

/// Surface presenting into a `wl_surface` through `wl_shm`.
pub struct WaylandSurface {
    conn: Connection,
    shm: wl_shm::WlShm,
    surface: wl_surface::WlSurface,
    queue: EventQueue<ShmQueue>,
    // Declared before `pool`: buffers are destroyed before their pool.
    frame: Frame,
    /// Replaced frames of this pool still held by the compositor.
    retired: Vec<Frame>,
    pool: Pool,
}

impl std::fmt::Debug for WaylandSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaylandSurface")
            .field("surface", &self.surface.id())
            .field("frame", &self.frame)
            .field("retired", &self.retired.len())
            .field("pool_len", &self.pool.len())
            .finish_non_exhaustive()
    }
}

impl WaylandSurface {
    pub fn create(target: &WaylandTarget, width: u32, height: u32) -> Result<Self> {
        let frame_bytes = frame_bytes(width, height)?;
        let pool_len = frame_bytes
            .checked_mul(POOL_SLACK)
            .ok_or_else(|| Error::allocation_msg("pool size overflows"))?;

        let queue = target.conn.new_event_queue::<ShmQueue>();
        let qh = queue.handle();
        let pool = Pool::create(&target.shm, &qh, pool_len)?;
        let frame = Frame::create(
            &pool,
            &qh,
            Placement {
                offset: 0,
                width,
                height,
            },
        )?;
        target
            .conn
            .flush()
            .map_err(|e| Error::ProtocolFailure(format!("flush after buffer creation: {}", e)))?;

        debug!(
            "WaylandSurface: {}x{} frame in {} byte pool",
            width,
            height,
            pool.len()
        );
        Ok(Self {
            conn: target.conn.clone(),
            shm: target.shm.clone(),
            surface: target.surface.clone(),
            queue,
            frame,
            retired: Vec::new(),
            pool,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.frame.place.width, self.frame.place.height)
    }

    pub fn pixels(&mut self) -> PixmapMut<'_> {
        let place = self.frame.place;
        let cells = self.pool.memory.cells_mut();
        let range = clamp_range(place.cells(), cells.len());
        PixmapMut::packed(&mut cells[range], place.width as usize, place.height as usize)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let new_bytes = frame_bytes(width, height)?;
        let qh = self.queue.handle();
        self.reap_released();

        let current = self.frame.place;
        let occupied: Vec<Range<usize>> = std::iter::once(current.byte_range())
            .chain(self.retired.iter().map(|f| f.place.byte_range()))
            .collect();
        match place_in_pool(self.pool.len(), new_bytes, &occupied) {
            Some(offset) => {
                trace!("WaylandSurface: new frame fits pool slack at {}", offset);
                let place = Placement {
                    offset,
                    width,
                    height,
                };
                let frame = Frame::create(&self.pool, &qh, place)?;
                copy_within_pool(self.pool.memory.cells_mut(), current, place);
                let old = std::mem::replace(&mut self.frame, frame);
                self.retire(old);
            }
            None => {
                let pool_len = new_bytes
                    .checked_mul(POOL_SLACK)
                    .ok_or_else(|| Error::allocation_msg("pool size overflows"))?;
                let mut pool = Pool::create(&self.shm, &qh, pool_len)?;
                let place = Placement {
                    offset: 0,
                    width,
                    height,
                };
                let frame = Frame::create(&pool, &qh, place)?;
                copy_frame(
                    pool.memory.cells_mut(),
                    place,
                    self.pool.memory.cells(),
                    current,
                );
                // Old buffers before old pool.
                let old_frame = std::mem::replace(&mut self.frame, frame);
                let old_retired = std::mem::take(&mut self.retired);
                let old_pool = std::mem::replace(&mut self.pool, pool);
                drop(old_frame);
                drop(old_retired);
                drop(old_pool);
            }
        }

        if let Err(e) = self.conn.flush() {
            warn!("WaylandSurface: flush after resize failed: {}", e);
        }
        Ok(())
    }

    /// Destroys a replaced frame now, or keeps it until the compositor
    /// releases it.
    fn retire(&mut self, frame: Frame) {
        if frame.is_busy() {
            debug!(
                "WaylandSurface: keeping {} until the compositor releases it",
                frame.buffer.id()
            );
            self.retired.push(frame);
        }
    }

    /// Destroys retired frames the compositor has released.
    fn reap_released(&mut self) {
        if let Err(e) = self.queue.dispatch_pending(&mut ShmQueue) {
            warn!("WaylandSurface: dispatching buffer events failed: {}", e);
        }
        self.retired.retain(Frame::is_busy);
    }

    pub fn present(&mut self) -> Result<()> {
        if let Err(e) = self.queue.dispatch_pending(&mut ShmQueue) {
            warn!("WaylandSurface: dispatching buffer events failed: {}", e);
        }
        if self.frame.is_busy() {
            debug!("WaylandSurface: presenting a buffer the compositor still holds");
        }

        let (w, h) = (self.frame.place.width as i32, self.frame.place.height as i32);
        self.surface.attach(Some(&self.frame.buffer), 0, 0);
        if self.surface.version() >= 4 {
            self.surface.damage_buffer(0, 0, w, h);
        } else {
            self.surface.damage(0, 0, w, h);
        }
        self.surface.commit();
        self.frame.busy.0.store(true, Ordering::Release);

        self.conn
            .flush()
            .map_err(|e| Error::ProtocolFailure(format!("flush after commit: {}", e)))
    }

    /// Whether the compositor has released the current frame since the last
    /// present.
    pub fn is_released(&mut self) -> bool {
        if let Err(e) = self.queue.dispatch_pending(&mut ShmQueue) {
            warn!("WaylandSurface: dispatching buffer events failed: {}", e);
        }
        !self.frame.is_busy()
    }
}

fn frame_bytes(width: u32, height: u32) -> Result<usize> {
    // frame_cells guarantees the byte count does not overflow.
    Ok(frame_cells(width, height)? * CELL_SIZE)
}

/// Lowest byte offset for a `new_len` frame in a `pool_len` pool that does
/// not overlap any `occupied` range.
fn place_in_pool(pool_len: usize, new_len: usize, occupied: &[Range<usize>]) -> Option<usize> {
    std::iter::once(0)
        .chain(occupied.iter().map(|r| r.end))
        .filter(|&start| match start.checked_add(new_len) {
            Some(end) => {
                end <= pool_len && occupied.iter().all(|r| end <= r.start || start >= r.end)
            }
            None => false,
        })
        .min()
}

fn clamp_range(range: Range<usize>, len: usize) -> Range<usize> {
    let end = range.end.min(len);
    range.start.min(end)..end
}

/// Resize copy from a frame of one pool into a frame of another.
fn copy_frame(dst_cells: &mut [Cell], to: Placement, src_cells: &[Cell], from: Placement) {
    let dst_range = clamp_range(to.cells(), dst_cells.len());
    let src_range = clamp_range(from.cells(), src_cells.len());
    copy_overlap(
        &mut PixmapMut::packed(&mut dst_cells[dst_range], to.width as usize, to.height as usize),
        &Pixmap::packed(&src_cells[src_range], from.width as usize, from.height as usize),
    );
}

/// Resize copy between two disjoint frames of the same pool.
fn copy_within_pool(cells: &mut [Cell], from: Placement, to: Placement) {
    let (src_range, dst_range) = (from.cells(), to.cells());
    let (src, dst): (&[Cell], &mut [Cell]) = if dst_range.start >= src_range.end {
        let (head, tail) = cells.split_at_mut(dst_range.start);
        (&head[src_range], &mut tail[..dst_range.len()])
    } else {
        let (head, tail) = cells.split_at_mut(src_range.start);
        (&tail[..src_range.len()], &mut head[dst_range])
    };
    copy_overlap(
        &mut PixmapMut::packed(dst, to.width as usize, to.height as usize),
        &Pixmap::packed(src, from.width as usize, from.height as usize),
    );
}

impl Dispatch<wl_shm_pool::WlShmPool, ()> for ShmQueue {
    fn event(
        _: &mut Self,
        _: &wl_shm_pool::WlShmPool,
        _: wl_shm_pool::Event,
        _: &(),
        _: &Connection,
        _: &QueueHandle<Self>,
    ) {
    }
}

impl Dispatch<wl_buffer::WlBuffer, BufferBusy> for ShmQueue {
    fn event(
        _: &mut Self,
        buffer: &wl_buffer::WlBuffer,
        event: wl_buffer::Event,
        busy: &BufferBusy,
        _: &Connection,
        _: &QueueHandle<Self>,
    ) {
        if let wl_buffer::Event::Release = event {
            trace!("Compositor released {}", buffer.id());
            busy.0.store(false, Ordering::Release);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset_cells: usize, width: u32, height: u32) -> Placement {
        Placement {
            offset: offset_cells * CELL_SIZE,
            width,
            height,
        }
    }

    #[test]
    fn it_should_place_a_smaller_frame_in_the_free_half() {
        // 100 byte frame at 0 in a 200 byte pool.
        assert_eq!(place_in_pool(200, 80, &[0..100]), Some(100));
        assert_eq!(place_in_pool(200, 100, &[0..100]), Some(100));
        // Current frame in the upper half: the lower half is free.
        assert_eq!(place_in_pool(200, 60, &[100..200]), Some(0));
    }

    #[test]
    fn it_should_not_reuse_a_region_the_compositor_still_holds() {
        // Frame moved from 0..100 to 100..180; the old buffer is unreleased.
        assert_eq!(place_in_pool(200, 60, &[100..180, 0..100]), None);
        assert_eq!(place_in_pool(200, 20, &[100..180, 0..100]), Some(180));
        // Once released, the lower region is free again.
        assert_eq!(place_in_pool(200, 60, &[100..180]), Some(0));
    }

    #[test]
    fn it_should_require_a_new_pool_when_the_frame_does_not_fit() {
        assert_eq!(place_in_pool(200, 101, &[0..100]), None);
        assert_eq!(place_in_pool(200, 120, &[100..200]), None);
        assert_eq!(place_in_pool(usize::MAX, usize::MAX, &[0..1]), None);
        assert_eq!(place_in_pool(100, 100, &[]), Some(0));
    }

    #[test]
    fn it_should_copy_between_regions_of_one_pool_in_either_direction() {
        let mut cells: Vec<Cell> = vec![0; 16];
        cells[..4].copy_from_slice(&[1, 2, 3, 4]);

        // 2x2 at 0 grows into 3x2 after it.
        copy_within_pool(&mut cells, at(0, 2, 2), at(4, 3, 2));
        assert_eq!(&cells[4..10], &[1, 2, 0, 3, 4, 0]);

        // 3x2 at 4 shrinks back to 1x3 at 0.
        cells[..4].fill(9);
        copy_within_pool(&mut cells, at(4, 3, 2), at(0, 1, 3));
        assert_eq!(&cells[..3], &[1, 3, 0]);
        assert_eq!(cells[3], 9);
    }

    #[test]
    fn it_should_carry_the_overlap_into_a_fresh_pool() {
        // 2x2 frame at cell 4 of the old pool.
        let mut old: Vec<Cell> = vec![7; 8];
        old[4..8].copy_from_slice(&[1, 2, 3, 4]);
        let mut new: Vec<Cell> = vec![0xdead; 18];

        copy_frame(&mut new, at(0, 3, 3), &old, at(4, 2, 2));

        assert_eq!(&new[..9], &[1, 2, 0, 3, 4, 0, 0, 0, 0]);
        // Pool slack past the frame is untouched.
        assert_eq!(new[9], 0xdead);
    }
}
