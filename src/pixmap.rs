// src/pixmap.rs

//! Row-major pixel buffers addressed as `row * stride + column`.
//!
//! Backends own their pixel memory in different shapes (a heap vector for
//! XImage, a shared mapping for wl_shm). Both are exposed to drawing code and
//! to the resize copy through these borrowed views, each carrying its own
//! stride.

/// One color cell: 32-bit XRGB/ARGB, native endian.
pub type Cell = u32;

/// Bytes per [`Cell`].
pub const CELL_SIZE: usize = std::mem::size_of::<Cell>();

/// Minimum slice length for a `width x height` buffer with the given stride.
fn required_len(width: usize, height: usize, stride: usize) -> usize {
    if width == 0 || height == 0 {
        0
    } else {
        (height - 1) * stride + width
    }
}

fn packed_height(len: usize, width: usize, height: usize) -> usize {
    match width {
        0 => height,
        w => height.min(len / w),
    }
}

/// Read-only view over a pixel buffer.
#[derive(Debug, Clone, Copy)]
pub struct Pixmap<'a> {
    data: &'a [Cell],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> Pixmap<'a> {
    /// Returns `None` if `stride < width` or `data` is too short.
    pub fn new(data: &'a [Cell], width: usize, height: usize, stride: usize) -> Option<Self> {
        if stride < width || data.len() < required_len(width, height, stride) {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Tightly packed view (`stride == width`). Rows past the end of `data`
    /// are not exposed.
    pub fn packed(data: &'a [Cell], width: usize, height: usize) -> Self {
        let height = packed_height(data.len(), width, height);
        Self {
            data,
            width,
            height,
            stride: width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Cell {
        self.data[row * self.stride + col]
    }

    /// The visible cells of one row.
    #[inline]
    pub fn row(&self, row: usize) -> &'a [Cell] {
        let start = row * self.stride;
        &self.data[start..start + self.width]
    }
}

/// Mutable view over a pixel buffer.
#[derive(Debug)]
pub struct PixmapMut<'a> {
    data: &'a mut [Cell],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> PixmapMut<'a> {
    /// Returns `None` if `stride < width` or `data` is too short.
    pub fn new(data: &'a mut [Cell], width: usize, height: usize, stride: usize) -> Option<Self> {
        if stride < width || data.len() < required_len(width, height, stride) {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Mutable counterpart of [`Pixmap::packed`].
    pub fn packed(data: &'a mut [Cell], width: usize, height: usize) -> Self {
        let height = packed_height(data.len(), width, height);
        Self {
            data,
            width,
            height,
            stride: width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Cell {
        self.data[row * self.stride + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.data[row * self.stride + col] = cell;
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [Cell] {
        let start = row * self.stride;
        &mut self.data[start..start + self.width]
    }

    pub fn as_pixmap(&self) -> Pixmap<'_> {
        Pixmap {
            data: &*self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }

    /// Sets every visible cell to `cell`.
    pub fn fill(&mut self, cell: Cell) {
        for row in 0..self.height {
            self.row_mut(row).fill(cell);
        }
    }
}

/// Copies the `width x height` rectangle at `(sx, sy)` in `src` to `(dx, dy)`
/// in `dst`, clipped to both buffers.
#[allow(clippy::too_many_arguments)]
pub fn blit(
    dst: &mut PixmapMut<'_>,
    dx: usize,
    dy: usize,
    src: &Pixmap<'_>,
    sx: usize,
    sy: usize,
    width: usize,
    height: usize,
) {
    let w = width
        .min(dst.width.saturating_sub(dx))
        .min(src.width.saturating_sub(sx));
    let h = height
        .min(dst.height.saturating_sub(dy))
        .min(src.height.saturating_sub(sy));
    if w == 0 || h == 0 {
        return;
    }

    for i in 0..h {
        let s = (sy + i) * src.stride + sx;
        let d = (dy + i) * dst.stride + dx;
        dst.data[d..d + w].copy_from_slice(&src.data[s..s + w]);
    }
}

/// Resize copy: zero-fills `dst`, then copies the top-left overlap
/// `[0, min(w, w')) x [0, min(h, h'))` from `src`.
pub fn copy_overlap(dst: &mut PixmapMut<'_>, src: &Pixmap<'_>) {
    dst.fill(0);
    blit(dst, 0, 0, src, 0, 0, src.width, src.height);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: usize, height: usize) -> Vec<Cell> {
        (0..(width * height) as u32).map(|i| i + 1).collect()
    }

    #[test]
    fn it_should_reject_short_buffers_and_small_strides() {
        let data = vec![0u32; 11];
        assert!(Pixmap::new(&data, 4, 3, 4).is_none());
        assert!(Pixmap::new(&data, 4, 3, 3).is_none());
        // Last row does not need trailing padding.
        assert!(Pixmap::new(&data[..10], 2, 3, 4).is_some());
    }

    #[test]
    fn it_should_hide_rows_missing_from_packed_views() {
        let data = numbered(3, 2);
        let view = Pixmap::packed(&data[..5], 3, 2);
        assert_eq!(view.height(), 1);
        assert_eq!(view.row(0), &[1, 2, 3]);
        assert_eq!(Pixmap::packed(&data, 3, 2).height(), 2);
    }

    #[test]
    fn it_should_clip_blit_to_destination() {
        let src_data = numbered(4, 4);
        let src = Pixmap::new(&src_data, 4, 4, 4).unwrap();
        let mut dst_data = vec![0u32; 9];
        let mut dst = PixmapMut::new(&mut dst_data, 3, 3, 3).unwrap();

        blit(&mut dst, 1, 1, &src, 0, 0, 4, 4);

        assert_eq!(dst_data, vec![0, 0, 0, 0, 1, 2, 0, 5, 6]);
    }

    #[test]
    fn it_should_honor_each_buffers_stride() {
        // 2x2 visible inside a stride-3 source, copied into a stride-5 destination.
        let src_data = vec![1, 2, 99, 3, 4, 99];
        let src = Pixmap::new(&src_data, 2, 2, 3).unwrap();
        let mut dst_data = vec![7u32; 10];
        let mut dst = PixmapMut::new(&mut dst_data, 2, 2, 5).unwrap();

        blit(&mut dst, 0, 0, &src, 0, 0, 2, 2);

        assert_eq!(dst.at(0, 0), 1);
        assert_eq!(dst.at(0, 1), 2);
        assert_eq!(dst.at(1, 0), 3);
        assert_eq!(dst.at(1, 1), 4);
        // Padding is untouched.
        assert_eq!(dst_data[2], 7);
        assert_eq!(dst_data[4], 7);
    }

    #[test]
    fn it_should_preserve_overlap_and_zero_the_rest() {
        let cases = [((4, 3), (6, 5)), ((6, 5), (4, 3)), ((5, 2), (2, 5)), ((3, 3), (3, 3))];
        for ((w, h), (nw, nh)) in cases {
            let src_data = numbered(w, h);
            let src = Pixmap::new(&src_data, w, h, w).unwrap();
            let mut dst_data = vec![0xdead_beef; nw * nh];
            let mut dst = PixmapMut::new(&mut dst_data, nw, nh, nw).unwrap();

            copy_overlap(&mut dst, &src);

            for row in 0..nh {
                for col in 0..nw {
                    let expected = if row < h.min(nh) && col < w.min(nw) {
                        src.at(row, col)
                    } else {
                        0
                    };
                    assert_eq!(dst.at(row, col), expected, "{w}x{h} -> {nw}x{nh} at ({row},{col})");
                }
            }
        }
    }
}
