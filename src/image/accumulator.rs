//! Hough accumulator buffers.
//!
//! Each cell stores a 16-bit vote count packed into 3 bytes: bytes 0 and 1
//! hold the count in little-endian order, byte 2 is unused. This matches an
//! RGB8 image, which is how the accumulator is usually handed over.
use super::traits::AccumulatorView;

/// Bytes per accumulator cell.
pub const BYTES_PER_CELL: usize = 3;

#[inline]
fn unpack(cell: &[u8]) -> u16 {
    u16::from_le_bytes([cell[0], cell[1]])
}

/// Borrowed view over a packed accumulator buffer.
///
/// Only constructed through [`new`](Self::new) or
/// [`with_stride`](Self::with_stride), which guarantee that every cell of the
/// `w × h` area lies inside `data`.
#[derive(Clone, Debug)]
pub struct AccumulatorImage<'a> {
    w: usize,
    h: usize,
    stride: usize, // bytes between rows
    data: &'a [u8],
}

impl<'a> AccumulatorImage<'a> {
    /// Wraps a tightly packed buffer (`stride == w * 3`).
    ///
    /// Returns `None` when `data` is too short for the requested size.
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Option<Self> {
        Self::with_stride(w, h, w * BYTES_PER_CELL, data)
    }

    pub fn with_stride(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Option<Self> {
        if stride < w * BYTES_PER_CELL {
            return None;
        }
        let needed = if h == 0 {
            0
        } else {
            (h - 1) * stride + w * BYTES_PER_CELL
        };
        (data.len() >= needed).then_some(Self {
            w,
            h,
            stride,
            data,
        })
    }

    /// Bytes between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl<'a> AccumulatorView for AccumulatorImage<'a> {
    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn count(&self, x: usize, y: usize) -> u16 {
        if x >= self.w || y >= self.h {
            return 0;
        }
        let i = y * self.stride + x * BYTES_PER_CELL;
        unpack(&self.data[i..i + 2])
    }
}

/// Owned accumulator in the packed 3-byte layout.
///
/// Used by the demo loader and by tests that synthesise peaks.
#[derive(Clone, Debug)]
pub struct OwnedAccumulator {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl OwnedAccumulator {
    /// Zero-initialized accumulator of size `width × height`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * BYTES_PER_CELL],
        }
    }

    /// Takes ownership of a packed buffer; `None` if the length does not match.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == width * height * BYTES_PER_CELL).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Accumulator with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: u16) -> Self {
        let mut acc = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                acc.set_count(x, y, value);
            }
        }
        acc
    }

    /// Writes a count; out-of-range coordinates are ignored.
    pub fn set_count(&mut self, x: usize, y: usize, value: u16) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y * self.width + x) * BYTES_PER_CELL;
        let [lo, hi] = value.to_le_bytes();
        self.data[i] = lo;
        self.data[i + 1] = hi;
    }

    /// Borrow as a read-only `AccumulatorImage` view.
    pub fn as_view(&self) -> AccumulatorImage<'_> {
        AccumulatorImage {
            w: self.width,
            h: self.height,
            stride: self.width * BYTES_PER_CELL,
            data: &self.data,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl AccumulatorView for OwnedAccumulator {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn count(&self, x: usize, y: usize) -> u16 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        let i = (y * self.width + x) * BYTES_PER_CELL;
        unpack(&self.data[i..i + 2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_little_endian_and_ignore_third_byte() {
        // (0x0102, 0xFF) and (0x00FF, 0x07)
        let data = [0x02u8, 0x01, 0xFF, 0xFF, 0x00, 0x07];
        let view = AccumulatorImage::new(2, 1, &data).expect("view");
        assert_eq!(view.count(0, 0), 0x0102);
        assert_eq!(view.count(1, 0), 0x00FF);
        assert_eq!(view.max_count(), 0x0102);
    }

    #[test]
    fn out_of_bounds_reads_zero() {
        let acc = OwnedAccumulator::filled(4, 3, 9);
        assert_eq!(acc.count(4, 0), 0);
        assert_eq!(acc.count(0, 3), 0);
        assert_eq!(acc.count_at(-1, 1), 0);
        assert_eq!(acc.count_at(1, 1), 9);
    }

    #[test]
    fn strided_view_skips_padding() {
        // Two rows of one cell with two padding bytes each.
        let data = [5u8, 0, 0, 0xAA, 0xAA, 7, 0, 0];
        let view = AccumulatorImage::with_stride(1, 2, 5, &data).expect("view");
        assert_eq!(view.stride(), 5);
        assert_eq!(view.count(0, 0), 5);
        assert_eq!(view.count(0, 1), 7);
    }

    #[test]
    fn short_buffers_are_rejected() {
        let data = [0u8; 8];
        assert!(AccumulatorImage::new(3, 1, &data).is_none());
        // The last row only needs `w * 3` bytes, not a full stride.
        assert!(AccumulatorImage::with_stride(1, 2, 6, &data[..7]).is_none());
        assert!(AccumulatorImage::with_stride(1, 2, 5, &data).is_some());
        assert!(AccumulatorImage::with_stride(2, 1, 5, &data).is_none());
        assert!(OwnedAccumulator::from_raw(2, 2, data.to_vec()).is_none());
    }

    #[test]
    fn owned_view_round_trips_counts() {
        let mut acc = OwnedAccumulator::new(3, 2);
        acc.set_count(2, 1, 513);
        acc.set_count(9, 9, 1);
        let view = acc.as_view();
        assert_eq!(view.count(2, 1), 513);
        assert_eq!(view.max_count(), 513);
    }
}
