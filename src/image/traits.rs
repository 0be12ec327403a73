/// Read-only access to a Hough accumulator of 16-bit vote counts.
pub trait AccumulatorView {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Vote count at `(x, y)`; coordinates outside the image read as 0.
    fn count(&self, x: usize, y: usize) -> u16;

    /// Signed variant of [`count`](Self::count) for neighbourhood scans that
    /// step past the border.
    #[inline]
    fn count_at(&self, x: isize, y: isize) -> u16 {
        if x < 0 || y < 0 {
            return 0;
        }
        self.count(x as usize, y as usize)
    }

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Largest count stored in the accumulator, 0 when it is empty.
    fn max_count(&self) -> u16 {
        let mut best = 0u16;
        for y in 0..self.height() {
            for x in 0..self.width() {
                best = best.max(self.count(x, y));
            }
        }
        best
    }
}
