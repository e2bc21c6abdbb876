/// A position inside a ring of fixed, non-zero length.
///
/// Every step wraps modulo `len`, so `get()` is always a valid slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingIndex {
    pos: usize,
    len: usize,
}

impl RingIndex {
    /// Start at slot 0 of a ring with `len` slots. Returns `None` for `len == 0`.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { pos: 0, len })
    }

    pub fn get(self) -> usize {
        self.pos
    }

    #[must_use]
    pub fn next(self) -> Self {
        self.offset(1)
    }

    #[must_use]
    pub fn prev(self) -> Self {
        self.offset(-1)
    }

    /// Move `delta` slots, forward for positive values, backward for negative.
    #[must_use]
    pub fn offset(self, delta: isize) -> Self {
        let len = self.len as isize;
        let step = delta.rem_euclid(len) as usize;
        Self {
            pos: (self.pos + step) % self.len,
            len: self.len,
        }
    }

    /// Back to slot 0.
    #[must_use]
    pub fn rewind(self) -> Self {
        Self { pos: 0, len: self.len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_is_rejected() {
        assert!(RingIndex::new(0).is_none());
    }

    #[test]
    fn next_wraps_to_start() {
        let idx = RingIndex::new(3).unwrap().next().next().next();
        assert_eq!(idx.get(), 0);
    }

    #[test]
    fn prev_wraps_to_end() {
        let idx = RingIndex::new(5).unwrap().prev();
        assert_eq!(idx.get(), 4);
    }

    #[test]
    fn offset_handles_large_deltas() {
        let idx = RingIndex::new(4).unwrap();
        assert_eq!(idx.offset(9).get(), 1);
        assert_eq!(idx.offset(-9).get(), 3);
    }

    #[test]
    fn single_slot_ring_stays_put() {
        let idx = RingIndex::new(1).unwrap();
        assert_eq!(idx.next().get(), 0);
        assert_eq!(idx.prev().get(), 0);
    }
}
