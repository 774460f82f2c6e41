use alloc::boxed::Box;
use alloc::vec;

/// A fixed-capacity circular sample store.
///
/// `N` must be a power of two so that wrap-around is a single bitmask instead of a
/// division. This is checked at compile time.
///
/// The write cursor always points at the *next* slot to be written, so a delay of
/// `d` addresses the value pushed `d` calls ago. `get(0)` and `get(N)` both address
/// the oldest slot.
pub struct RingBuffer<T, const N: usize> {
    storage: Box<[T]>,
    write_index: usize,
}

impl<T: Copy + Default, const N: usize> RingBuffer<T, N> {
    const MASK: usize = {
        assert!(N.is_power_of_two(), "RingBuffer capacity must be a power of two");
        N - 1
    };

    /// Creates a zero-filled buffer.
    pub fn new() -> Self {
        let _ = Self::MASK;
        RingBuffer {
            storage: vec![T::default(); N].into_boxed_slice(),
            write_index: 0,
        }
    }

    /// Writes `value` at the cursor and advances it.
    #[inline(always)]
    pub fn push(&mut self, value: T) {
        self.storage[self.write_index] = value;
        self.write_index = (self.write_index + 1) & Self::MASK;
    }

    /// Returns the value pushed `delay` steps before the next write.
    ///
    /// `delay` is taken modulo `N`: a request of `N + k` reads the same slot as `k`.
    /// Callers that want meaningful history must keep `delay` within `1..=N`.
    #[inline(always)]
    pub fn get(&self, delay: usize) -> T {
        let delay = delay & Self::MASK;
        let read_index = self.write_index.wrapping_sub(delay) & Self::MASK;
        self.storage[read_index]
    }

    /// Number of slots.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Index of the slot the next `push` writes.
    pub fn write_index(&self) -> usize {
        self.write_index
    }

    /// Zeroes the storage and rewinds the cursor.
    pub fn clear(&mut self) {
        self.storage.fill(T::default());
        self.write_index = 0;
    }
}

impl<T: Copy + Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_four_scenario() {
        let mut rb = RingBuffer::<f32, 4>::new();
        for v in [0.5, 0.25, 0.15, 0.0] {
            rb.push(v);
        }

        assert_eq!(rb.get(1), 0.0);
        assert_eq!(rb.get(2), 0.15);
        assert_eq!(rb.get(3), 0.25);
        assert_eq!(rb.get(4), 0.5);
        assert_eq!(rb.get(0), rb.get(4));
    }

    #[test]
    fn test_wrap_after_many_pushes() {
        const N: usize = 8;
        let mut rb = RingBuffer::<i32, N>::new();
        let mut history = alloc::vec::Vec::new();

        for k in 0..(N as i32 * 3 + 5) {
            rb.push(k);
            history.push(k);

            if history.len() >= N {
                for d in 1..=N {
                    let expected = history[history.len() - d];
                    assert_eq!(rb.get(d), expected, "delay {} after {} pushes", d, k + 1);
                }
            }
        }
    }

    #[test]
    fn test_oversized_delay_wraps() {
        let mut rb = RingBuffer::<f32, 16>::new();
        for i in 0..20 {
            rb.push(i as f32);
        }

        assert_eq!(rb.get(16 + 3), rb.get(3));
        assert_eq!(rb.get(32 + 1), rb.get(1));
        assert_eq!(rb.get(1), 19.0);
    }

    #[test]
    fn test_starts_silent() {
        let rb = RingBuffer::<f32, 32>::new();
        for d in 0..64 {
            assert_eq!(rb.get(d), 0.0);
        }
        assert_eq!(rb.capacity(), 32);
        assert_eq!(rb.write_index(), 0);
    }

    #[test]
    fn test_clear() {
        let mut rb = RingBuffer::<f32, 4>::new();
        rb.push(1.0);
        rb.push(2.0);
        rb.clear();

        assert_eq!(rb.write_index(), 0);
        for d in 0..4 {
            assert_eq!(rb.get(d), 0.0);
        }
    }
}
