//! Seeded pseudo-random stream shared by every carving algorithm.

/// Mulberry32 generator. Identical seeds always replay the identical sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeRng {
    state: u32,
}

impl MazeRng {
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    /// Integer in `[0, max)`; returns 0 when `max` is 0.
    pub fn int_below(&mut self, max: usize) -> usize {
        (self.next_f64() * max as f64) as usize
    }

    /// Uniform element; an empty slice consumes no draw.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.int_below(items.len());
        items.get(index)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.int_below(i + 1);
            items.swap(i, j);
        }
    }
}
