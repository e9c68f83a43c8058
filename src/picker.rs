use rand::{Rng, rng};

/// Random-selection capability. Production uses the thread-local rng; tests
/// substitute a fixed index to pin down which file gets served.
pub trait Picker {
    /// Returns an index in `0..len`. Callers guarantee `len` is nonzero.
    fn pick(&mut self, len: usize) -> usize;
}

pub struct RngPicker;

impl Picker for RngPicker {
    fn pick(&mut self, len: usize) -> usize {
        rng().random_range(0..len)
    }
}

/// Always picks the same index, clamped to the last valid slot.
#[cfg(test)]
pub struct Fixed(pub usize);

#[cfg(test)]
impl Picker for Fixed {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}
