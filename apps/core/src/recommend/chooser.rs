//! Random choice, injectable so output can be pinned in tests.

use rand::Rng;

/// Picks an index in `0..len`.
pub trait Chooser: Send + Sync {
    /// `len` is always at least 1.
    fn choose_index(&self, len: usize) -> usize;
}

/// Thread-local RNG backed chooser.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomChooser;

impl Chooser for RandomChooser {
    fn choose_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same position (wrapped to `len`).
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub struct FixedChooser(pub usize);

impl Chooser for FixedChooser {
    fn choose_index(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Choose one element of a slice, `None` when empty.
pub fn choose<'a, T>(chooser: &dyn Chooser, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(chooser.choose_index(items.len()))
}
