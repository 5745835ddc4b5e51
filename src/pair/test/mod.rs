mod test_pair;
mod test_select;

use std::cell::Cell;

thread_local! {
    static DROPS_A: Cell<usize> = const { Cell::new(0) };
    static DROPS_B: Cell<usize> = const { Cell::new(0) };
}

fn drops_a() -> usize {
    DROPS_A.with(Cell::get)
}

fn drops_b() -> usize {
    DROPS_B.with(Cell::get)
}

/// Alternative A payload which counts its drops.
#[derive(Debug, Clone, Default, PartialEq)]
struct TrackA(i32);

impl Drop for TrackA {
    fn drop(&mut self) {
        DROPS_A.with(|d| d.set(d.get() + 1));
    }
}

/// Alternative B payload which counts its drops.
#[derive(Debug, Clone, Default, PartialEq)]
struct TrackB(&'static str);

impl Drop for TrackB {
    fn drop(&mut self) {
        DROPS_B.with(|d| d.set(d.get() + 1));
    }
}

thread_local! {
    static CLONES: Cell<usize> = const { Cell::new(0) };
    static CLONE_FROMS: Cell<usize> = const { Cell::new(0) };
}

fn clones() -> usize {
    CLONES.with(Cell::get)
}

fn clone_froms() -> usize {
    CLONE_FROMS.with(Cell::get)
}

/// Payload which counts fresh clones apart from in place `clone_from`.
#[derive(Debug, PartialEq)]
struct Counted(u32);

impl Clone for Counted {
    fn clone(&self) -> Self {
        CLONES.with(|c| c.set(c.get() + 1));
        Counted(self.0)
    }

    fn clone_from(&mut self, source: &Self) {
        CLONE_FROMS.with(|c| c.set(c.get() + 1));
        self.0 = source.0;
    }
}
