#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSizedType;

/// Counts how many [`Tracked`] values minted from it have been dropped.
#[derive(Debug, Default, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn track(&self, id: usize) -> Tracked {
        Tracked {
            id,
            drops: Rc::clone(&self.0),
        }
    }

    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

/// A value that reports its own drop. Equality only considers `id`.
#[derive(Debug, Clone)]
pub struct Tracked {
    pub id: usize,
    drops: Rc<Cell<usize>>,
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
