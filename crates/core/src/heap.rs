//! Array-backed binary min-heap keyed on node weight.
//!
//! `std::collections::BinaryHeap` is not used here: tree shape depends on
//! exactly which of several equal-weight nodes comes out first, and that
//! order has to match the service's encoder. The rules below reproduce it:
//!
//! - sift-up stops as soon as `parent <= child`
//! - sift-down takes the right child only when strictly lighter than the
//!   left, and stops as soon as `parent <= child`
//!
//! No secondary key is consulted on ties.

/// Anything that can be ordered by a single weight.
pub trait Weighted {
    fn weight(&self) -> u64;
}

/// Binary min-heap ordered purely by [`Weighted::weight`].
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap {
            elements: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The minimum element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }
}

impl<T: Weighted> MinHeap<T> {
    /// Insert an element, O(log n).
    pub fn push(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Remove and return the minimum element, O(log n).
    pub fn pop(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let result = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        Some(result)
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.elements[parent].weight() <= self.elements[child].weight() {
                return;
            }
            self.elements.swap(parent, child);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        let n = self.elements.len();
        let mut child = 2 * parent + 1;

        while child < n {
            if child + 1 < n && self.elements[child + 1].weight() < self.elements[child].weight()
            {
                child += 1;
            }
            if self.elements[parent].weight() <= self.elements[child].weight() {
                return;
            }
            self.elements.swap(parent, child);
            parent = child;
            child = 2 * parent + 1;
        }
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
