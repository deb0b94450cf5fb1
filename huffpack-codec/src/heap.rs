//! Array-backed binary min-heap.
//!
//! The sift operations work on plain slices so they can be tested on their
//! own; [`MinHeap`] wraps them into a priority queue.

/// Index of the parent of node `i` (`i > 0`).
#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

/// Index of the left child of node `i`.
#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

/// Move the element at `i` down until neither child is smaller.
///
/// Assumes both subtrees of `i` already satisfy the heap property.
pub fn sift_down<T: Ord>(heap: &mut [T], mut i: usize) {
    let n = heap.len();
    loop {
        let l = left(i);
        if l >= n {
            return;
        }
        let r = l + 1;
        let smallest = if r < n && heap[r] < heap[l] { r } else { l };

        if heap[i] <= heap[smallest] {
            return;
        }
        heap.swap(i, smallest);
        i = smallest;
    }
}

/// Move the element at `i` up until its parent is not larger.
pub fn sift_up<T: Ord>(heap: &mut [T], mut i: usize) {
    while i > 0 {
        let p = parent(i);
        if heap[p] <= heap[i] {
            return;
        }
        heap.swap(i, p);
        i = p;
    }
}

/// Turn an arbitrary slice into a min-heap in O(n).
pub fn heapify<T: Ord>(heap: &mut [T]) {
    if heap.len() < 2 {
        return;
    }
    for i in (0..=parent(heap.len() - 1)).rev() {
        sift_down(heap, i);
    }
}

/// Whether `heap` satisfies the min-heap property.
pub fn is_min_heap<T: Ord>(heap: &[T]) -> bool {
    (1..heap.len()).all(|i| heap[parent(i)] <= heap[i])
}

/// A binary min-heap owning its elements.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Build a heap from arbitrary elements using bottom-up heapify.
    pub fn from_vec(mut elements: Vec<T>) -> Self {
        heapify(&mut elements);
        Self { elements }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The smallest element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Add an element.
    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        let last = self.elements.len() - 1;
        sift_up(&mut self.elements, last);
    }

    /// Remove and return the smallest element.
    pub fn extract_min(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let min = self.elements.swap_remove(0);
        sift_down(&mut self.elements, 0);
        Some(min)
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
