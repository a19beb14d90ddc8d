use std::collections::VecDeque;

/// Bounded FIFO window for rolling computations.
///
/// New elements are appended at the right; once the window is over
/// capacity the oldest element is evicted from the left and returned.
/// Capacity is fixed at construction, so a window never reallocates
/// during a run.
///
/// A capacity of zero is legal: every push immediately returns the pushed
/// element. The key-delay window relies on this for undelayed output.
///
/// # Examples
/// ```
/// use sliding_average::SlidingWindow;
///
/// let mut window = SlidingWindow::new(3);
/// assert_eq!(window.push(1.0), None);
/// assert_eq!(window.push(2.0), None);
/// assert_eq!(window.push(3.0), None);
/// assert!(window.is_full());
///
/// // Pushing past capacity evicts the oldest value
/// assert_eq!(window.push(4.0), Some(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct SlidingWindow<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> SlidingWindow<T> {
    /// Creates an empty window with the given capacity.
    pub fn new(capacity: usize) -> Self {
        SlidingWindow {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an element at the right, evicting and returning the
    /// leftmost element when the window was already at capacity.
    pub fn push(&mut self, item: T) -> Option<T> {
        self.data.push_back(item);
        if self.data.len() > self.capacity {
            self.data.pop_front()
        } else {
            None
        }
    }

    /// Iterates elements from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns the current number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the window holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if the window is at full capacity.
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all elements, keeping the capacity.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}
