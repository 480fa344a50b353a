//! Fixed-capacity double-ended queue.
//!
//! [`BoundedQueue`] is a ring buffer whose storage is allocated once at
//! construction and never grows. Pushing onto a full queue is a silent
//! no-op (the push methods report whether the value was accepted), and
//! popping an empty queue yields `None`.

/// A fixed-capacity ring-buffer deque with O(1) push/pop at both ends.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    slots: Box<[Option<T>]>,
    front: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue that holds at most `capacity` values.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            front: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of queued values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    #[inline]
    fn wrap(&self, i: usize) -> usize {
        i % self.slots.len()
    }

    /// Append `value` at the back. Returns `false`, leaving the queue
    /// unchanged, if the queue is full.
    pub fn push_back(&mut self, value: T) -> bool {
        if self.is_full() {
            return false;
        }
        let back = self.wrap(self.front + self.len);
        self.slots[back] = Some(value);
        self.len += 1;
        true
    }

    /// Prepend `value` at the front. Returns `false`, leaving the queue
    /// unchanged, if the queue is full.
    pub fn push_front(&mut self, value: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.front = self.wrap(self.front + self.slots.len() - 1);
        self.slots[self.front] = Some(value);
        self.len += 1;
        true
    }

    /// Remove and return the front value.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.front].take();
        self.front = self.wrap(self.front + 1);
        self.len -= 1;
        value
    }

    /// Remove and return the back value.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let back = self.wrap(self.front + self.len - 1);
        self.len -= 1;
        self.slots[back].take()
    }

    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.wrap(self.front + self.len - 1)].as_ref()
    }

    /// Drop every queued value. Capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.front = 0;
        self.len = 0;
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.slots[self.wrap(self.front + i)].as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut q = BoundedQueue::new(4);
        q.push_back(1);
        q.push_back(2);
        q.push_back(3);
        assert_eq!(q.pop_front(), Some(1));
        assert_eq!(q.pop_front(), Some(2));
        assert_eq!(q.pop_front(), Some(3));
        assert_eq!(q.pop_front(), None);
    }

    #[test]
    fn overflow_is_silent_noop() {
        let mut q = BoundedQueue::new(3);
        for i in 0..3 {
            assert!(q.push_back(i));
        }
        assert!(!q.push_back(99));
        assert!(!q.push_front(98));
        assert_eq!(q.len(), q.capacity());
        assert!(q.is_full());
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn underflow_returns_none() {
        let mut q = BoundedQueue::<u8>::new(2);
        assert_eq!(q.pop_front(), None);
        assert_eq!(q.pop_back(), None);
        assert_eq!(q.front(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn both_ends_wrap_around() {
        let mut q = BoundedQueue::new(3);
        q.push_back('b');
        q.push_front('a');
        q.push_back('c');
        assert_eq!(q.front(), Some(&'a'));
        assert_eq!(q.back(), Some(&'c'));
        assert_eq!(q.pop_back(), Some('c'));
        assert_eq!(q.pop_front(), Some('a'));
        q.push_back('d');
        q.push_back('e');
        assert_eq!(q.iter().copied().collect::<String>(), "bde");
        assert_eq!(q.pop_back(), Some('e'));
        assert_eq!(q.pop_back(), Some('d'));
        assert_eq!(q.pop_back(), Some('b'));
        assert!(q.is_empty());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut q = BoundedQueue::new(2);
        q.push_back(String::from("x"));
        q.push_back(String::from("y"));
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.capacity(), 2);
        assert!(q.push_back(String::from("z")));
        assert_eq!(q.front().map(String::as_str), Some("z"));
    }

    #[test]
    fn zero_capacity_accepts_nothing() {
        let mut q = BoundedQueue::new(0);
        assert!(q.is_full());
        assert!(!q.push_back(1));
        assert!(!q.push_front(1));
        assert_eq!(q.pop_front(), None);
    }
}
