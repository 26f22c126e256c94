use std::fmt;

/// A fixed-size buffer that holds values in a circular queue.
///
/// This is just a buffer---it does no synchronization of its own. Shared access goes through
/// [`RingQueue`], which keeps a `Buffer` behind a lock.
///
/// [`RingQueue`]: ../mp/mc/struct.RingQueue.html
pub struct Buffer<T> {
    /// The slots. Exactly `cap` of them, allocated once.
    ///
    /// A slot holds `Some` iff its offset is `(head + i) % cap` for some `i < count`.
    slots: Box<[Option<T>]>,

    /// Offset of the oldest valid value.
    head: usize,

    /// Offset the next value is written to.
    tail: usize,

    /// Number of valid values.
    count: usize,

    /// Capacity of the buffer. Never zero.
    cap: usize,
}

impl<T> Buffer<T> {
    /// Allocates a new buffer with the specified capacity.
    pub fn new(cap: usize) -> Self {
        // Callers reject a zero capacity before getting here.
        debug_assert!(cap > 0);

        let slots = (0..cap).map(|_| None).collect::<Vec<_>>().into_boxed_slice();

        Buffer {
            slots,
            head: 0,
            tail: 0,
            count: 0,
            cap,
        }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.cap
    }

    /// Writes `value` at the tail.
    ///
    /// If the buffer is full the oldest value is dropped first and returned, and the write lands
    /// in the slot it occupied. The length never exceeds the capacity.
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() {
            self.pop()
        } else {
            None
        };

        debug_assert!(self.slots[self.tail].is_none());
        self.slots[self.tail] = Some(value);
        self.tail = self.next(self.tail);
        self.count += 1;

        evicted
    }

    /// Takes the value at the head.
    ///
    /// Returns `None` if the buffer is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.slots[self.head].take();
        debug_assert!(value.is_some());
        self.head = self.next(self.head);
        self.count -= 1;

        value
    }

    /// Iterates over the valid values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buffer: self,
            index: 0,
        }
    }

    #[inline]
    fn next(&self, offset: usize) -> usize {
        (offset + 1) % self.cap
    }
}

impl<T: fmt::Debug> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over the valid values of a [`Buffer`], oldest first.
///
/// [`Buffer`]: struct.Buffer.html
pub struct Iter<'a, T> {
    buffer: &'a Buffer<T>,
    index: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.index >= self.buffer.count {
            return None;
        }

        let offset = (self.buffer.head + self.index) % self.buffer.cap;
        self.index += 1;
        self.buffer.slots[offset].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
