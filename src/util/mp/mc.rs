//! Bounded overwriting MPMC queue based on a fixed-sized circular buffer.
//!
//! Any number of threads may [`insert`] into and [`remove`] from a shared [`RingQueue`]. All state
//! lives behind a single lock; removers that find the queue empty park on a condition variable
//! until an insertion wakes them.
//!
//! # Examples
//!
//! ```
//! use ringqueue::RingQueue;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let q = Arc::new(RingQueue::<char>::new(2).unwrap());
//! let r = q.clone();
//!
//! let handle = thread::spawn(move || r.remove());
//! q.insert('a');
//!
//! assert_eq!(handle.join().unwrap(), 'a');
//! ```
//!
//! [`insert`]: struct.RingQueue.html#method.insert
//! [`remove`]: struct.RingQueue.html#method.remove
//! [`RingQueue`]: struct.RingQueue.html

use std::fmt;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::errors::{Error, Result};
use crate::util::buffer::Buffer;

/// A bounded MPMC queue that overwrites its oldest value when full.
pub struct RingQueue<T> {
    /// The underlying buffer. Every read and write of it holds this lock.
    buffer: Mutex<Buffer<T>>,

    /// Signalled once per insertion.
    available: Condvar,

    /// The capacity of the queue. Fixed at construction.
    cap: usize,
}

impl<T> RingQueue<T> {
    /// Creates a new queue that holds at most `cap` values.
    ///
    /// Fails with `Error::InvalidArgument` if `cap` is zero.
    pub fn new(cap: usize) -> Result<Self> {
        if cap == 0 {
            return Err(Error::InvalidArgument(
                "capacity must be at least 1".to_owned(),
            ));
        }

        Ok(RingQueue {
            buffer: Mutex::new(Buffer::new(cap)),
            available: Condvar::new(),
            cap,
        })
    }

    /// Returns the capacity of the queue.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the current number of values inside the queue.
    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    /// Returns `true` if the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Returns `true` if the next insertion overwrites the oldest value.
    pub fn is_full(&self) -> bool {
        self.buffer.lock().is_full()
    }

    /// Inserts a value at the tail of the queue.
    ///
    /// Never blocks. If the queue is full the oldest unread value is discarded to make room.
    /// Wakes one thread waiting in `remove` or `remove_timeout`, if any.
    pub fn insert(&self, value: T) {
        let evicted = {
            let mut buffer = self.buffer.lock();
            let evicted = buffer.push(value);
            self.available.notify_one();
            evicted
        };

        // Run the evicted value's destructor outside the lock.
        drop(evicted);
    }

    /// Removes the value at the head of the queue, waiting as long as it takes for one to arrive.
    pub fn remove(&self) -> T {
        let mut buffer = self.buffer.lock();
        loop {
            if let Some(value) = buffer.pop() {
                return value;
            }
            self.available.wait(&mut buffer);
        }
    }

    /// Removes the value at the head of the queue, waiting at most `timeout` for one to arrive.
    ///
    /// A zero `timeout` checks once without blocking. Fails with `Error::Timeout` and leaves the
    /// queue untouched if the deadline passes while the queue is empty.
    pub fn remove_timeout(&self, timeout: Duration) -> Result<T> {
        let deadline = Instant::now().checked_add(timeout);

        let mut buffer = self.buffer.lock();
        loop {
            if let Some(value) = buffer.pop() {
                return Ok(value);
            }

            match deadline {
                // Too far in the future to represent; no different from waiting forever.
                None => self.available.wait(&mut buffer),
                Some(deadline) => {
                    if Instant::now() >= deadline {
                        return Err(Error::Timeout(timeout));
                    }
                    // Whether or not the wait timed out, the loop re-checks the buffer first so a
                    // value inserted right at the deadline is still taken.
                    self.available.wait_until(&mut buffer, deadline);
                }
            }
        }
    }

    /// Removes the value at the head of the queue if there is one. Never blocks.
    pub fn try_remove(&self) -> Option<T> {
        self.buffer.lock().pop()
    }
}

impl<T: Clone> RingQueue<T> {
    /// Copies out the values currently in the queue, oldest first.
    pub fn snapshot(&self) -> Snapshot<T> {
        let buffer = self.buffer.lock();
        Snapshot {
            items: buffer.iter().cloned().collect(),
            capacity: self.cap,
        }
    }
}

impl<T: fmt::Display> fmt::Display for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buffer = self.buffer.lock();
        write_contents(f, buffer.iter(), self.cap)
    }
}

impl<T: fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buffer = self.buffer.lock();
        f.debug_struct("RingQueue")
            .field("items", &*buffer)
            .field("capacity", &self.cap)
            .finish()
    }
}

/// The values of a [`RingQueue`] at one instant, oldest first.
///
/// [`RingQueue`]: struct.RingQueue.html
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot<T> {
    pub items: Vec<T>,
    pub capacity: usize,
}

impl<T> Snapshot<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: fmt::Display> fmt::Display for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_contents(f, self.items.iter(), self.capacity)
    }
}

/// Renders `[ a b c ] (Size: 3/4)`.
fn write_contents<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I, cap: usize) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: ExactSizeIterator<Item = &'a T>,
{
    let len = items.len();
    write!(f, "[ ")?;
    for item in items {
        write!(f, "{} ", item)?;
    }
    write!(f, "] (Size: {}/{})", len, cap)
}
