//! Concurrent multiple-producer queues based on circular buffer.
//!
//! [`RingQueue`] is a circular buffer, which is basically a fixed-sized array that has two ends:
//! tail and head. Any thread can [`insert`] values at the tail and [`remove`] values from the head.
//! A [`RingQueue`] is `Sync`, so an `Arc<RingQueue<T>>` can be cloned and sent to as many
//! producer and consumer threads as needed.
//!
//! Here's a visualization of a [`RingQueue`] of capacity 4, consisting of 2 values `a` and `b`.
//!
//! ```text
//!    ___
//!   | a | <- head (RingQueue::remove, RingQueue::remove_timeout)
//!   | b |
//!   |   | <- tail (RingQueue::insert)
//!   |   |
//!    ¯¯¯
//! ```
//!
//! Inserting never waits. When the queue is full, the value at the head is discarded and the new
//! value takes its slot, so a slow consumer loses the oldest values instead of stalling producers.
//! Removing waits while the queue is empty, either indefinitely or up to a deadline.
//!
//! [`RingQueue`]: mc/struct.RingQueue.html
//! [`insert`]: mc/struct.RingQueue.html#method.insert
//! [`remove`]: mc/struct.RingQueue.html#method.remove

pub mod mc;
