//! A fixed-capacity, thread-safe ring queue.
//!
//! [`RingQueue`] is shared between any number of producer and consumer threads. Insertion never
//! blocks and overwrites the oldest value when the queue is full; removal blocks while the queue
//! is empty, optionally up to a timeout.
//!
//! [`RingQueue`]: util/mp/mc/struct.RingQueue.html

#[macro_use]
extern crate quick_error;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate slog;

pub mod config;
pub mod demo;
pub mod errors;
pub mod logger;
pub mod util;

pub use crate::errors::{Error, Result};
pub use crate::util::mp::mc::{RingQueue, Snapshot};
