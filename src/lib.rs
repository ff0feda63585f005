//! circq - Growable Circular Queue
//!
//! Ring buffer single-producer single-consumer dengan growth otomatis.
//!
//! ```
//! use circq::core::{QueueError, RingBuffer};
//!
//! let mut rb = RingBuffer::with_capacity(2)?;
//! rb.push("a");
//! rb.push("b");
//! rb.push("c"); // storage tumbuh 2 -> 5
//!
//! assert_eq!(rb.len(), 3);
//! assert_eq!(rb.peek(), Ok(&"a"));
//! assert_eq!(rb.pop(), Ok("a"));
//! rb.retrieve()?;
//! assert_eq!(rb.pop(), Ok("c"));
//! assert_eq!(rb.pop(), Err(QueueError::EmptyQueue));
//! # Ok::<(), QueueError>(())
//! ```

pub mod core;

pub use crate::core::{QueueError, RingBuffer, DEFAULT_CAPACITY};
