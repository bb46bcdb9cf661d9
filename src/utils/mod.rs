//! Utility data structures.
//!
//! - [`RingBuffer`] - Fixed-capacity circular buffer backing the scrollback

mod ring_buffer;

pub use ring_buffer::RingBuffer;
