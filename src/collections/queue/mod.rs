//! A module containing [`RingQueue`], a first-in first-out queue with a fixed maximum size.

mod iter;
mod ring_queue;

pub use iter::*;
pub use ring_queue::*;
