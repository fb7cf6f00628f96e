//! Utility helpers.

pub mod poll;

pub use poll::PollPolicy;
