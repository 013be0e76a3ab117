//! In-memory Fibonacci memoization.

pub mod fib_cache;

pub use fib_cache::{shared, FibCache, SharedFibCache};
