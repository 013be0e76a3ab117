//! Memoized arbitrary-precision Fibonacci HTTP service.
//!
//! The interesting parts live in [`cache`] (the process-lifetime memo store)
//! and [`fib`] (the computation that consults and populates it). [`api`]
//! wraps both in an axum server.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fib;

pub use cache::{FibCache, SharedFibCache};
pub use config::Config;
pub use error::FibError;
pub use fib::fib;
