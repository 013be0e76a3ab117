//! Memoized Fibonacci computation over arbitrary-precision integers.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::cache::FibCache;

/// Compute F(`n`), consulting and populating `cache`.
///
/// F(0) = 0 and F(1) = 1 are returned directly and never stored. For
/// n ≥ 2, a cached value is returned as-is; otherwise the sequence is
/// walked upward from index 2, reusing cached entries where present and
/// storing every newly derived value, so one call leaves indices 2..=n
/// fully populated.
///
/// The ascent is iterative rather than recursive: the naive recursion is
/// O(n) call depth and blows the stack well before big-integer arithmetic
/// becomes the bottleneck. Cache contents and results are identical to
/// what the recursive descent would produce.
pub fn fib(cache: &mut FibCache, n: u64) -> BigUint {
    if n == 0 {
        return BigUint::zero();
    }
    if n == 1 {
        return BigUint::one();
    }
    if let Some(value) = cache.get(n) {
        return value.clone();
    }

    // prev/curr track F(i-2)/F(i-1) entering iteration i.
    let mut prev = BigUint::zero();
    let mut curr = BigUint::one();
    for i in 2..=n {
        let next = match cache.get(i) {
            Some(value) => value.clone(),
            None => {
                let value = &prev + &curr;
                cache.put(i, value.clone());
                value
            }
        };
        prev = curr;
        curr = next;
    }
    curr
}
