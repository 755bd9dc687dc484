//! Shared helpers for the ds integration tests.

use ds_rs::Stack;

/// Build a stack by pushing `0..n` in order, so `n - 1` ends up on top.
pub fn stack_of(n: i32) -> Stack<i32> {
    (0..n).collect()
}
