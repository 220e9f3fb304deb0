//! Unique identity assignment for terms, predicates and rules.
//!
//! The prover's data model distinguishes every `Variable`, `Constant`,
//! `Predicate` and `Rule` by identity rather than by content: two variables
//! both named `$X` are different variables unless they are literally the
//! same allocation. This module hands out the ids that make that possible.
//!
//! The teacher crate does this with a `static mut` counter guarded by
//! `unsafe` (`logic_var::LOGIC_VAR_ID`). An `AtomicUsize` gives the same
//! "one global monotonic counter" behavior without `unsafe`.

use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Returns a fresh, globally unique id.
///
/// Ids start at 1 and are never reused. They are compared for equality and
/// hashed, never for ordering, so wraparound after `usize::MAX` allocations
/// is not a practical concern.
/// # Usage
/// ```
/// use fuzzy_prover::identity::next_id;
///
/// let a = next_id();
/// let b = next_id();
/// assert_ne!(a, b);
/// ```
pub fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let a = next_id();
        let b = next_id();
        let c = next_id();
        assert!(b > a);
        assert!(c > b);
    }
}
