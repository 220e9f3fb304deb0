//! Similarity scoring between constants and predicates.
//!
//! Two pure, total functions, each `(Constant | Predicate, Constant |
//! Predicate) -> f64 in [0, 1]`. The prover treats whichever one is
//! configured as an injected, replaceable strategy — analogous to how the
//! teacher threads a `&dyn` comparator rather than hard-coding a single
//! scheme — so callers can supply their own embedding comparison.

use crate::term::{Constant, Predicate};

/// Either side of a similarity comparison: a constant or a predicate.
/// Both carry a `symbol` and an optional `vector`, which is all either
/// similarity function needs.
pub trait Embedded {
    fn symbol(&self) -> &str;
    fn vector(&self) -> Option<&[f64]>;
}

impl Embedded for Constant {
    fn symbol(&self) -> &str { &self.symbol }
    fn vector(&self) -> Option<&[f64]> { self.vector.as_deref() }
}

impl Embedded for Predicate {
    fn symbol(&self) -> &str { &self.symbol }
    fn vector(&self) -> Option<&[f64]> { self.vector.as_deref() }
}

/// A similarity function as injected into the prover: a pure function from
/// a pair of embedded entities to a score in `[0, 1]`.
pub type SimilarityFunc = fn(&dyn Embedded, &dyn Embedded) -> f64;

/// `1.0` if the symbols are string-equal, else `0.0`.
/// # Usage
/// ```
/// use fuzzy_prover::similarity::symbol_compare;
/// use fuzzy_prover::term::Constant;
///
/// let a = Constant::new("abe");
/// let b = Constant::new("abe");
/// assert_eq!(symbol_compare(&a, &b), 1.0);
/// ```
pub fn symbol_compare(a: &dyn Embedded, b: &dyn Embedded) -> f64 {
    if a.symbol() == b.symbol() { 1.0 } else { 0.0 }
}

/// Cosine similarity between the two operands' vectors, clamped into
/// `[0, 1]`. If either operand lacks a vector, falls back to
/// [`symbol_compare`].
/// # Usage
/// ```
/// use fuzzy_prover::similarity::cosine_similarity;
/// use fuzzy_prover::term::Constant;
///
/// let a = Constant::with_vector("furball", vec![0.0, 1.0, 1.0]);
/// let b = Constant::with_vector("fluffy", vec![1.0, 0.0, 1.0]);
/// let sim = cosine_similarity(&a, &b);
/// assert!(sim > 0.0 && sim < 1.0);
/// ```
pub fn cosine_similarity(a: &dyn Embedded, b: &dyn Embedded) -> f64 {
    let (va, vb) = match (a.vector(), b.vector()) {
        (Some(va), Some(vb)) => (va, vb),
        _ => return symbol_compare(a, b),
    };
    let dot: f64 = va.iter().zip(vb.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = va.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = vb.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return symbol_compare(a, b);
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}
