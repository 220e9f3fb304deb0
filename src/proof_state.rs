//! The state threaded through a single branch of the search.

use std::collections::HashSet;
use std::rc::Rc;

use crate::rule::Rule;
use crate::substitution::SubstitutionsMap;

/// `(similarity, substitutions, available_rules)`.
///
/// Immutable: every search step that "updates" a `ProofState` builds a new
/// one. Each branch of the search owns its own state, so sibling branches
/// never interfere with one another — this is what lets `join`/`recurse`
/// backtrack by simply trying the next candidate with the *previous*
/// state, discarding the failed one.
#[derive(Debug, Clone)]
pub struct ProofState {
    /// The minimum similarity observed on this branch so far, in `[0, 1]`.
    pub similarity: f64,
    pub substitutions: SubstitutionsMap,
    /// Rules still eligible to be tried on this branch. A rule is removed
    /// from this set the moment it is used, which is the sole mechanism
    /// preventing infinite recursive descent (see the crate-level docs).
    pub available_rules: Rc<HashSet<Rc<Rule>>>,
}

impl ProofState {
    pub fn new(
        similarity: f64,
        substitutions: SubstitutionsMap,
        available_rules: Rc<HashSet<Rc<Rule>>>,
    ) -> Self {
        ProofState { similarity, substitutions, available_rules }
    }

    /// Returns a new state identical to this one, but with `rule` removed
    /// from `available_rules` and `similarity` lowered to `carry_similarity`
    /// (the minimum of this branch's prior similarity and the new
    /// unification's similarity).
    pub fn descend(&self, rule: &Rc<Rule>, substitutions: SubstitutionsMap, carry_similarity: f64) -> Self {
        let mut rules = (*self.available_rules).clone();
        rules.remove(rule);
        ProofState {
            similarity: carry_similarity,
            substitutions,
            available_rules: Rc::new(rules),
        }
    }
}
