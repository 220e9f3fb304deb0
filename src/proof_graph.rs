//! The proof graph returned to callers, and extraction of variable
//! bindings from it.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::atom::Atom;
use crate::rule::Rule;
use crate::substitution::{resolve_term, SubstitutionsMap};
use crate::term::{Term, Variable};

/// Records which rule discharged `goal`, at what confidence, and (for
/// non-facts) the subproofs of its body.
///
/// Similarity is monotonically non-increasing from root to leaf:
/// `overall_similarity <= unification_similarity` and, for any child,
/// `child.overall_similarity <= parent.overall_similarity`.
#[derive(Debug, Clone)]
pub struct ProofGraphNode {
    pub goal: Atom,
    pub rule: Rc<Rule>,
    /// The similarity produced by unifying `rule`'s head against `goal`
    /// alone, before folding in any subproofs.
    pub unification_similarity: f64,
    /// The similarity of this node's entire subtree: the minimum of
    /// `unification_similarity` and every child's `overall_similarity`.
    pub overall_similarity: f64,
    /// `None` for a fact (no body to prove); `Some` otherwise, with one
    /// entry per body atom in declaration order.
    pub children: Option<Vec<Rc<ProofGraphNode>>>,
    pub substitutions: SubstitutionsMap,
}

impl fmt::Display for ProofGraphNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} <- {} [{:.3}]", self.goal, self.rule, self.overall_similarity)
    }
}

/// Wraps a proof's head node together with the original query, exposing
/// `similarity_score` and `variable_bindings` as computed properties.
#[derive(Debug, Clone)]
pub struct ProofGraph {
    /// The original query atom, as passed to `prove`/`prove_all`.
    pub goal: Atom,
    pub head: Rc<ProofGraphNode>,
}

impl ProofGraph {
    pub fn new(goal: Atom, head: Rc<ProofGraphNode>) -> Self {
        ProofGraph { goal, head }
    }

    /// The confidence of this proof as a whole: the head node's overall
    /// similarity.
    pub fn similarity_score(&self) -> f64 {
        self.head.overall_similarity
    }

    /// Resolves each variable appearing in the original query atom against
    /// the head node's substitutions, under the scope of the rule that
    /// discharged the top-level goal (`self.head.rule`).
    ///
    /// A rule's body subgoals are wrapped with the rule itself as their
    /// scope (see `search::recurse`), so any binding made while proving the
    /// top-level goal's body is tagged with that same rule's identity —
    /// which is exactly `self.head.rule`. Resolving query variables against
    /// that scope, rather than against a separate synthetic query scope,
    /// is what actually recovers their values.
    pub fn variable_bindings(&self) -> HashMap<Variable, Term> {
        let mut bindings = HashMap::new();
        for term in self.goal.terms.iter() {
            if let Term::Variable(v) = term {
                let resolved = resolve_term(term, &self.head.rule, &self.head.substitutions);
                bindings.insert(v.clone(), resolved);
            }
        }
        bindings
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::substitution::{set_var_binding, Binding};
    use crate::term::{Constant, Predicate};

    #[test]
    fn variable_bindings_resolves_query_variables_against_head_rule() {
        let grandpa_of = Rc::new(Predicate::new("grandpa_of"));
        let x = Variable::new("X");
        let y = Variable::new("Y");
        let rule = Rc::new(Rule::fact(
            grandpa_of.of(vec![Term::from(x.clone()), Term::from(y.clone())]),
        ));

        let subs = set_var_binding(&x, &rule, Binding::Ground(Constant::new("abe")), &SubstitutionsMap::new())
            .unwrap();
        let subs =
            set_var_binding(&y, &rule, Binding::Ground(Constant::new("bart")), &subs).unwrap();

        let node = Rc::new(ProofGraphNode {
            goal: grandpa_of.of(vec![Term::from(x.clone()), Term::from(y.clone())]),
            rule: Rc::clone(&rule),
            unification_similarity: 1.0,
            overall_similarity: 1.0,
            children: None,
            substitutions: subs,
        });

        let query = grandpa_of.of(vec![Term::from(x.clone()), Term::from(y.clone())]);
        let graph = ProofGraph::new(query, node);

        assert_eq!(graph.similarity_score(), 1.0);
        let bindings = graph.variable_bindings();
        assert_eq!(bindings.get(&x).unwrap().to_string(), "abe");
        assert_eq!(bindings.get(&y).unwrap().to_string(), "bart");
    }
}
