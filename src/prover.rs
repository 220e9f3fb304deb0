//! The prover driver: `prove` and `prove_all`.

use std::collections::HashSet;
use std::rc::Rc;

use log::debug;

use crate::atom::Atom;
use crate::goal::Goal;
use crate::proof_graph::ProofGraph;
use crate::proof_state::ProofState;
use crate::rule::Rule;
use crate::search::recurse;
use crate::similarity::{cosine_similarity, SimilarityFunc};
use crate::substitution::SubstitutionsMap;

/// Either a bare query atom (the common case — the driver wraps it in a
/// fresh synthetic scope) or a pre-built [`Goal`] with an explicit scope.
pub enum Query {
    Atom(Atom),
    Goal(Goal),
}

impl From<Atom> for Query {
    fn from(atom: Atom) -> Self { Query::Atom(atom) }
}

impl From<Goal> for Query {
    fn from(goal: Goal) -> Self { Query::Goal(goal) }
}

/// Default search depth, matching the reference formulation's balance
/// between recall and runaway recursion.
pub const DEFAULT_MAX_PROOF_DEPTH: i32 = 10;
/// Default similarity floor below which a derivation is pruned.
pub const DEFAULT_MIN_SIMILARITY_THRESHOLD: f64 = 0.5;

/// A fuzzy SLD resolution prover over a fixed set of rules.
///
/// # Usage
/// ```
/// use std::rc::Rc;
/// use fuzzy_prover::prover::Prover;
/// use fuzzy_prover::rule::Rule;
/// use fuzzy_prover::term::{Constant, Predicate, Term};
///
/// let father_of = Rc::new(Predicate::new("father_of"));
/// let fact = Rc::new(Rule::fact(
///     father_of.of(vec![Term::from(Constant::new("abe")), Term::from(Constant::new("homer"))]),
/// ));
/// let prover = Prover::new(vec![fact]);
/// let query = father_of.of(vec![Term::from(Constant::new("abe")), Term::from(Constant::new("homer"))]);
/// let proof = prover.prove(query, None);
/// assert!(proof.is_some());
/// ```
pub struct Prover {
    rules: Rc<HashSet<Rc<Rule>>>,
    pub max_proof_depth: i32,
    pub min_similarity_threshold: f64,
    pub similarity_func: SimilarityFunc,
}

impl Prover {
    /// Builds a prover with the default depth, threshold and similarity
    /// function (`cosine_similarity`).
    pub fn new(rules: Vec<Rc<Rule>>) -> Self {
        Prover::with_config(
            rules,
            DEFAULT_MAX_PROOF_DEPTH,
            DEFAULT_MIN_SIMILARITY_THRESHOLD,
            cosine_similarity,
        )
    }

    /// Builds a prover with fully-specified configuration.
    ///
    /// `max_proof_depth` and `min_similarity_threshold` are taken as given;
    /// the core performs no validation of them (the caller is responsible
    /// for `max_proof_depth > 0` and `threshold` in `[0, 1]`).
    pub fn with_config(
        rules: Vec<Rc<Rule>>,
        max_proof_depth: i32,
        min_similarity_threshold: f64,
        similarity_func: SimilarityFunc,
    ) -> Self {
        Prover {
            rules: Rc::new(rules.into_iter().collect()),
            max_proof_depth,
            min_similarity_threshold,
            similarity_func,
        }
    }

    pub fn rule_count(&self) -> usize { self.rules.len() }

    pub fn contains_rule(&self, rule: &Rc<Rule>) -> bool { self.rules.contains(rule) }

    fn build_goal(&self, query: Query) -> Goal {
        match query {
            Query::Atom(atom) => {
                let scope = Rule::generate_variable_scope(atom.clone());
                Goal::new(atom, scope)
            }
            Query::Goal(goal) => goal,
        }
    }

    fn seed_available_rules(&self, dynamic_rules: Option<&[Rc<Rule>]>) -> Rc<HashSet<Rc<Rule>>> {
        match dynamic_rules {
            None => Rc::clone(&self.rules),
            Some(extra) if extra.is_empty() => Rc::clone(&self.rules),
            Some(extra) => {
                let mut set = (*self.rules).clone();
                for rule in extra {
                    set.insert(Rc::clone(rule));
                }
                Rc::new(set)
            }
        }
    }

    /// Returns every successful proof of `goal`, sorted by descending
    /// `similarity_score`. `dynamic_rules`, if given, are unioned with the
    /// prover's static rule set for this call only.
    pub fn prove_all(&self, query: impl Into<Query>, dynamic_rules: Option<&[Rc<Rule>]>) -> Vec<ProofGraph> {
        let goal = self.build_goal(query.into());
        let available_rules = self.seed_available_rules(dynamic_rules);
        let state = ProofState::new(1.0, SubstitutionsMap::new(), available_rules);

        debug!("prove_all: querying {}", goal);
        let (_, nodes) = recurse(
            &goal,
            self.max_proof_depth,
            &state,
            self.similarity_func,
            self.min_similarity_threshold,
        );
        debug!("prove_all: {} proof(s) found for {}", nodes.len(), goal);

        let mut graphs: Vec<ProofGraph> = nodes
            .into_iter()
            .map(|node| ProofGraph::new(goal.statement.clone(), node))
            .collect();
        graphs.sort_by(|a, b| {
            b.similarity_score()
                .partial_cmp(&a.similarity_score())
                .expect("similarities are always finite")
        });
        graphs
    }

    /// Returns the single best proof of `goal` (highest `similarity_score`),
    /// or `None` if no proof clears the threshold within the depth limit.
    pub fn prove(&self, query: impl Into<Query>, dynamic_rules: Option<&[Rc<Rule>]>) -> Option<ProofGraph> {
        self.prove_all(query, dynamic_rules).into_iter().next()
    }
}
