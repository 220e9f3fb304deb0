//! fuzzy-prover: a fuzzy SLD resolution prover.
//!
//! A backward-chaining theorem prover over a set of Horn clauses in which
//! symbol equality is replaced by a continuous similarity score. A proof
//! succeeds when a goal atom can be resolved against a knowledge base by
//! unification, where the overall proof confidence is the *minimum*
//! similarity observed at every step. The design follows the "End-to-End
//! Differentiable Proving" formulation (Rocktäschel et al., 2017), in an
//! inference-only, non-differentiable form.
//!
//! ```
//! use std::rc::Rc;
//! use fuzzy_prover::prover::Prover;
//! use fuzzy_prover::{fact, rule, atom, predicate, var, constant};
//!
//! let father_of = predicate!("father_of");
//! let parent_of = predicate!("parent_of");
//! let grandpa_of = predicate!("grandpa_of");
//!
//! let rules = vec![
//!     Rc::new(fact!(atom!(father_of, constant!("abe"), constant!("homer")))),
//!     Rc::new(fact!(atom!(parent_of, constant!("homer"), constant!("bart")))),
//!     Rc::new(rule!(
//!         atom!(grandpa_of, var!("X"), var!("Y")),
//!         atom!(father_of, var!("X"), var!("Z")),
//!         atom!(parent_of, var!("Z"), var!("Y")),
//!     )),
//! ];
//!
//! let prover = Prover::new(rules);
//! let query = atom!(grandpa_of, constant!("abe"), constant!("bart"));
//! let proof = prover.prove(query, None).expect("grandpa_of(abe, bart) should hold");
//! assert_eq!(proof.similarity_score(), 1.0);
//! ```
//!
//! # Module overview
//!
//! - [`identity`] — unique id allocation underlying reference-identity
//!   equality.
//! - [`term`] — `Variable`, `Constant`, `Predicate`, `Term`.
//! - [`atom`] — `Atom`, and `Predicate::of` as an atom constructor.
//! - [`rule`] — `Rule` (facts and rules with a body).
//! - [`goal`] — `Goal`, an atom paired with its resolution scope.
//! - [`similarity`] — `symbol_compare`, `cosine_similarity`.
//! - [`substitution`] — the persistent, scoped substitution store.
//! - [`unify`] — the fuzzy unifier.
//! - [`proof_state`] — `ProofState`, threaded through the search.
//! - [`search`] — `recurse` (OR) and `join` (AND).
//! - [`proof_graph`] — `ProofGraphNode`, `ProofGraph`, variable extraction.
//! - [`prover`] — `Prover`, the top-level `prove`/`prove_all` driver.

#[macro_use]
pub mod macros;

pub mod identity;
pub mod term;
pub mod atom;
pub mod rule;
pub mod goal;
pub mod similarity;
pub mod substitution;
pub mod unify;
pub mod proof_state;
pub mod search;
pub mod proof_graph;
pub mod prover;

pub use atom::Atom;
pub use goal::Goal;
pub use prover::{Prover, Query};
pub use proof_graph::{ProofGraph, ProofGraphNode};
pub use proof_state::ProofState;
pub use rule::Rule;
pub use similarity::{cosine_similarity, symbol_compare, Embedded, SimilarityFunc};
pub use substitution::{
    get_var_binding, is_var_bound, resolve_term, set_var_binding, Binding, SubstitutionsMap,
    VariableBindingError,
};
pub use term::{Constant, Predicate, Term, Variable};
