// Fuzzy unification and threshold pruning, from the prover's concrete
// test scenarios.
//
// Predicates:
//   is_doggo [1, 0, 1, 1]
//   is_dog   [0, 1, 1, 1]
// Constants:
//   furball [0, 1, 1]
//   fluffy  [1, 0, 1]
//
// Unifying is_dog(fluffy) against the goal is_doggo(furball) with cosine
// similarity and threshold 0.1 should succeed with branch similarity
// min(cosine(is_dog, is_doggo), cosine(fluffy, furball)) ~= 0.5. The same
// unification with threshold 0.9 should fail.

use std::rc::Rc;

use fuzzy_prover::goal::Goal;
use fuzzy_prover::rule::Rule;
use fuzzy_prover::similarity::cosine_similarity;
use fuzzy_prover::substitution::SubstitutionsMap;
use fuzzy_prover::term::{Constant, Predicate, Term};
use fuzzy_prover::unify::unify;

fn build() -> (Rc<Rule>, Goal) {
    let is_doggo = Rc::new(Predicate::with_vector("is_doggo", vec![1.0, 0.0, 1.0, 1.0]));
    let is_dog = Rc::new(Predicate::with_vector("is_dog", vec![0.0, 1.0, 1.0, 1.0]));
    let furball = Constant::with_vector("furball", vec![0.0, 1.0, 1.0]);
    let fluffy = Constant::with_vector("fluffy", vec![1.0, 0.0, 1.0]);

    let rule = Rc::new(Rule::fact(is_dog.of(vec![Term::from(fluffy)])));
    let scope = Rc::new(Rule::fact(is_doggo.of(vec![])));
    let goal = Goal::new(is_doggo.of(vec![Term::from(furball)]), scope);
    (rule, goal)
}

#[test]
fn low_threshold_accepts_fuzzy_match() {
    let (rule, goal) = build();
    let (_, sim) = unify(&rule, &goal, &SubstitutionsMap::new(), cosine_similarity, 0.1).unwrap();
    assert!((sim - 0.5).abs() < 0.01);
}

#[test]
fn high_threshold_rejects_fuzzy_match() {
    let (rule, goal) = build();
    assert!(unify(&rule, &goal, &SubstitutionsMap::new(), cosine_similarity, 0.9).is_none());
}
