//! The fuzzy unifier: matches a rule's head against a goal atom.

use std::rc::Rc;

use log::trace;

use crate::goal::Goal;
use crate::rule::Rule;
use crate::similarity::SimilarityFunc;
use crate::substitution::{resolve_term, set_var_binding, Binding, SubstitutionsMap};
use crate::term::Term;

/// Attempts to match `rule`'s head against `goal`'s statement.
///
/// Returns the updated substitutions and the branch similarity — the
/// minimum similarity observed over the predicate comparison and every
/// compared constant pair — or `None` if arities differ, the predicate
/// similarity falls below `threshold`, a constant pair's similarity falls
/// below `threshold`, or a variable that is already bound would have to be
/// rebound.
///
/// Once the running similarity drops below `threshold`, comparison stops
/// immediately — no further term pairs are examined.
pub fn unify(
    rule: &Rc<Rule>,
    goal: &Goal,
    substitutions: &SubstitutionsMap,
    similarity_func: SimilarityFunc,
    threshold: f64,
) -> Option<(SubstitutionsMap, f64)> {
    let head_terms = &rule.head.terms;
    let goal_terms = &goal.statement.terms;

    if head_terms.len() != goal_terms.len() {
        return None;
    }

    let mut similarity = similarity_func(&*rule.head.predicate, &*goal.statement.predicate);
    if similarity < threshold {
        trace!(
            "unify: predicate similarity {:.3} below threshold for {} vs {}",
            similarity, rule.head.predicate, goal.statement.predicate
        );
        return None;
    }

    let mut subs = substitutions.clone();

    for (head_term, goal_term) in head_terms.iter().zip(goal_terms.iter()) {
        let resolved_head = resolve_term(head_term, rule, &subs);
        let resolved_goal = resolve_term(goal_term, &goal.scope, &subs);

        match (resolved_head, resolved_goal) {
            (Term::Variable(_), resolved_goal) => {
                // head_term was unbound under this rule's scope.
                let head_var = head_term
                    .as_variable()
                    .expect("head_term resolved to a variable, so it was declared as one")
                    .clone();
                let value = match resolved_goal {
                    Term::Constant(c) => Binding::Ground(c),
                    Term::Variable(goal_var) => Binding::Alias(Rc::clone(&goal.scope), goal_var),
                };
                subs = set_var_binding(&head_var, rule, value, &subs).ok()?;
            }
            (Term::Constant(head_const), Term::Variable(goal_var)) => {
                subs = set_var_binding(&goal_var, &goal.scope, Binding::Ground(head_const), &subs)
                    .ok()?;
            }
            (Term::Constant(head_const), Term::Constant(goal_const)) => {
                let sim = similarity_func(&head_const, &goal_const);
                similarity = similarity.min(sim);
                if similarity < threshold {
                    trace!(
                        "unify: constant similarity {:.3} below threshold for {} vs {}",
                        sim, head_const, goal_const
                    );
                    return None;
                }
            }
        }
    }

    Some((subs, similarity))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::similarity::{cosine_similarity, symbol_compare};
    use crate::term::{Constant, Predicate, Variable};

    fn scope(name: &str) -> Rc<Rule> {
        let p = Rc::new(Predicate::new(name));
        Rc::new(Rule::fact(p.of(vec![])))
    }

    #[test]
    fn fact_unifies_with_ground_goal() {
        let father_of = Rc::new(Predicate::new("father_of"));
        let rule = Rc::new(Rule::fact(
            father_of.of(vec![Term::from(Constant::new("abe")), Term::from(Constant::new("homer"))]),
        ));
        let goal_scope = scope("query");
        let goal = Goal::new(
            father_of.of(vec![Term::from(Constant::new("abe")), Term::from(Constant::new("homer"))]),
            goal_scope,
        );
        let result = unify(&rule, &goal, &SubstitutionsMap::new(), symbol_compare, 0.5);
        assert!(result.is_some());
        let (_, sim) = result.unwrap();
        assert_eq!(sim, 1.0);
    }

    #[test]
    fn mismatched_arity_fails() {
        let p = Rc::new(Predicate::new("p"));
        let rule = Rc::new(Rule::fact(p.of(vec![Term::from(Constant::new("a"))])));
        let goal_scope = scope("query");
        let goal = Goal::new(
            p.of(vec![Term::from(Constant::new("a")), Term::from(Constant::new("b"))]),
            goal_scope,
        );
        assert!(unify(&rule, &goal, &SubstitutionsMap::new(), symbol_compare, 0.5).is_none());
    }

    #[test]
    fn variable_in_head_binds_to_goal_constant() {
        let p = Rc::new(Predicate::new("father_of"));
        let x = Variable::new("X");
        let rule = Rc::new(Rule::fact(
            p.of(vec![Term::from(x.clone()), Term::from(Constant::new("homer"))]),
        ));
        let goal_scope = scope("query");
        let goal = Goal::new(
            p.of(vec![Term::from(Constant::new("abe")), Term::from(Constant::new("homer"))]),
            goal_scope,
        );
        let (subs, sim) =
            unify(&rule, &goal, &SubstitutionsMap::new(), symbol_compare, 0.5).unwrap();
        assert_eq!(sim, 1.0);
        let bound = crate::substitution::get_var_binding(&x, &rule, &subs);
        assert_eq!(bound.unwrap().symbol, "abe");
    }

    #[test]
    fn fuzzy_unification_below_threshold_fails() {
        let is_doggo = Rc::new(Predicate::with_vector("is_doggo", vec![1.0, 0.0, 1.0, 1.0]));
        let is_dog = Rc::new(Predicate::with_vector("is_dog", vec![0.0, 1.0, 1.0, 1.0]));
        let furball = Constant::with_vector("furball", vec![0.0, 1.0, 1.0]);
        let fluffy = Constant::with_vector("fluffy", vec![1.0, 0.0, 1.0]);

        let rule = Rc::new(Rule::fact(is_dog.of(vec![Term::from(fluffy)])));
        let goal_scope = scope("query");
        let goal = Goal::new(is_doggo.of(vec![Term::from(furball)]), goal_scope);

        let ok = unify(&rule, &goal, &SubstitutionsMap::new(), cosine_similarity, 0.1).unwrap();
        assert!((ok.1 - 0.5).abs() < 0.01);

        let fail = unify(&rule, &goal, &SubstitutionsMap::new(), cosine_similarity, 0.9);
        assert!(fail.is_none());
    }
}
