//! The persistent, scoped substitution store.
//!
//! `SubstitutionsMap` is an immutable, functional mapping
//! `(Rule scope, Variable) -> Constant | (Rule scope, Variable)`. Every
//! `set_var_binding` returns a *new* map; the input is never mutated, which
//! is what lets the search backtrack for free by simply discarding a
//! branch's map and continuing with an older one.
//!
//! The teacher achieves the analogous "persistent" behavior in
//! `unifiable::Unifiable::unify` by cloning the whole `SubstitutionSet`
//! `Vec` on every new binding. This module does the same thing for a
//! `HashMap`: `set_var_binding` clones the map's contents once per call.
//! No `im`/`rpds`-style structural sharing is used, matching the full
//! rebuild-per-write technique actually present in the example pack.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

use crate::rule::Rule;
use crate::term::{Constant, Term, Variable};

/// A variable's binding: either grounded to a constant, or aliased to
/// another variable in some (possibly different) scope.
#[derive(Debug, Clone)]
pub enum Binding {
    Ground(Constant),
    Alias(Rc<Rule>, Variable),
}

/// Raised by [`set_var_binding`] when the terminal variable of an alias
/// chain is already bound to a constant and a *different* value is
/// written. The unifier checks `is_var_bound` before ever writing, so in
/// normal operation this indicates a bug in an extension, not a
/// reachable outcome of ordinary proof search.
#[derive(Debug, Clone)]
pub struct VariableBindingError {
    pub variable: String,
}

impl fmt::Display for VariableBindingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "variable binding conflict: ${} is already bound to a constant",
            self.variable
        )
    }
}

impl Error for VariableBindingError {}

type Key = (usize, usize); // (scope rule id, variable id)

/// An immutable, functional `(scope, variable) -> Binding` map.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionsMap {
    bindings: Rc<HashMap<Key, Binding>>,
}

impl SubstitutionsMap {
    /// An empty substitution map.
    pub fn new() -> Self {
        SubstitutionsMap { bindings: Rc::new(HashMap::new()) }
    }

    fn key(scope: &Rc<Rule>, var: &Variable) -> Key {
        (scope.id(), var.id())
    }

    fn lookup(&self, scope: &Rc<Rule>, var: &Variable) -> Option<&Binding> {
        self.bindings.get(&Self::key(scope, var))
    }
}

/// If `term` is a constant, returns it unchanged. If it is a variable,
/// looks up `(scope, term)`: unbound returns the variable unchanged; bound
/// to a constant returns that constant; bound to an alias recurses into
/// the alias's own scope.
/// # Usage
/// ```
/// use std::rc::Rc;
/// use fuzzy_prover::rule::Rule;
/// use fuzzy_prover::term::{Constant, Predicate, Term, Variable};
/// use fuzzy_prover::substitution::{SubstitutionsMap, Binding, set_var_binding, resolve_term};
///
/// let p = Rc::new(Predicate::new("scope"));
/// let scope = Rc::new(Rule::fact(p.of(vec![])));
/// let x = Variable::new("X");
/// let abe = Constant::new("abe");
/// let subs = set_var_binding(&x, &scope, Binding::Ground(abe.clone()), &SubstitutionsMap::new()).unwrap();
/// let resolved = resolve_term(&Term::from(x), &scope, &subs);
/// assert_eq!(resolved, Term::from(abe));
/// ```
pub fn resolve_term(term: &Term, scope: &Rc<Rule>, substitutions: &SubstitutionsMap) -> Term {
    let var = match term {
        Term::Constant(_) => return term.clone(),
        Term::Variable(v) => v,
    };
    match substitutions.lookup(scope, var) {
        None => term.clone(),
        Some(Binding::Ground(c)) => Term::Constant(c.clone()),
        Some(Binding::Alias(next_scope, next_var)) => {
            resolve_term(&Term::Variable(next_var.clone()), next_scope, substitutions)
        }
    }
}

/// Walks the alias chain starting at `(scope, var)` and returns the
/// terminal constant, or `None` if the chain ends at an unbound variable.
pub fn get_var_binding(
    var: &Variable,
    scope: &Rc<Rule>,
    substitutions: &SubstitutionsMap,
) -> Option<Constant> {
    match substitutions.lookup(scope, var) {
        None => None,
        Some(Binding::Ground(c)) => Some(c.clone()),
        Some(Binding::Alias(next_scope, next_var)) => {
            get_var_binding(next_var, next_scope, substitutions)
        }
    }
}

/// True iff `get_var_binding` returns a constant.
pub fn is_var_bound(var: &Variable, scope: &Rc<Rule>, substitutions: &SubstitutionsMap) -> bool {
    get_var_binding(var, scope, substitutions).is_some()
}

/// Writes `value` at the root of `(scope, var)`'s alias chain, returning a
/// new map. If the chain is already grounded to a constant, fails with
/// [`VariableBindingError`] rather than silently overwriting it — even a
/// structurally identical rebind is rejected, matching the stricter (and
/// deliberately preserved) original behavior.
pub fn set_var_binding(
    var: &Variable,
    scope: &Rc<Rule>,
    value: Binding,
    substitutions: &SubstitutionsMap,
) -> Result<SubstitutionsMap, VariableBindingError> {
    // Walk to the root of the alias chain.
    let mut cur_scope = Rc::clone(scope);
    let mut cur_var = var.clone();
    loop {
        match substitutions.lookup(&cur_scope, &cur_var) {
            None => break,
            Some(Binding::Ground(_)) => {
                return Err(VariableBindingError { variable: cur_var.symbol.clone() });
            }
            Some(Binding::Alias(next_scope, next_var)) => {
                let next_scope = Rc::clone(next_scope);
                let next_var = next_var.clone();
                cur_scope = next_scope;
                cur_var = next_var;
            }
        }
    }
    let mut new_bindings = (*substitutions.bindings).clone();
    new_bindings.insert(SubstitutionsMap::key(&cur_scope, &cur_var), value);
    Ok(SubstitutionsMap { bindings: Rc::new(new_bindings) })
}
