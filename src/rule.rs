//! Facts and rules: `head :- body.`
//!
//! Mirrors the teacher's `Rule { head, body }` (`suiron::rule::Rule`), minus
//! the string parser — rules here are always built from Rust values, never
//! parsed from source text (no parser is in scope).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::atom::Atom;
use crate::identity::next_id;

/// `(head: Atom, body: ordered sequence of Atom)`.
///
/// A rule with an empty body is a *fact*. Every rule instance carries its
/// own identity (`id`), independent of its head/body content — it is this
/// identity, not the rule's shape, that anchors the variable scope of its
/// own head and body atoms, and that keys the `available_rules` cycle
/// guard during search.
#[derive(Debug, Clone)]
pub struct Rule {
    id: usize,
    pub head: Atom,
    pub body: Vec<Atom>,
}

impl Rule {
    pub fn new(head: Atom, body: Vec<Atom>) -> Self {
        Rule { id: next_id(), head, body }
    }

    /// Creates a fact: a rule with an empty body.
    pub fn fact(head: Atom) -> Self {
        Rule::new(head, Vec::new())
    }

    pub fn id(&self) -> usize { self.id }

    pub fn is_fact(&self) -> bool { self.body.is_empty() }

    /// Produces a fresh, unique scope sentinel: a rule with an empty head
    /// predicate-less body used solely as a query's variable namespace.
    /// It is never itself a candidate for resolution (the search only
    /// ever consults caller-supplied or dynamic rules).
    pub fn generate_variable_scope(query: Atom) -> Rc<Rule> {
        Rc::new(Rule::new(query, Vec::new()))
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool { self.id == other.id }
}
impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) { self.id.hash(state); }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_fact() {
            write!(f, "{}.", self.head)
        } else {
            write!(f, "{} :- ", self.head)?;
            for (i, atom) in self.body.iter().enumerate() {
                if i > 0 { write!(f, ", ")?; }
                write!(f, "{}", atom)?;
            }
            write!(f, ".")
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::{Constant, Predicate, Term};

    fn atom(name: &str, args: &[&str]) -> Atom {
        let p = Rc::new(Predicate::new(name));
        p.of(args.iter().map(|a| Term::from(Constant::new(*a))).collect())
    }

    #[test]
    fn fact_has_empty_body_and_displays_with_period() {
        let r = Rule::fact(atom("father_of", &["abe", "homer"]));
        assert!(r.is_fact());
        assert_eq!(format!("{}", r), "father_of(abe, homer).");
    }

    #[test]
    fn distinct_rule_instances_are_never_equal() {
        let a = Rule::fact(atom("father_of", &["abe", "homer"]));
        let b = Rule::fact(atom("father_of", &["abe", "homer"]));
        assert_ne!(a, b); // same content, different identity
    }

    #[test]
    fn rule_with_body_displays_with_neck() {
        let r = Rule::new(
            atom("grandpa_of", &["X", "Y"]),
            vec![atom("father_of", &["X", "Z"]), atom("parent_of", &["Z", "Y"])],
        );
        assert!(!r.is_fact());
        assert_eq!(
            format!("{}", r),
            "grandpa_of(X, Y) :- father_of(X, Z), parent_of(Z, Y)."
        );
    }
}
