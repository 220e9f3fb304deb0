//! Atoms: a predicate applied to an ordered, fixed-length term list.

use std::fmt;
use std::rc::Rc;

use crate::term::{Predicate, Term};

/// `(predicate, terms)`. Immutable once built.
///
/// Atoms are cheap to clone — `terms` lives behind an `Rc` slice so sharing
/// an atom across proof-graph nodes and substitution snapshots never
/// requires copying the term list itself, mirroring the teacher's own use
/// of `Rc<Unifiable>` inside `SubstitutionSet`.
#[derive(Debug, Clone)]
pub struct Atom {
    pub predicate: Rc<Predicate>,
    pub terms: Rc<Vec<Term>>,
}

impl Atom {
    pub fn new(predicate: Rc<Predicate>, terms: Vec<Term>) -> Self {
        Atom { predicate, terms: Rc::new(terms) }
    }

    pub fn arity(&self) -> usize { self.terms.len() }
}

impl Predicate {
    /// Applies this predicate to an ordered sequence of terms, producing an
    /// atom. Mirrors the original reference implementation's
    /// `Predicate.__call__`, which lets a predicate "act as a constructor
    /// of atoms" (per the data model).
    /// # Usage
    /// ```
    /// use std::rc::Rc;
    /// use fuzzy_prover::term::{Predicate, Constant, Term};
    ///
    /// let father_of = Rc::new(Predicate::new("father_of"));
    /// let atom = father_of.of(vec![
    ///     Term::from(Constant::new("abe")),
    ///     Term::from(Constant::new("homer")),
    /// ]);
    /// assert_eq!(atom.arity(), 2);
    /// ```
    pub fn of(self: &Rc<Self>, terms: Vec<Term>) -> Atom {
        Atom::new(Rc::clone(self), terms)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.predicate)?;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{}", term)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::Constant;

    #[test]
    fn predicate_of_builds_an_atom() {
        let p = Rc::new(Predicate::new("parent_of"));
        let atom = p.of(vec![
            Term::from(Constant::new("homer")),
            Term::from(Constant::new("bart")),
        ]);
        assert_eq!(atom.arity(), 2);
        assert_eq!(format!("{}", atom), "parent_of(homer, bart)");
    }
}
