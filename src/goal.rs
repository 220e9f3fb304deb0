//! A goal pairs an atom with the rule scope under which its variables are
//! resolved.

use std::fmt;
use std::rc::Rc;

use crate::atom::Atom;
use crate::rule::Rule;

/// `(statement: Atom, scope: Rule)`.
///
/// The top-level user query is wrapped in a synthetic scope rule produced
/// by [`Rule::generate_variable_scope`]; body atoms of an ordinary rule are
/// wrapped with that rule itself as scope (see `search::recurse`).
#[derive(Debug, Clone)]
pub struct Goal {
    pub statement: Atom,
    pub scope: Rc<Rule>,
}

impl Goal {
    pub fn new(statement: Atom, scope: Rc<Rule>) -> Self {
        Goal { statement, scope }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.statement)
    }
}
