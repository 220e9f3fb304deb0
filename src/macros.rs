//! Convenience macros for building terms, atoms and rules directly in Rust
//! source, since there is no parser in this crate.
//!
//! Modeled on the teacher crate's own `macros.rs` (`atom!`, `logic_var!`,
//! `scomplex!`, ...): each macro is a thin wrapper over a constructor,
//! meant to make knowledge bases readable at the call site.

/// Creates an `Rc<Variable>`-free [`Term::Variable`](crate::term::Term)
/// from a symbol.
/// # Usage
/// ```
/// use fuzzy_prover::var;
/// use fuzzy_prover::term::Term;
///
/// let x = var!("X");
/// assert!(matches!(x, Term::Variable(_)));
/// ```
#[macro_export]
macro_rules! var {
    ($symbol:expr) => {
        $crate::term::Term::Variable($crate::term::Variable::new($symbol))
    };
}

/// Creates a [`Term::Constant`](crate::term::Term) with no embedding
/// vector.
/// # Usage
/// ```
/// use fuzzy_prover::constant;
/// use fuzzy_prover::term::Term;
///
/// let abe = constant!("abe");
/// assert!(matches!(abe, Term::Constant(_)));
/// ```
#[macro_export]
macro_rules! constant {
    ($symbol:expr) => {
        $crate::term::Term::Constant($crate::term::Constant::new($symbol))
    };
    ($symbol:expr, $vector:expr) => {
        $crate::term::Term::Constant($crate::term::Constant::with_vector($symbol, $vector))
    };
}

/// Creates an `Rc<Predicate>`, ready to be applied to terms via
/// [`Predicate::of`](crate::term::Predicate::of).
/// # Usage
/// ```
/// use fuzzy_prover::predicate;
///
/// let father_of = predicate!("father_of");
/// assert_eq!(father_of.symbol, "father_of");
/// ```
#[macro_export]
macro_rules! predicate {
    ($symbol:expr) => {
        std::rc::Rc::new($crate::term::Predicate::new($symbol))
    };
    ($symbol:expr, $vector:expr) => {
        std::rc::Rc::new($crate::term::Predicate::with_vector($symbol, $vector))
    };
}

/// Builds an [`Atom`](crate::atom::Atom) from an `Rc<Predicate>` and a
/// term list.
/// # Usage
/// ```
/// use fuzzy_prover::{atom, predicate, constant};
///
/// let father_of = predicate!("father_of");
/// let a = atom!(father_of, constant!("abe"), constant!("homer"));
/// assert_eq!(a.arity(), 2);
/// ```
#[macro_export]
macro_rules! atom {
    ($predicate:expr, $($term:expr),* $(,)?) => {
        $predicate.of(vec![$($term),*])
    };
}

/// Builds a fact: a [`Rule`](crate::rule::Rule) with an empty body.
/// # Usage
/// ```
/// use fuzzy_prover::{fact, atom, predicate, constant};
///
/// let father_of = predicate!("father_of");
/// let f = fact!(atom!(father_of, constant!("abe"), constant!("homer")));
/// assert!(f.is_fact());
/// ```
#[macro_export]
macro_rules! fact {
    ($head:expr) => {
        $crate::rule::Rule::fact($head)
    };
}

/// Builds a rule: `head :- body_1, body_2, ...`.
/// # Usage
/// ```
/// use fuzzy_prover::{rule, atom, predicate, var};
///
/// let grandpa_of = predicate!("grandpa_of");
/// let father_of = predicate!("father_of");
/// let parent_of = predicate!("parent_of");
/// let r = rule!(
///     atom!(grandpa_of, var!("X"), var!("Y")),
///     atom!(father_of, var!("X"), var!("Z")),
///     atom!(parent_of, var!("Z"), var!("Y")),
/// );
/// assert!(!r.is_fact());
/// ```
#[macro_export]
macro_rules! rule {
    ($head:expr, $($body:expr),+ $(,)?) => {
        $crate::rule::Rule::new($head, vec![$($body),+])
    };
}
