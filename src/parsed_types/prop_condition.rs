//! Contains condition definitions via the [`PropCondition`] type.

use crate::parsed_types::{Atom, Term, TypedVariables};

/// A condition definition, used for action preconditions.
#[derive(Debug, Clone, PartialEq)]
pub enum PropCondition {
    Atom(Atom<Term>),
    And(Vec<PropCondition>),
    Or(Vec<PropCondition>),
    Not(Box<PropCondition>),
    Imply(Box<PropCondition>, Box<PropCondition>),
    Equality(Term, Term),
    /// Holds when the body holds for every binding of the variables. A
    /// variable typed `?x - T` only ranges over objects satisfying `(T ?x)`.
    Forall(TypedVariables, Box<PropCondition>),
    /// Holds when the body holds for some binding of the variables.
    Exists(TypedVariables, Box<PropCondition>),
}

impl PropCondition {
    #[inline(always)]
    pub const fn new_atom(value: Atom<Term>) -> Self {
        Self::Atom(value)
    }

    #[inline(always)]
    pub fn new_and<T: IntoIterator<Item = PropCondition>>(values: T) -> Self {
        Self::And(values.into_iter().collect())
    }

    #[inline(always)]
    pub fn new_or<T: IntoIterator<Item = PropCondition>>(values: T) -> Self {
        Self::Or(values.into_iter().collect())
    }

    #[inline(always)]
    pub fn new_not(value: PropCondition) -> Self {
        Self::Not(Box::new(value))
    }

    #[inline(always)]
    pub fn new_imply_tuple(tuple: (PropCondition, PropCondition)) -> Self {
        Self::new_imply(tuple.0, tuple.1)
    }

    #[inline(always)]
    pub fn new_imply(a: PropCondition, b: PropCondition) -> Self {
        Self::Imply(Box::new(a), Box::new(b))
    }

    #[inline(always)]
    pub const fn new_equality(a: Term, b: Term) -> Self {
        Self::Equality(a, b)
    }

    #[inline(always)]
    pub fn new_forall(variables: TypedVariables, body: PropCondition) -> Self {
        Self::Forall(variables, Box::new(body))
    }

    #[inline(always)]
    pub fn new_exists(variables: TypedVariables, body: PropCondition) -> Self {
        Self::Exists(variables, Box::new(body))
    }
}
