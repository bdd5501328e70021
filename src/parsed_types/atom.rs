//! Atoms and literals over either [`Term`]s or bare [`Name`]s.

use crate::parsed_types::{Name, PredicateName, Variable};
use std::ops::Deref;

/// An argument inside an action definition: an object constant or one of
/// the action's variables.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Term {
    Name(Name),
    Variable(Variable),
}

impl Term {
    pub const fn new_name(name: Name) -> Self {
        Self::Name(name)
    }

    pub const fn new_variable(var: Variable) -> Self {
        Self::Variable(var)
    }
}

impl From<Name> for Term {
    fn from(value: Name) -> Self {
        Self::Name(value)
    }
}

impl From<Variable> for Term {
    fn from(value: Variable) -> Self {
        Self::Variable(value)
    }
}

/// A predicate name applied to its arguments. Action definitions use
/// `Atom<Term>`; problems and state patches use `Atom<Name>`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Atom<T> {
    predicate_name: PredicateName,
    values: Vec<T>,
}

impl<T> Atom<T> {
    pub const fn new(predicate_name: PredicateName, values: Vec<T>) -> Self {
        Self {
            predicate_name,
            values,
        }
    }

    pub const fn predicate_name(&self) -> &PredicateName {
        &self.predicate_name
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T> From<(PredicateName, Vec<T>)> for Atom<T> {
    fn from((predicate_name, values): (PredicateName, Vec<T>)) -> Self {
        Atom::new(predicate_name, values)
    }
}

impl<T> Deref for Atom<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

/// An [`Atom`] that is either asserted or denied.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Literal<T> {
    Positive(Atom<T>),
    Negative(Atom<T>),
}

impl<T> Literal<T> {
    pub const fn new(atom: Atom<T>) -> Self {
        Self::Positive(atom)
    }

    pub const fn new_not(atom: Atom<T>) -> Self {
        Self::Negative(atom)
    }

    pub const fn is_negated(&self) -> bool {
        matches!(self, Self::Negative(..))
    }

    pub const fn atom(&self) -> &Atom<T> {
        match self {
            Self::Positive(atom) | Self::Negative(atom) => atom,
        }
    }
}

impl<T> From<Atom<T>> for Literal<T> {
    fn from(value: Atom<T>) -> Self {
        Literal::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{atom, literal, parse_name, parse_term, Span};

    #[test]
    fn atom_over_terms() {
        let (_, parsed) = atom(parse_term)(Span::new("(On ?o objB)")).unwrap();
        assert_eq!(parsed.predicate_name(), &PredicateName::from_str("On"));
        assert_eq!(
            parsed.values(),
            &[
                Term::new_variable(Variable::from_str("o")),
                Term::new_name(Name::from("objB"))
            ]
        );

        let literal: Literal<Term> = parsed.into();
        assert!(!literal.is_negated());
    }

    #[test]
    fn negated_ground_literal() {
        let (_, parsed) = literal(parse_name)(Span::new("(not (Heavy trayA))")).unwrap();
        assert!(parsed.is_negated());
        assert_eq!(parsed.atom().len(), 1);
        assert_eq!(parsed.atom()[0], Name::from("trayA"));
    }
}
