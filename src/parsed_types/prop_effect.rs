//! Contains definition for a single propositional effect.

use crate::parsed_types::{Atom, Term, TypedVariables};

/// A propositional effect.
#[derive(Debug, Clone, PartialEq)]
pub enum PropEffect {
    Add(Atom<Term>),
    Delete(Atom<Term>),
    /// A universally quantified effect, e.g.
    /// `(forall (?l ?x) (not (Obstructs ?l ?o ?x)))`. The body is applied for
    /// every binding of the variables over the objects of the problem.
    Forall(TypedVariables, Vec<PropEffect>),
}

impl PropEffect {
    pub const fn new_add(atom: Atom<Term>) -> Self {
        Self::Add(atom)
    }

    pub const fn new_delete(atom: Atom<Term>) -> Self {
        Self::Delete(atom)
    }

    pub fn new_forall(variables: TypedVariables, effects: Vec<PropEffect>) -> Self {
        Self::Forall(variables, effects)
    }

    /// Visits every add and delete effect, including those nested inside
    /// quantified effects.
    pub fn for_each_atom<F: FnMut(&Atom<Term>, bool)>(&self, f: &mut F) {
        match self {
            PropEffect::Add(atom) => f(atom, true),
            PropEffect::Delete(atom) => f(atom, false),
            PropEffect::Forall(_, effects) => {
                for effect in effects {
                    effect.for_each_atom(f)
                }
            }
        }
    }
}
