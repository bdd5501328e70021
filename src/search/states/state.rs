//! This module contains the definition of a search state: one relation per
//! predicate, each holding the argument tuples of the atoms that are true.
//!
//! Relations are reference counted, so a successor state shares every
//! relation its operator does not touch with its parent.

use crate::search::{Atom, Negatable, ObjectTuple, SymbolTable};
use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct Relation {
    /// The predicate symbol of this relation.
    pub predicate_symbol: usize,
    /// The tuples of the relation. This is a [`BTreeSet`] as `HashSet`
    /// does not implement [`Hash`]. Nullary atoms are stored as the empty
    /// tuple.
    pub tuples: BTreeSet<ObjectTuple>,
}

impl Relation {
    fn new(predicate_symbol: usize) -> Self {
        Self {
            predicate_symbol,
            tuples: BTreeSet::new(),
        }
    }
}

/// A set of ground atoms under the closed-world assumption. Equality and
/// hashing are by content.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct State {
    relations: Vec<Arc<Relation>>,
}

impl State {
    pub fn new(num_predicates: usize) -> Self {
        State {
            relations: (0..num_predicates)
                .map(|i| Arc::new(Relation::new(i)))
                .collect(),
        }
    }

    pub fn from_atoms<'a, I: IntoIterator<Item = &'a Atom>>(num_predicates: usize, atoms: I) -> Self {
        let mut relations: Vec<Relation> = (0..num_predicates).map(Relation::new).collect();
        for atom in atoms {
            relations[atom.predicate_index()]
                .tuples
                .insert(ObjectTuple::from_slice(atom.arguments()));
        }
        State {
            relations: relations.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn num_predicates(&self) -> usize {
        self.relations.len()
    }

    #[inline(always)]
    pub fn relation(&self, predicate_index: usize) -> &Relation {
        &self.relations[predicate_index]
    }

    #[inline(always)]
    pub fn contains(&self, atom: &Atom) -> bool {
        self.relations[atom.predicate_index()]
            .tuples
            .contains(atom.arguments())
    }

    #[inline(always)]
    pub fn satisfies(&self, literal: &Negatable<Atom>) -> bool {
        self.contains(literal.underlying()) != literal.is_negated()
    }

    /// The number of true atoms.
    pub fn len(&self) -> usize {
        self.relations.iter().map(|r| r.tuples.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.iter().all(|r| r.tuples.is_empty())
    }

    /// All true atoms, ordered by predicate and then by arguments.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.relations.iter().flat_map(|relation| {
            relation
                .tuples
                .iter()
                .map(|tuple| Atom::new(relation.predicate_symbol, tuple.clone()))
        })
    }

    /// The state obtained by first removing `deletes` and then inserting
    /// `adds`, so an atom in both lists ends up true. Relations without an
    /// actual change stay shared with `self`.
    pub fn apply_delta(&self, deletes: &[Atom], adds: &[Atom]) -> State {
        let mut relations = self.relations.clone();
        for atom in deletes {
            let relation = &mut relations[atom.predicate_index()];
            if relation.tuples.contains(atom.arguments()) {
                Arc::make_mut(relation).tuples.remove(atom.arguments());
            }
        }
        for atom in adds {
            let relation = &mut relations[atom.predicate_index()];
            if !relation.tuples.contains(atom.arguments()) {
                Arc::make_mut(relation)
                    .tuples
                    .insert(ObjectTuple::from_slice(atom.arguments()));
            }
        }
        State { relations }
    }

    /// Whether both states hold the very same relation object for the
    /// predicate, rather than merely equal contents.
    pub fn shares_relation_with(&self, other: &State, predicate_index: usize) -> bool {
        Arc::ptr_eq(
            &self.relations[predicate_index],
            &other.relations[predicate_index],
        )
    }

    /// The true atoms as sorted human readable strings.
    pub fn human_readable(&self, symbols: &SymbolTable) -> Vec<String> {
        let mut atoms: Vec<String> = self
            .atoms()
            .map(|atom| atom.human_readable(symbols))
            .collect();
        atoms.sort();
        atoms
    }

    pub fn to_json(&self, symbols: &SymbolTable) -> Value {
        json!(self.human_readable(symbols))
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for relation in &self.relations {
            for tuple in &relation.tuples {
                write!(f, "({} {:?})", relation.predicate_symbol, tuple.as_slice())?;
            }
        }
        Ok(())
    }
}
