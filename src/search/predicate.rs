use crate::parsed_types::Name;

/// A predicate known to the [`SymbolTable`](crate::search::SymbolTable).
/// Declared predicates, type names and implicit predicates all end up here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub name: Name,
    pub index: usize,
    pub arity: usize,
    /// Whether no action effect mentions the predicate. Atoms of static
    /// predicates are fixed by the initial state and evaluated during
    /// grounding.
    pub is_static: bool,
}

impl Predicate {
    pub fn new(index: usize, name: Name, arity: usize) -> Self {
        Self {
            name,
            index,
            arity,
            is_static: false,
        }
    }

    pub fn mark_as_static(&mut self) {
        self.is_static = true;
    }
}
