use crate::parsed_types::{Atom as ParsedAtom, Literal, Name};
use crate::search::{Negatable, ObjectTuple, SymbolTable, TaskError};
use serde::{Deserialize, Serialize};

/// A ground atom: a predicate applied to objects. Nullary atoms have an empty
/// argument tuple.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Atom {
    predicate_index: usize,
    arguments: ObjectTuple,
}

impl Atom {
    pub fn new(predicate_index: usize, arguments: ObjectTuple) -> Self {
        Self {
            predicate_index,
            arguments,
        }
    }

    /// Resolves a parsed atom over object names against the symbol table.
    pub fn from_parsed(atom: &ParsedAtom<Name>, symbols: &SymbolTable) -> Result<Self, TaskError> {
        let predicate_index = symbols.predicate_index(atom.predicate_name(), atom.len())?;
        let arguments = atom
            .values()
            .iter()
            .map(|name| symbols.object_index(name))
            .collect::<Result<ObjectTuple, _>>()?;

        Ok(Self {
            predicate_index,
            arguments,
        })
    }

    #[inline(always)]
    pub fn predicate_index(&self) -> usize {
        self.predicate_index
    }

    #[inline(always)]
    pub fn arguments(&self) -> &[usize] {
        &self.arguments
    }

    pub(crate) fn into_arguments(self) -> ObjectTuple {
        self.arguments
    }

    /// Whether any argument is `object`.
    pub fn mentions(&self, object: usize) -> bool {
        self.arguments.contains(&object)
    }

    pub fn human_readable(&self, symbols: &SymbolTable) -> String {
        let mut text = format!("({}", symbols.predicate(self.predicate_index).name);
        for &argument in self.arguments.iter() {
            text.push(' ');
            text.push_str(symbols.object_name(argument));
        }
        text.push(')');
        text
    }
}

impl Negatable<Atom> {
    pub fn from_parsed(literal: &Literal<Name>, symbols: &SymbolTable) -> Result<Self, TaskError> {
        Ok(Negatable::new(
            literal.is_negated(),
            Atom::from_parsed(literal.atom(), symbols)?,
        ))
    }

    #[inline(always)]
    pub fn predicate_index(&self) -> usize {
        self.underlying().predicate_index()
    }

    pub fn human_readable(&self, symbols: &SymbolTable) -> String {
        match self {
            Negatable::Positive(atom) => atom.human_readable(symbols),
            Negatable::Negative(atom) => format!("(not {})", atom.human_readable(symbols)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::PredicateName;
    use crate::search::object_tuple;

    fn symbols() -> SymbolTable {
        let mut symbols = SymbolTable::new();
        symbols.intern_predicate(Name::new("At"), 2).unwrap();
        symbols.intern_predicate(Name::new("arm-empty"), 0).unwrap();
        symbols.intern_object(Name::new("trayA"));
        symbols.intern_object(Name::new("locTable"));
        symbols
    }

    #[test]
    fn resolves_names() {
        let symbols = symbols();
        let parsed = ParsedAtom::new(
            PredicateName::from("At"),
            vec![Name::new("trayA"), Name::new("locTable")],
        );
        let atom = Atom::from_parsed(&parsed, &symbols).unwrap();
        assert_eq!(atom, Atom::new(0, object_tuple![0, 1]));
        assert_eq!(atom.human_readable(&symbols), "(At trayA locTable)");
    }

    #[test]
    fn unknown_object_is_an_error() {
        let symbols = symbols();
        let parsed = ParsedAtom::new(
            PredicateName::from("At"),
            vec![Name::new("trayB"), Name::new("locTable")],
        );
        assert!(matches!(
            Atom::from_parsed(&parsed, &symbols),
            Err(TaskError::UnknownObject(name)) if name == "trayB"
        ));
    }

    #[test]
    fn nullary_and_negated_rendering() {
        let symbols = symbols();
        let literal = Negatable::Negative(Atom::new(1, object_tuple![]));
        assert_eq!(literal.human_readable(&symbols), "(not (arm-empty))");
    }
}
