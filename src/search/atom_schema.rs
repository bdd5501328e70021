use crate::search::{Atom, ObjectTuple};

/// If the argument is a constant, then the value is the index of the object in
/// the task, otherwise it is a variable slot: action parameters occupy the
/// first slots, followed by the variables of enclosing quantifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaArgument {
    Constant(usize),
    Free(usize),
}

impl SchemaArgument {
    #[inline(always)]
    pub fn ground(&self, bindings: &[usize]) -> usize {
        match self {
            Self::Constant(object) => *object,
            Self::Free(slot) => bindings[*slot],
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }
}

/// An atom whose arguments may still refer to variable slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomSchema {
    predicate_index: usize,
    arguments: Vec<SchemaArgument>,
}

impl AtomSchema {
    pub fn new(predicate_index: usize, arguments: Vec<SchemaArgument>) -> Self {
        Self {
            predicate_index,
            arguments,
        }
    }

    #[inline(always)]
    pub fn predicate_index(&self) -> usize {
        self.predicate_index
    }

    #[inline(always)]
    pub fn arguments(&self) -> &[SchemaArgument] {
        &self.arguments
    }

    pub fn is_nullary(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn ground(&self, bindings: &[usize]) -> Atom {
        Atom::new(
            self.predicate_index,
            self.arguments
                .iter()
                .map(|argument| argument.ground(bindings))
                .collect::<ObjectTuple>(),
        )
    }

    /// Substitutes the first `bindings.len()` slots and shifts the remaining
    /// ones down so that they start at zero.
    pub(crate) fn partially_ground(&self, bindings: &[usize]) -> AtomSchema {
        let arguments = self
            .arguments
            .iter()
            .map(|argument| match *argument {
                SchemaArgument::Free(slot) if slot < bindings.len() => {
                    SchemaArgument::Constant(bindings[slot])
                }
                SchemaArgument::Free(slot) => SchemaArgument::Free(slot - bindings.len()),
                constant => constant,
            })
            .collect();
        AtomSchema::new(self.predicate_index, arguments)
    }
}
