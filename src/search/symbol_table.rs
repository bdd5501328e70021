//! Interning of object, predicate and action names.

use crate::parsed_types::Name;
use crate::search::{Predicate, TaskError};
use std::collections::HashMap;

/// Bidirectional mapping between names and dense indices. Indices are
/// assigned in insertion order, and interning a name twice returns the
/// index it already has.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    objects: Vec<Name>,
    object_table: HashMap<Name, usize>,
    predicates: Vec<Predicate>,
    predicate_table: HashMap<Name, usize>,
    actions: Vec<Name>,
    action_table: HashMap<Name, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern_object(&mut self, name: Name) -> usize {
        if let Some(&index) = self.object_table.get(&name) {
            return index;
        }
        let index = self.objects.len();
        self.objects.push(name);
        self.object_table.insert(name, index);
        index
    }

    /// Interns a predicate. Interning an existing predicate with a different
    /// arity is an error.
    pub fn intern_predicate(&mut self, name: Name, arity: usize) -> Result<usize, TaskError> {
        if let Some(&index) = self.predicate_table.get(&name) {
            let expected = self.predicates[index].arity;
            if expected != arity {
                return Err(TaskError::ArityMismatch {
                    predicate: name,
                    expected,
                    found: arity,
                });
            }
            return Ok(index);
        }
        let index = self.predicates.len();
        self.predicates.push(Predicate::new(index, name, arity));
        self.predicate_table.insert(name, index);
        Ok(index)
    }

    pub fn intern_action(&mut self, name: Name) -> Result<usize, TaskError> {
        if self.action_table.contains_key(&name) {
            return Err(TaskError::DuplicateAction(name));
        }
        let index = self.actions.len();
        self.actions.push(name);
        self.action_table.insert(name, index);
        Ok(index)
    }

    pub fn object_index(&self, name: &Name) -> Result<usize, TaskError> {
        self.object_table
            .get(name)
            .copied()
            .ok_or(TaskError::UnknownObject(*name))
    }

    /// Looks up a predicate and checks that it is used with the right number
    /// of arguments.
    pub fn predicate_index(&self, name: &Name, num_arguments: usize) -> Result<usize, TaskError> {
        let index = self.find_predicate(name)?;
        let expected = self.predicates[index].arity;
        if expected != num_arguments {
            return Err(TaskError::ArityMismatch {
                predicate: *name,
                expected,
                found: num_arguments,
            });
        }
        Ok(index)
    }

    pub fn find_predicate(&self, name: &Name) -> Result<usize, TaskError> {
        self.predicate_table
            .get(name)
            .copied()
            .ok_or(TaskError::UnknownPredicate(*name))
    }

    pub fn action_index(&self, name: &Name) -> Result<usize, TaskError> {
        self.action_table
            .get(name)
            .copied()
            .ok_or(TaskError::UnknownAction(*name))
    }

    #[inline(always)]
    pub fn object_name(&self, index: usize) -> &Name {
        &self.objects[index]
    }

    #[inline(always)]
    pub fn predicate(&self, index: usize) -> &Predicate {
        &self.predicates[index]
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub(crate) fn predicates_mut(&mut self) -> &mut [Predicate] {
        &mut self.predicates
    }

    #[inline(always)]
    pub fn action_name(&self, index: usize) -> &Name {
        &self.actions[index]
    }

    pub fn num_objects(&self) -> usize {
        self.objects.len()
    }

    pub fn num_predicates(&self) -> usize {
        self.predicates.len()
    }

    pub fn num_actions(&self) -> usize {
        self.actions.len()
    }
}
