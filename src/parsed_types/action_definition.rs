//! Contains action definitions via the [`ActionDefinition`] type.

use crate::parsed_types::{ActionName, PropCondition, PropEffect, TypedVariables};

/// The cost of an action without a `:cost` section.
const UNIT_COST: f64 = 1.0;

/// One `(:action ...)` block. The precondition is kept as the list of its
/// top-level conjuncts and the effect as the list of its top-level parts.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDefinition {
    name: ActionName,
    parameters: TypedVariables,
    preconditions: Vec<PropCondition>,
    effects: Vec<PropEffect>,
    cost: f64,
}

impl ActionDefinition {
    pub const fn new(
        name: ActionName,
        parameters: TypedVariables,
        preconditions: Vec<PropCondition>,
        effects: Vec<PropEffect>,
    ) -> Self {
        Self {
            name,
            parameters,
            preconditions,
            effects,
            cost: UNIT_COST,
        }
    }

    /// Overrides the unit cost for every operator grounded from this action.
    pub fn with_cost(self, cost: f64) -> Self {
        Self { cost, ..self }
    }

    pub const fn name(&self) -> &ActionName {
        &self.name
    }

    pub const fn parameters(&self) -> &TypedVariables {
        &self.parameters
    }

    pub fn preconditions(&self) -> &[PropCondition] {
        &self.preconditions
    }

    pub fn effects(&self) -> &[PropEffect] {
        &self.effects
    }

    pub const fn cost(&self) -> f64 {
        self.cost
    }
}
