//! A plan file as written: a list of `(action object*)` steps, not yet
//! checked against any task.

use crate::parsed_types::{ActionName, Name};

/// One step of a plan, e.g. `(grasp objA loc2 locTable)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanStep {
    name: ActionName,
    parameters: Vec<Name>,
}

impl PlanStep {
    pub const fn new(name: ActionName, parameters: Vec<Name>) -> Self {
        Self { name, parameters }
    }

    pub const fn name(&self) -> &ActionName {
        &self.name
    }

    pub fn parameters(&self) -> &[Name] {
        &self.parameters
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    steps: Vec<PlanStep>,
}

impl Plan {
    pub const fn new(steps: Vec<PlanStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }
}
