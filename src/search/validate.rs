use crate::search::states::State;
use crate::search::{FailureReason, Plan, SymbolTable, Task, ValidationFailure};
use serde_json::{json, Value};

/// The states visited by a valid plan: the initial state followed by the
/// state after each step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanTrace {
    states: Vec<State>,
}

impl PlanTrace {
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn final_state(&self) -> &State {
        // a trace always holds at least the initial state
        &self.states[self.states.len() - 1]
    }

    pub fn to_json(&self, symbols: &SymbolTable) -> Value {
        json!({
            "states": self
                .states
                .iter()
                .map(|state| state.to_json(symbols))
                .collect::<Vec<_>>(),
        })
    }
}

/// Replays the plan from the initial state of the task. Only the operators'
/// own preconditions and effects are consulted, never a successor generator.
pub fn validate(task: &Task, plan: &Plan) -> Result<PlanTrace, ValidationFailure> {
    let symbols = task.symbols();
    let mut states = Vec::with_capacity(plan.len() + 1);
    states.push(task.initial_state().clone());

    for (step, operator) in plan.iter().enumerate() {
        let current = &states[step];
        if let Some(reason) = operator.precondition().unmet(current, symbols) {
            return Err(ValidationFailure { step, reason });
        }
        let next = operator.apply_unchecked(current);
        states.push(next);
    }

    let final_state = &states[states.len() - 1];
    if let Some(literal) = task.goal().first_unsatisfied(final_state) {
        return Err(ValidationFailure {
            step: plan.len(),
            reason: FailureReason::GoalUnmet(literal.human_readable(symbols)),
        });
    }

    Ok(PlanTrace { states })
}
