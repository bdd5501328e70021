//! A plan is a sequence of ground operators that can be executed to achieve
//! a goal. This module provides the [`Plan`] struct, which represents a plan,
//! together with reading and writing plans in the usual one step per line
//! format.

use crate::parsers::{describe_error, parse_plan};
use crate::search::{ground_step, Operator, SymbolTable, Task, TaskError};
use std::fs;
use std::ops::Deref;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Operator>,
}

impl Plan {
    pub fn new(steps: Vec<Operator>) -> Self {
        Self { steps }
    }

    pub fn from_path(path: &Path, task: &Task) -> Result<Self, TaskError> {
        let contents = fs::read_to_string(path).map_err(|source| TaskError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&contents, task)
    }

    /// Reads a plan such as `(pickTray robot trayA locTable)` per line.
    /// Steps are grounded directly, so a step whose arguments violate a
    /// static precondition is still read and later rejected by validation.
    pub fn from_text(text: &str, task: &Task) -> Result<Self, TaskError> {
        let (remainder, parsed_plan) = parse_plan(text).map_err(|e| TaskError::Parse {
            what: "plan",
            message: describe_error(text, &e),
        })?;
        if !remainder.fragment().is_empty() {
            let offset = remainder.location_offset();
            return Err(TaskError::Parse {
                what: "plan",
                message: format!(
                    "{}:{}: unexpected `{}`",
                    remainder.location_line(),
                    remainder.get_utf8_column(),
                    text[offset..].lines().next().unwrap_or_default().trim()
                ),
            });
        }

        let symbols = task.symbols();
        let mut steps = Vec::with_capacity(parsed_plan.steps().len());
        for step in parsed_plan.steps() {
            let schema = &task.action_schemas()[symbols.action_index(&**step.name())?];
            if step.parameters().len() != schema.arity() {
                return Err(TaskError::WrongNumberOfArguments {
                    action: **step.name(),
                    expected: schema.arity(),
                    found: step.parameters().len(),
                });
            }
            let binding = step
                .parameters()
                .iter()
                .map(|parameter| symbols.object_index(parameter))
                .collect::<Result<Vec<_>, _>>()?;
            steps.push(ground_step(task, schema, &binding));
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Operator] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn cost(&self) -> f64 {
        self.steps.iter().map(Operator::cost).sum()
    }

    /// One step per line, followed by a cost comment.
    pub fn to_text(&self, symbols: &SymbolTable) -> String {
        let mut text = String::new();
        for step in &self.steps {
            text.push_str(&step.human_readable(symbols));
            text.push('\n');
        }
        let unit_cost = self.steps.iter().all(|step| step.cost() == 1.);
        text.push_str(&format!(
            "; cost = {} ({})\n",
            self.cost(),
            if unit_cost { "unit cost" } else { "general cost" }
        ));
        text
    }
}

impl IntoIterator for Plan {
    type Item = Operator;
    type IntoIter = std::vec::IntoIter<Operator>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [Operator];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::Name;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;
    use std::io::Write;

    fn blocksworld() -> Task {
        Task::from_text(BLOCKSWORLD_DOMAIN_TEXT, BLOCKSWORLD_PROBLEM_TEXT).unwrap()
    }

    #[test]
    fn from_text_works() {
        let task = blocksworld();
        let plan_text = r#"(unstack a b)
        (putdown a)
        (pickup b)
        (stack b c)
        ; cost = 4 (unit cost)
        "#;

        let plan = Plan::from_text(plan_text, &task).unwrap();
        assert_eq!(plan.len(), 4);

        let symbols = task.symbols();
        let object = |name: &str| symbols.object_index(&Name::from(name)).unwrap();
        let action = |name: &str| symbols.action_index(&Name::from(name)).unwrap();

        assert_eq!(plan[0].schema_index(), action("unstack"));
        assert_eq!(plan[0].instantiation(), &[object("a"), object("b")]);
        assert_eq!(plan[1].schema_index(), action("putdown"));
        assert_eq!(plan[1].instantiation(), &[object("a")]);
        assert_eq!(plan[3].schema_index(), action("stack"));
        assert_eq!(plan[3].instantiation(), &[object("b"), object("c")]);
        assert_approx_eq!(plan.cost(), 4.);
    }

    #[test]
    fn steps_match_grounded_operators() {
        let task = blocksworld();
        let operators = crate::search::ground(&task, 1000).unwrap();
        let plan = Plan::from_text("(unstack a b)", &task).unwrap();
        assert!(operators.contains(&plan[0]));
    }

    #[test]
    fn unknown_actions_and_objects_are_rejected() {
        let task = blocksworld();
        assert!(matches!(
            Plan::from_text("(fly a)", &task),
            Err(TaskError::UnknownAction(name)) if name == "fly"
        ));
        assert!(matches!(
            Plan::from_text("(pickup z)", &task),
            Err(TaskError::UnknownObject(name)) if name == "z"
        ));
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let task = blocksworld();
        assert!(matches!(
            Plan::from_text("(stack a)", &task),
            Err(TaskError::WrongNumberOfArguments {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        let task = blocksworld();
        assert!(matches!(
            Plan::from_text("(pickup a) pickup", &task),
            Err(TaskError::Parse { what: "plan", .. })
        ));
    }

    #[test]
    fn text_round_trip_through_a_file() {
        let task = blocksworld();
        let plan = Plan::from_text("(unstack a b) (putdown a) (pickup b) (stack b c)", &task)
            .unwrap();
        let text = plan.to_text(task.symbols());
        assert!(text.ends_with("; cost = 4 (unit cost)\n"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        let read_back = Plan::from_path(file.path(), &task).unwrap();
        assert_eq!(read_back, plan);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let task = blocksworld();
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Plan::from_path(&dir.path().join("missing.plan"), &task),
            Err(TaskError::Io { .. })
        ));
    }

    #[test]
    fn empty_plan_has_zero_cost() {
        let plan = Plan::default();
        assert!(plan.is_empty());
        assert_approx_eq!(plan.cost(), 0.);
    }
}
