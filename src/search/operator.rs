//! Ground operators and their applicability test.

use crate::search::states::State;
use crate::search::{
    Atom, FailureReason, GroundEffect, GroundFormula, Negatable, ObjectTuple, PlanningError,
    SymbolTable,
};
use ordered_float::OrderedFloat;
use std::collections::HashSet;

/// The runtime part of a ground precondition: literals over dynamic
/// predicates that must all hold, and disjunctions of which at least one
/// disjunct must hold. Static parts were decided during grounding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Precondition {
    literals: Vec<Negatable<Atom>>,
    disjunctions: Vec<GroundFormula>,
    satisfiable: bool,
    /// The static literal or type guard that was found false, if any.
    violation: Option<String>,
}

impl Precondition {
    pub fn from_formula(formula: GroundFormula) -> Self {
        let mut literals = vec![];
        let mut disjunctions = vec![];
        let satisfiable = match formula {
            GroundFormula::True => true,
            GroundFormula::False => false,
            GroundFormula::Literal(literal) => {
                literals.push(literal);
                true
            }
            GroundFormula::And(children) => {
                for child in children {
                    match child {
                        GroundFormula::Literal(literal) => literals.push(literal),
                        other => disjunctions.push(other),
                    }
                }
                true
            }
            disjunction => {
                disjunctions.push(disjunction);
                true
            }
        };
        literals.sort();
        literals.dedup();

        let required: HashSet<&Atom> = literals
            .iter()
            .filter(|literal| !literal.is_negated())
            .map(|literal| literal.underlying())
            .collect();
        let contradictory = literals
            .iter()
            .any(|literal| literal.is_negated() && required.contains(literal.underlying()));

        Self {
            literals,
            disjunctions,
            satisfiable: satisfiable && !contradictory,
            violation: None,
        }
    }

    /// A precondition that never holds because of the named static literal
    /// or type guard.
    pub fn violated(violation: String) -> Self {
        Self {
            literals: vec![],
            disjunctions: vec![],
            satisfiable: false,
            violation: Some(violation),
        }
    }

    pub fn literals(&self) -> &[Negatable<Atom>] {
        &self.literals
    }

    pub fn disjunctions(&self) -> &[GroundFormula] {
        &self.disjunctions
    }

    /// False if the precondition can never hold, whatever the dynamic state.
    pub fn is_satisfiable(&self) -> bool {
        self.satisfiable
    }

    pub fn holds_in(&self, state: &State) -> bool {
        self.satisfiable
            && self.literals.iter().all(|literal| state.satisfies(literal))
            && self
                .disjunctions
                .iter()
                .all(|disjunction| disjunction.holds_in(state))
    }

    /// The first reason the precondition does not hold, if any.
    pub fn unmet(&self, state: &State, symbols: &SymbolTable) -> Option<FailureReason> {
        if let Some(violation) = &self.violation {
            return Some(FailureReason::StaticPrecondition(violation.clone()));
        }
        if let Some(literal) = self.literals.iter().find(|l| !state.satisfies(l)) {
            return Some(FailureReason::UnmetPrecondition(
                literal.human_readable(symbols),
            ));
        }
        if let Some(disjunction) = self
            .disjunctions
            .iter()
            .find(|disjunction| !disjunction.holds_in(state))
        {
            return Some(FailureReason::UnmetDisjunction(
                disjunction.human_readable(symbols),
            ));
        }
        (!self.satisfiable).then(|| {
            FailureReason::StaticPrecondition(GroundFormula::False.human_readable(symbols))
        })
    }
}

/// An action schema with every parameter bound to an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operator {
    schema_index: usize,
    instantiation: ObjectTuple,
    cost: OrderedFloat<f64>,
    precondition: Precondition,
    effect: GroundEffect,
}

impl Operator {
    pub fn new(
        schema_index: usize,
        instantiation: ObjectTuple,
        cost: f64,
        precondition: Precondition,
        effect: GroundEffect,
    ) -> Self {
        Self {
            schema_index,
            instantiation,
            cost: OrderedFloat(cost),
            precondition,
            effect,
        }
    }

    pub fn schema_index(&self) -> usize {
        self.schema_index
    }

    pub fn instantiation(&self) -> &[usize] {
        &self.instantiation
    }

    pub fn cost(&self) -> f64 {
        self.cost.0
    }

    pub fn precondition(&self) -> &Precondition {
        &self.precondition
    }

    pub fn effect(&self) -> &GroundEffect {
        &self.effect
    }

    #[inline(always)]
    pub fn is_applicable(&self, state: &State) -> bool {
        self.precondition.holds_in(state)
    }

    /// Applies the operator, failing if its precondition does not hold.
    pub fn apply(&self, state: &State, symbols: &SymbolTable) -> Result<State, PlanningError> {
        if !self.is_applicable(state) {
            return Err(PlanningError::PreconditionViolation {
                operator: self.human_readable(symbols),
            });
        }
        Ok(self.apply_unchecked(state))
    }

    /// Applies the effect without looking at the precondition. Quantified
    /// effects are expanded here.
    pub fn apply_unchecked(&self, state: &State) -> State {
        if self.effect.has_quantified_effects() {
            let (deletes, adds) = self.effect.expand();
            state.apply_delta(&deletes, &adds)
        } else {
            state.apply_delta(self.effect.deletes(), self.effect.adds())
        }
    }

    /// The operator in plan file syntax, e.g. `(pickTray robot trayA locTable)`.
    pub fn human_readable(&self, symbols: &SymbolTable) -> String {
        let mut text = format!("({}", symbols.action_name(self.schema_index));
        for &object in self.instantiation.iter() {
            text.push(' ');
            text.push_str(symbols.object_name(object));
        }
        text.push(')');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::object_tuple;

    fn literal(negated: bool, predicate: usize, object: usize) -> Negatable<Atom> {
        Negatable::new(negated, Atom::new(predicate, object_tuple![object]))
    }

    #[test]
    fn flattening_separates_literals_and_disjunctions() {
        let disjunction = GroundFormula::or(vec![
            GroundFormula::Literal(literal(false, 1, 0)),
            GroundFormula::Literal(literal(false, 1, 1)),
        ]);
        let precondition = Precondition::from_formula(GroundFormula::and(vec![
            GroundFormula::Literal(literal(true, 0, 2)),
            disjunction.clone(),
            GroundFormula::Literal(literal(false, 0, 1)),
            GroundFormula::Literal(literal(true, 0, 2)),
        ]));
        assert!(precondition.is_satisfiable());
        assert_eq!(
            precondition.literals(),
            &[literal(false, 0, 1), literal(true, 0, 2)]
        );
        assert_eq!(precondition.disjunctions(), &[disjunction]);
    }

    #[test]
    fn complementary_literals_are_unsatisfiable() {
        let precondition = Precondition::from_formula(GroundFormula::and(vec![
            GroundFormula::Literal(literal(false, 0, 1)),
            GroundFormula::Literal(literal(true, 0, 1)),
        ]));
        assert!(!precondition.is_satisfiable());
        assert!(!precondition.holds_in(&State::new(1)));
        assert!(!Precondition::from_formula(GroundFormula::False).is_satisfiable());
    }

    #[test]
    fn violated_precondition_names_the_static_literal() {
        let mut symbols = SymbolTable::new();
        symbols.intern_object("trayA".into());
        symbols.intern_predicate("Heavy".into(), 1).unwrap();

        let precondition = Precondition::violated("(not (Heavy trayA))".to_string());
        assert!(!precondition.is_satisfiable());
        assert!(!precondition.holds_in(&State::new(1)));
        assert_eq!(
            precondition.unmet(&State::new(1), &symbols),
            Some(FailureReason::StaticPrecondition(
                "(not (Heavy trayA))".to_string()
            ))
        );
        assert_eq!(
            Precondition::from_formula(GroundFormula::False).unmet(&State::new(1), &symbols),
            Some(FailureReason::StaticPrecondition("(or)".to_string()))
        );
    }

    #[test]
    fn holds_in_checks_every_part() {
        let precondition = Precondition::from_formula(GroundFormula::and(vec![
            GroundFormula::Literal(literal(false, 0, 0)),
            GroundFormula::Literal(literal(true, 0, 1)),
            GroundFormula::or(vec![
                GroundFormula::Literal(literal(false, 1, 0)),
                GroundFormula::Literal(literal(true, 1, 1)),
            ]),
        ]));
        let base = State::from_atoms(2, &[Atom::new(0, object_tuple![0])]);
        assert!(precondition.holds_in(&base));

        let blocked = base.apply_delta(&[], &[Atom::new(0, object_tuple![1])]);
        assert!(!precondition.holds_in(&blocked));

        let no_disjunct = base.apply_delta(&[], &[Atom::new(1, object_tuple![1])]);
        assert!(!precondition.holds_in(&no_disjunct));
    }

    #[test]
    fn applying_an_inapplicable_operator_fails() {
        let mut symbols = SymbolTable::new();
        symbols.intern_object("a".into());
        symbols
            .intern_predicate("Free".into(), 1)
            .unwrap();
        symbols.intern_action("take".into()).unwrap();

        let operator = Operator::new(
            0,
            object_tuple![0],
            1.0,
            Precondition::from_formula(GroundFormula::Literal(literal(false, 0, 0))),
            GroundEffect::new(vec![Atom::new(0, object_tuple![0])], vec![], vec![]),
        );
        let state = State::new(1);
        assert!(matches!(
            operator.apply(&state, &symbols),
            Err(PlanningError::PreconditionViolation { operator }) if operator == "(take a)"
        ));

        let ready = State::from_atoms(1, &[Atom::new(0, object_tuple![0])]);
        let next = operator.apply(&ready, &symbols).unwrap();
        assert!(next.is_empty());
        assert!(!ready.is_empty());
    }
}
