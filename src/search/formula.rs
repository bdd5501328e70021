//! Precondition formulas, before and after grounding.

use crate::search::states::State;
use crate::search::{Atom, AtomSchema, Negatable, SchemaArgument, SymbolTable};

/// A variable introduced by `forall` or `exists`. It ranges over the objects
/// satisfying any of `types`, or over every object when `types` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuantifiedVariable {
    pub slot: usize,
    pub types: Vec<usize>,
}

/// A precondition formula with variables still to be bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaSchema {
    Atom(AtomSchema),
    Not(Box<FormulaSchema>),
    And(Vec<FormulaSchema>),
    Or(Vec<FormulaSchema>),
    Imply(Box<FormulaSchema>, Box<FormulaSchema>),
    Equality(SchemaArgument, SchemaArgument),
    Forall(Vec<QuantifiedVariable>, Box<FormulaSchema>),
    Exists(Vec<QuantifiedVariable>, Box<FormulaSchema>),
}

impl FormulaSchema {
    /// The conjuncts at the top level of the formula, i.e. the formula itself
    /// unless it is a conjunction.
    pub fn conjuncts(&self) -> &[FormulaSchema] {
        match self {
            FormulaSchema::And(children) => children,
            other => std::slice::from_ref(other),
        }
    }
}

/// A quantifier-free formula over ground literals, produced by grounding a
/// [`FormulaSchema`]. Negation only appears on literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroundFormula {
    True,
    False,
    Literal(Negatable<Atom>),
    And(Vec<GroundFormula>),
    Or(Vec<GroundFormula>),
}

impl GroundFormula {
    /// Builds a conjunction, dropping `True` children, flattening nested
    /// conjunctions and collapsing to `False` if any child is `False`.
    pub fn and(children: Vec<GroundFormula>) -> Self {
        let mut flat = Vec::with_capacity(children.len());
        for child in children {
            match child {
                GroundFormula::True => {}
                GroundFormula::False => return GroundFormula::False,
                GroundFormula::And(grandchildren) => flat.extend(grandchildren),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => GroundFormula::True,
            1 => flat.pop().unwrap_or(GroundFormula::True),
            _ => GroundFormula::And(flat),
        }
    }

    /// The dual of [`GroundFormula::and`].
    pub fn or(children: Vec<GroundFormula>) -> Self {
        let mut flat = Vec::with_capacity(children.len());
        for child in children {
            match child {
                GroundFormula::False => {}
                GroundFormula::True => return GroundFormula::True,
                GroundFormula::Or(grandchildren) => flat.extend(grandchildren),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => GroundFormula::False,
            1 => flat.pop().unwrap_or(GroundFormula::False),
            _ => GroundFormula::Or(flat),
        }
    }

    pub fn holds_in(&self, state: &State) -> bool {
        match self {
            GroundFormula::True => true,
            GroundFormula::False => false,
            GroundFormula::Literal(literal) => state.satisfies(literal),
            GroundFormula::And(children) => children.iter().all(|child| child.holds_in(state)),
            GroundFormula::Or(children) => children.iter().any(|child| child.holds_in(state)),
        }
    }

    pub fn human_readable(&self, symbols: &SymbolTable) -> String {
        let join = |keyword: &str, children: &[GroundFormula]| {
            let mut text = format!("({keyword}");
            for child in children {
                text.push(' ');
                text.push_str(&child.human_readable(symbols));
            }
            text.push(')');
            text
        };
        match self {
            GroundFormula::True => "(and)".to_string(),
            GroundFormula::False => "(or)".to_string(),
            GroundFormula::Literal(literal) => literal.human_readable(symbols),
            GroundFormula::And(children) => join("and", children),
            GroundFormula::Or(children) => join("or", children),
        }
    }
}
