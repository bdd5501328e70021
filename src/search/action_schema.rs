//! Action schemas and the lowering of parsed action definitions into them.

use crate::parsed_types::{
    ActionDefinition, ActionName, Atom as ParsedAtom, Name, PropCondition, PropEffect, Term,
    Type, TypedVariables,
};
use crate::search::{
    AtomSchema, EffectSchema, FormulaSchema, QuantifiedVariable, SchemaArgument, SymbolTable,
    TaskError,
};

/// A parameter of an action schema. `types` lists the type predicates any of
/// which the bound object has to satisfy; it is empty for untyped parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaParameter {
    index: usize,
    name: Name,
    types: Vec<usize>,
}

impl SchemaParameter {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn types(&self) -> &[usize] {
        &self.types
    }
}

#[derive(Debug, Clone)]
pub struct ActionSchema {
    name: ActionName,
    index: usize,
    parameters: Vec<SchemaParameter>,
    precondition: FormulaSchema,
    effects: Vec<EffectSchema>,
    cost: f64,
}

impl ActionSchema {
    pub fn new(
        index: usize,
        action_definition: &ActionDefinition,
        symbols: &SymbolTable,
    ) -> Result<Self, TaskError> {
        let mut lowering = Lowering::new(symbols, **action_definition.name());

        let mut parameters = Vec::with_capacity(action_definition.parameters().len());
        for (index, parameter) in action_definition.parameters().iter().enumerate() {
            let name = *parameter.value().name();
            parameters.push(SchemaParameter {
                index,
                name,
                types: lowering.type_predicates(parameter.type_())?,
            });
            lowering.scope.push(name);
        }

        let precondition = FormulaSchema::And(
            action_definition
                .preconditions()
                .iter()
                .map(|condition| lowering.condition(condition))
                .collect::<Result<_, _>>()?,
        );
        let effects = action_definition
            .effects()
            .iter()
            .map(|effect| lowering.effect(effect))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            name: *action_definition.name(),
            index,
            parameters,
            precondition,
            effects,
            cost: action_definition.cost(),
        })
    }

    pub fn name(&self) -> &ActionName {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn parameters(&self) -> &[SchemaParameter] {
        &self.parameters
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn precondition(&self) -> &FormulaSchema {
        &self.precondition
    }

    pub fn effects(&self) -> &[EffectSchema] {
        &self.effects
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Whether any effect, including quantified ones, mentions the predicate.
    pub fn affects(&self, predicate_index: usize) -> bool {
        let mut found = false;
        for effect in &self.effects {
            effect.for_each_template(&mut vec![], &mut |_, template| {
                found |= template.underlying().predicate_index() == predicate_index
            });
        }
        found
    }
}

/// Resolves names and variables of a single action definition. Variables
/// are numbered by their position in `scope`.
struct Lowering<'a> {
    symbols: &'a SymbolTable,
    action: Name,
    scope: Vec<Name>,
}

impl<'a> Lowering<'a> {
    fn new(symbols: &'a SymbolTable, action: Name) -> Self {
        Self {
            symbols,
            action,
            scope: vec![],
        }
    }

    fn type_predicates(&self, r#type: &Type) -> Result<Vec<usize>, TaskError> {
        if r#type.is_unconstrained() {
            return Ok(vec![]);
        }
        r#type
            .primitives()
            .iter()
            .map(|primitive| {
                self.symbols
                    .predicate_index(primitive.name(), 1)
                    .map_err(|_| TaskError::UnknownType(*primitive.name()))
            })
            .collect()
    }

    fn argument(&self, term: &Term) -> Result<SchemaArgument, TaskError> {
        match term {
            Term::Name(name) => Ok(SchemaArgument::Constant(self.symbols.object_index(name)?)),
            Term::Variable(variable) => self
                .scope
                .iter()
                .rposition(|bound| bound == variable.name())
                .map(SchemaArgument::Free)
                .ok_or(TaskError::UnboundVariable {
                    action: self.action,
                    variable: *variable.name(),
                }),
        }
    }

    fn atom(&self, atom: &ParsedAtom<Term>) -> Result<AtomSchema, TaskError> {
        let predicate_index = self
            .symbols
            .predicate_index(atom.predicate_name(), atom.len())?;
        let arguments = atom
            .values()
            .iter()
            .map(|term| self.argument(term))
            .collect::<Result<_, _>>()?;
        Ok(AtomSchema::new(predicate_index, arguments))
    }

    /// Brings the variables into scope. The caller truncates the scope once
    /// the quantified body has been lowered.
    fn bind(&mut self, variables: &TypedVariables) -> Result<Vec<QuantifiedVariable>, TaskError> {
        let mut bound = Vec::with_capacity(variables.len());
        for variable in variables.iter() {
            bound.push(QuantifiedVariable {
                slot: self.scope.len(),
                types: self.type_predicates(variable.type_())?,
            });
            self.scope.push(*variable.value().name());
        }
        Ok(bound)
    }

    fn condition(&mut self, condition: &PropCondition) -> Result<FormulaSchema, TaskError> {
        Ok(match condition {
            PropCondition::Atom(atom) => FormulaSchema::Atom(self.atom(atom)?),
            PropCondition::And(children) => FormulaSchema::And(
                children
                    .iter()
                    .map(|child| self.condition(child))
                    .collect::<Result<_, _>>()?,
            ),
            PropCondition::Or(children) => FormulaSchema::Or(
                children
                    .iter()
                    .map(|child| self.condition(child))
                    .collect::<Result<_, _>>()?,
            ),
            PropCondition::Not(child) => FormulaSchema::Not(Box::new(self.condition(child)?)),
            PropCondition::Imply(antecedent, consequent) => FormulaSchema::Imply(
                Box::new(self.condition(antecedent)?),
                Box::new(self.condition(consequent)?),
            ),
            PropCondition::Equality(a, b) => {
                FormulaSchema::Equality(self.argument(a)?, self.argument(b)?)
            }
            PropCondition::Forall(variables, body) => {
                let depth = self.scope.len();
                let bound = self.bind(variables)?;
                let body = self.condition(body);
                self.scope.truncate(depth);
                FormulaSchema::Forall(bound, Box::new(body?))
            }
            PropCondition::Exists(variables, body) => {
                let depth = self.scope.len();
                let bound = self.bind(variables)?;
                let body = self.condition(body);
                self.scope.truncate(depth);
                FormulaSchema::Exists(bound, Box::new(body?))
            }
        })
    }

    fn effect(&mut self, effect: &PropEffect) -> Result<EffectSchema, TaskError> {
        Ok(match effect {
            PropEffect::Add(atom) => EffectSchema::Add(self.atom(atom)?),
            PropEffect::Delete(atom) => EffectSchema::Delete(self.atom(atom)?),
            PropEffect::Forall(variables, effects) => {
                let depth = self.scope.len();
                let bound = self.bind(variables)?;
                let effects = effects
                    .iter()
                    .map(|effect| self.effect(effect))
                    .collect::<Result<Vec<_>, _>>();
                self.scope.truncate(depth);
                EffectSchema::Forall(bound, effects?)
            }
        })
    }
}
