//! Instantiation of action schemas into ground operators.
//!
//! Every schema is instantiated over the Cartesian product of its parameter
//! domains, built one parameter at a time: a partial binding is dropped as
//! soon as a top-level static literal or equality over the parameters bound
//! so far is false. Quantified preconditions are unrolled over the objects of the
//! quantified variable's type, and every atom over a static predicate is
//! decided against the initial state, so that only literals over dynamic
//! predicates are left for the search to check.

use crate::search::utils::{for_each_admissible_assignment, for_each_assignment};
use crate::search::{
    object_tuple, ActionSchema, Atom, AtomSchema, FormulaSchema, GroundEffect, GroundFormula,
    Negatable, Operator, PlanningError, Precondition, QuantifiedEffect, QuantifiedVariable,
    SchemaArgument, Task,
};
use std::collections::{BTreeSet, HashMap};
use std::ops::{ControlFlow, Deref};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// The operators of a task in grounding order: schemas in declaration order,
/// and the bindings of each schema in lexicographic order of parameter
/// domains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundOperators {
    operators: Vec<Operator>,
}

impl GroundOperators {
    pub fn new(operators: Vec<Operator>) -> Self {
        Self { operators }
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn find(&self, schema_index: usize, instantiation: &[usize]) -> Option<&Operator> {
        self.operators.iter().find(|operator| {
            operator.schema_index() == schema_index && operator.instantiation() == instantiation
        })
    }
}

impl Deref for GroundOperators {
    type Target = [Operator];

    fn deref(&self) -> &Self::Target {
        &self.operators
    }
}

/// Grounds every schema of the task. Fails once more than `operator_cap`
/// operators would be produced.
pub fn ground(task: &Task, operator_cap: usize) -> Result<GroundOperators, PlanningError> {
    let start = Instant::now();
    let mut grounder = Grounder::new(task);
    let mut operators = vec![];
    for schema in task.action_schemas() {
        let before = operators.len();
        grounder.ground_schema(schema, operator_cap, &mut operators)?;
        debug!(
            schema = %schema.name(),
            operators = operators.len() - before,
            "grounded action schema"
        );
    }
    info!(
        operators = operators.len(),
        duration = ?start.elapsed(),
        "grounding finished"
    );
    Ok(GroundOperators::new(operators))
}

/// Grounds a single binding of a schema. Unlike [`ground`], the operator is
/// returned even if its static part is false or an argument has the wrong
/// type; its precondition is then unsatisfiable and names the first type
/// guard or static literal that fails.
pub fn ground_step(task: &Task, schema: &ActionSchema, binding: &[usize]) -> Operator {
    let mut grounder = Grounder::new(task);
    let templates = grounder.effect_templates(schema);
    match grounder.instantiate(schema, binding, &templates) {
        Some(operator) => operator,
        None => Operator::new(
            schema.index(),
            binding.iter().copied().collect(),
            schema.cost(),
            Precondition::violated(grounder.violation(schema, binding)),
            Grounder::effect(binding, &templates),
        ),
    }
}

/// Whether a conjunct accepted by [`Grounder::decidable_depth`] is false
/// under the bindings.
fn refuted(task: &Task, formula: &FormulaSchema, bindings: &[usize], positive: bool) -> bool {
    match formula {
        FormulaSchema::Atom(atom) => !task
            .initial_state()
            .satisfies(&Negatable::new(!positive, atom.ground(bindings))),
        FormulaSchema::Not(child) => refuted(task, child, bindings, !positive),
        FormulaSchema::Equality(a, b) => (a.ground(bindings) == b.ground(bindings)) != positive,
        _ => false,
    }
}

type EffectTemplate<'s> = (Vec<Arc<[usize]>>, Negatable<&'s AtomSchema>);

struct Grounder<'a> {
    task: &'a Task,
    /// Objects per set of static types.
    domains: HashMap<Vec<usize>, Arc<[usize]>>,
}

impl<'a> Grounder<'a> {
    fn new(task: &'a Task) -> Self {
        Self {
            task,
            domains: HashMap::new(),
        }
    }

    /// The objects a variable of any of the given types can denote. For a
    /// dynamic type this is the universe, and membership is left to the
    /// type guard.
    fn domain(&mut self, types: &[usize]) -> Arc<[usize]> {
        if types.is_empty() || types.iter().any(|&t| !self.task.is_static(t)) {
            return self.task.universe();
        }
        let task = self.task;
        self.domains
            .entry(types.to_vec())
            .or_insert_with(|| {
                types
                    .iter()
                    .flat_map(|&t| task.members(t))
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect()
            })
            .clone()
    }

    /// Parameter domains, narrowed by unary static atoms at the top level of
    /// the precondition.
    fn parameter_domains(&mut self, schema: &ActionSchema) -> Vec<Arc<[usize]>> {
        let mut domains: Vec<Arc<[usize]>> = schema
            .parameters()
            .iter()
            .map(|parameter| self.domain(parameter.types()))
            .collect();
        for conjunct in schema.precondition().conjuncts() {
            let FormulaSchema::Atom(atom) = conjunct else {
                continue;
            };
            let &[SchemaArgument::Free(slot)] = atom.arguments() else {
                continue;
            };
            if slot < domains.len() && self.task.is_static(atom.predicate_index()) {
                let members = self.task.members(atom.predicate_index());
                domains[slot] = domains[slot]
                    .iter()
                    .copied()
                    .filter(|object| members.binary_search(object).is_ok())
                    .collect();
            }
        }
        domains
    }

    fn effect_templates<'s>(&mut self, schema: &'s ActionSchema) -> Vec<EffectTemplate<'s>> {
        let mut templates = vec![];
        for effect in schema.effects() {
            effect.for_each_template(&mut vec![], &mut |enclosing, template| {
                let domains = enclosing
                    .iter()
                    .map(|variable| self.domain(&variable.types))
                    .collect();
                templates.push((domains, template));
            });
        }
        templates
    }

    /// Top-level conjuncts of the precondition by the number of leading
    /// parameters that have to be bound to decide them.
    fn prefix_checks<'s>(&self, schema: &'s ActionSchema) -> Vec<Vec<&'s FormulaSchema>> {
        let num_parameters = schema.parameters().len();
        let mut checks = vec![vec![]; num_parameters + 1];
        for conjunct in schema.precondition().conjuncts() {
            if let Some(depth) = self.decidable_depth(conjunct, num_parameters) {
                checks[depth].push(conjunct);
            }
        }
        checks
    }

    /// One past the highest parameter slot the formula mentions, if it is a
    /// possibly negated static atom or equality over parameters and constants.
    fn decidable_depth(&self, formula: &FormulaSchema, num_parameters: usize) -> Option<usize> {
        let depth = |arguments: &[SchemaArgument]| {
            arguments
                .iter()
                .try_fold(0, |deepest, argument| match *argument {
                    SchemaArgument::Constant(_) => Some(deepest),
                    SchemaArgument::Free(slot) if slot < num_parameters => {
                        Some(deepest.max(slot + 1))
                    }
                    SchemaArgument::Free(_) => None,
                })
        };
        match formula {
            FormulaSchema::Atom(atom) if self.task.is_static(atom.predicate_index()) => {
                depth(atom.arguments())
            }
            FormulaSchema::Not(child) => self.decidable_depth(child, num_parameters),
            FormulaSchema::Equality(a, b) => depth(&[*a, *b]),
            _ => None,
        }
    }

    fn ground_schema(
        &mut self,
        schema: &ActionSchema,
        operator_cap: usize,
        operators: &mut Vec<Operator>,
    ) -> Result<(), PlanningError> {
        let domains = self.parameter_domains(schema);
        let templates = self.effect_templates(schema);
        let domains: Vec<&[usize]> = domains.iter().map(|domain| &domain[..]).collect();
        let checks = self.prefix_checks(schema);
        let task = self.task;
        if checks[0].iter().any(|conjunct| refuted(task, conjunct, &[], true)) {
            return Ok(());
        }

        let flow = for_each_admissible_assignment(
            &domains,
            |prefix| {
                !checks[prefix.len()]
                    .iter()
                    .any(|conjunct| refuted(task, conjunct, prefix, true))
            },
            |binding| {
                let Some(operator) = self.instantiate(schema, binding, &templates) else {
                    return ControlFlow::Continue(());
                };
                if !operator.precondition().is_satisfiable() {
                    return ControlFlow::Continue(());
                }
                if operators.len() == operator_cap {
                    return ControlFlow::Break(());
                }
                operators.push(operator);
                ControlFlow::Continue(())
            },
        );

        if flow.is_break() {
            return Err(PlanningError::GroundingOverflow {
                cap: operator_cap,
                schema: **schema.name(),
            });
        }
        Ok(())
    }

    /// The operator for the binding, or `None` if its static part is false.
    fn instantiate(
        &mut self,
        schema: &ActionSchema,
        binding: &[usize],
        templates: &[EffectTemplate<'_>],
    ) -> Option<Operator> {
        let mut conjuncts: Vec<GroundFormula> = schema
            .parameters()
            .iter()
            .zip(binding)
            .map(|(parameter, &object)| self.type_guard(parameter.types(), object, true))
            .collect();
        let mut bindings = binding.to_vec();
        conjuncts.push(self.formula(schema.precondition(), &mut bindings, true));
        let precondition = GroundFormula::and(conjuncts);
        if precondition == GroundFormula::False {
            return None;
        }

        Some(Operator::new(
            schema.index(),
            binding.iter().copied().collect(),
            schema.cost(),
            Precondition::from_formula(precondition),
            Self::effect(binding, templates),
        ))
    }

    /// The first type guard or static part of the precondition that is false
    /// under a binding [`Grounder::instantiate`] rejected.
    fn violation(&mut self, schema: &ActionSchema, binding: &[usize]) -> String {
        for (parameter, &object) in schema.parameters().iter().zip(binding) {
            if self.type_guard(parameter.types(), object, true) == GroundFormula::False {
                return self.guard_text(parameter.types(), object);
            }
        }
        let task = self.task;
        let mut bindings = binding.to_vec();
        self.first_false(schema.precondition(), &mut bindings, true)
            .unwrap_or_else(|| GroundFormula::False.human_readable(task.symbols()))
    }

    fn guard_text(&self, types: &[usize], object: usize) -> String {
        let mut guards: Vec<GroundFormula> = types
            .iter()
            .map(|&t| {
                GroundFormula::Literal(Negatable::Positive(Atom::new(t, object_tuple![object])))
            })
            .collect();
        let guard = if guards.len() == 1 {
            guards.remove(0)
        } else {
            GroundFormula::Or(guards)
        };
        guard.human_readable(self.task.symbols())
    }

    /// Renders the first part of the formula that is false in every state, in
    /// the same negation normal form [`Grounder::formula`] grounds it in.
    fn first_false(
        &mut self,
        formula: &FormulaSchema,
        bindings: &mut Vec<usize>,
        positive: bool,
    ) -> Option<String> {
        let task = self.task;
        let symbols = task.symbols();
        let (conjunctive, parts): (bool, Vec<(&FormulaSchema, bool)>) = match formula {
            FormulaSchema::Atom(atom) => {
                let literal = Negatable::new(!positive, atom.ground(bindings));
                return (self.literal(literal.clone()) == GroundFormula::False)
                    .then(|| literal.human_readable(symbols));
            }
            FormulaSchema::Not(child) => return self.first_false(child, bindings, !positive),
            FormulaSchema::Equality(a, b) => {
                let (a, b) = (a.ground(bindings), b.ground(bindings));
                if (a == b) == positive {
                    return None;
                }
                let equality = format!(
                    "(= {} {})",
                    symbols.object_name(a),
                    symbols.object_name(b)
                );
                return Some(if positive {
                    equality
                } else {
                    format!("(not {equality})")
                });
            }
            FormulaSchema::And(children) | FormulaSchema::Or(children) => (
                matches!(formula, FormulaSchema::And(_)) == positive,
                children.iter().map(|child| (child, positive)).collect(),
            ),
            FormulaSchema::Imply(antecedent, consequent) => (
                !positive,
                vec![(&**antecedent, !positive), (&**consequent, positive)],
            ),
            FormulaSchema::Forall(variables, body) | FormulaSchema::Exists(variables, body) => {
                let conjunctive = matches!(formula, FormulaSchema::Forall(..)) == positive;
                return self
                    .first_false_instance(variables, body, bindings, positive, conjunctive);
            }
        };

        if conjunctive {
            return parts
                .into_iter()
                .find_map(|(part, positive)| self.first_false(part, bindings, positive));
        }
        let failures = parts
            .into_iter()
            .map(|(part, positive)| self.first_false(part, bindings, positive))
            .collect::<Option<Vec<_>>>()?;
        Some(disjunction_text(failures))
    }

    /// [`Grounder::first_false`] for a quantifier: the first false instance
    /// of a universal, or every instance of an existential that has no
    /// witness.
    fn first_false_instance(
        &mut self,
        variables: &[QuantifiedVariable],
        body: &FormulaSchema,
        bindings: &mut Vec<usize>,
        positive: bool,
        conjunctive: bool,
    ) -> Option<String> {
        let depth = bindings.len();
        let domains: Vec<Arc<[usize]>> = variables
            .iter()
            .map(|variable| self.domain(&variable.types))
            .collect();
        let domains: Vec<&[usize]> = domains.iter().map(|domain| &domain[..]).collect();

        let mut failures = vec![];
        let flow = for_each_assignment(&domains, |assignment| {
            bindings.truncate(depth);
            bindings.extend_from_slice(assignment);
            let mut guards = variables
                .iter()
                .zip(assignment)
                .map(|(variable, &object)| {
                    (self.type_guard(&variable.types, object, true), variable, object)
                });
            if conjunctive {
                if guards.all(|(guard, _, _)| guard == GroundFormula::True) {
                    if let Some(failure) = self.first_false(body, bindings, positive) {
                        failures.push(failure);
                        return ControlFlow::Break(());
                    }
                }
                return ControlFlow::Continue(());
            }
            let failure = match guards.find(|(guard, _, _)| *guard == GroundFormula::False) {
                Some((_, variable, object)) => Some(self.guard_text(&variable.types, object)),
                None => self.first_false(body, bindings, positive),
            };
            match failure {
                Some(failure) => {
                    failures.push(failure);
                    ControlFlow::Continue(())
                }
                None => ControlFlow::Break(()),
            }
        });
        bindings.truncate(depth);

        match (conjunctive, flow.is_break()) {
            (true, true) => failures.pop(),
            (false, false) => Some(disjunction_text(failures)),
            _ => None,
        }
    }

    fn effect(binding: &[usize], templates: &[EffectTemplate<'_>]) -> GroundEffect {
        let mut deletes = vec![];
        let mut adds = vec![];
        let mut quantified = vec![];
        for (domains, template) in templates {
            if domains.is_empty() {
                let atom = template.underlying().ground(binding);
                if template.is_negated() {
                    deletes.push(atom);
                } else {
                    adds.push(atom);
                }
            } else {
                quantified.push(QuantifiedEffect::new(
                    domains.clone(),
                    vec![template.map(|schema| schema.partially_ground(binding))],
                ));
            }
        }
        deletes.sort();
        deletes.dedup();
        adds.sort();
        adds.dedup();
        GroundEffect::new(deletes, adds, quantified)
    }

    /// A literal, or its truth value if the predicate is static.
    fn literal(&self, literal: Negatable<Atom>) -> GroundFormula {
        if self.task.is_static(literal.predicate_index()) {
            if self.task.initial_state().satisfies(&literal) {
                GroundFormula::True
            } else {
                GroundFormula::False
            }
        } else {
            GroundFormula::Literal(literal)
        }
    }

    /// Whether the object has any of the types, or with `positive` unset,
    /// whether it has none of them.
    fn type_guard(&self, types: &[usize], object: usize, positive: bool) -> GroundFormula {
        if types.is_empty() {
            return if positive {
                GroundFormula::True
            } else {
                GroundFormula::False
            };
        }
        let literals = types
            .iter()
            .map(|&t| {
                self.literal(Negatable::new(
                    !positive,
                    Atom::new(t, [object].into_iter().collect()),
                ))
            })
            .collect();
        if positive {
            GroundFormula::or(literals)
        } else {
            GroundFormula::and(literals)
        }
    }

    /// Grounds the formula under the current bindings, in negation normal
    /// form: with `positive` unset the negation of the formula is produced.
    fn formula(
        &mut self,
        formula: &FormulaSchema,
        bindings: &mut Vec<usize>,
        positive: bool,
    ) -> GroundFormula {
        let connective = |conjunctive: bool, parts: Vec<GroundFormula>| {
            if conjunctive {
                GroundFormula::and(parts)
            } else {
                GroundFormula::or(parts)
            }
        };
        match formula {
            FormulaSchema::Atom(atom) => {
                self.literal(Negatable::new(!positive, atom.ground(bindings)))
            }
            FormulaSchema::Not(child) => self.formula(child, bindings, !positive),
            FormulaSchema::And(children) | FormulaSchema::Or(children) => {
                let conjunctive = matches!(formula, FormulaSchema::And(_)) == positive;
                let parts = children
                    .iter()
                    .map(|child| self.formula(child, bindings, positive))
                    .collect();
                connective(conjunctive, parts)
            }
            FormulaSchema::Imply(antecedent, consequent) => {
                let parts = vec![
                    self.formula(antecedent, bindings, !positive),
                    self.formula(consequent, bindings, positive),
                ];
                connective(!positive, parts)
            }
            FormulaSchema::Equality(a, b) => {
                if (a.ground(bindings) == b.ground(bindings)) == positive {
                    GroundFormula::True
                } else {
                    GroundFormula::False
                }
            }
            FormulaSchema::Forall(variables, body) | FormulaSchema::Exists(variables, body) => {
                let conjunctive = matches!(formula, FormulaSchema::Forall(..)) == positive;
                connective(
                    conjunctive,
                    self.quantified(variables, body, bindings, positive, conjunctive),
                )
            }
        }
    }

    /// One part per assignment to the quantified variables. In a conjunction
    /// the parts are `guard -> body`, in a disjunction `guard and body`.
    fn quantified(
        &mut self,
        variables: &[QuantifiedVariable],
        body: &FormulaSchema,
        bindings: &mut Vec<usize>,
        positive: bool,
        conjunctive: bool,
    ) -> Vec<GroundFormula> {
        let depth = bindings.len();
        debug_assert!(variables.first().map_or(true, |v| v.slot == depth));
        let domains: Vec<Arc<[usize]>> = variables
            .iter()
            .map(|variable| self.domain(&variable.types))
            .collect();
        let domains: Vec<&[usize]> = domains.iter().map(|domain| &domain[..]).collect();

        let mut parts = vec![];
        let _ = for_each_assignment(&domains, |assignment| {
            bindings.truncate(depth);
            bindings.extend_from_slice(assignment);
            let mut part: Vec<GroundFormula> = variables
                .iter()
                .zip(assignment)
                .map(|(variable, &object)| self.type_guard(&variable.types, object, !conjunctive))
                .collect();
            part.push(self.formula(body, bindings, positive));
            parts.push(if conjunctive {
                GroundFormula::or(part)
            } else {
                GroundFormula::and(part)
            });
            ControlFlow::Continue(())
        });
        bindings.truncate(depth);
        parts
    }
}

fn disjunction_text(mut parts: Vec<String>) -> String {
    match parts.len() {
        0 => "(or)".to_string(),
        1 => parts.remove(0),
        _ => format!("(or {})", parts.join(" ")),
    }
}
