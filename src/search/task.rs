use crate::parsed_types::{Domain, Name, NameLiteral, Problem, Type, OBJECT_TYPE_NAME};
use crate::parsers::{describe_error, Parser};
use crate::search::states::State;
use crate::search::{ActionSchema, Atom, Goal, Negatable, SymbolTable, TaskError};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// A problem instance resolved against its domain: the symbol table, the
/// lowered action schemas, the initial state and the goal.
#[derive(Debug, Clone)]
pub struct Task {
    domain_name: Name,
    problem_name: Name,
    symbols: SymbolTable,
    action_schemas: Vec<ActionSchema>,
    initial_state: State,
    goal: Goal,
    universe: Arc<[usize]>,
}

impl Task {
    pub fn from_path(domain_path: &Path, problem_path: &Path) -> Result<Self, TaskError> {
        let read = |path: &Path| {
            fs::read_to_string(path).map_err(|source| TaskError::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        Self::from_text(&read(domain_path)?, &read(problem_path)?)
    }

    pub fn from_text(domain_text: &str, problem_text: &str) -> Result<Self, TaskError> {
        let domain = Domain::from_str(domain_text).map_err(|e| TaskError::Parse {
            what: "domain",
            message: describe_error(domain_text, &e),
        })?;
        let problem = Problem::from_str(problem_text).map_err(|e| TaskError::Parse {
            what: "problem",
            message: describe_error(problem_text, &e),
        })?;
        Self::new(&domain, &problem)
    }

    pub fn new(domain: &Domain, problem: &Problem) -> Result<Self, TaskError> {
        if domain.name() != problem.domain() {
            return Err(TaskError::DomainMismatch {
                domain: *domain.name(),
                problem_domain: *problem.domain(),
            });
        }

        let mut symbols = SymbolTable::new();
        for predicate in domain.predicates() {
            symbols.intern_predicate(*predicate.name(), predicate.arity())?;
        }

        // declared types are unary predicates, linked to their supertypes
        let mut supertypes: HashMap<usize, Vec<usize>> = HashMap::new();
        for declaration in domain.types().iter() {
            if *declaration.value() == OBJECT_TYPE_NAME {
                continue;
            }
            let index = symbols.intern_predicate(*declaration.value(), 1)?;
            for parent in declaration.type_().primitives() {
                if parent.is_object() {
                    continue;
                }
                let parent = symbols.intern_predicate(*parent.name(), 1)?;
                supertypes.entry(index).or_default().push(parent);
            }
        }

        let declarations: Vec<_> = problem
            .objects()
            .iter()
            .chain(domain.constants().iter())
            .collect();
        for declaration in &declarations {
            symbols.intern_object(*declaration.value());
        }

        let mut facts = vec![];
        for declaration in &declarations {
            let object = symbols.object_index(declaration.value())?;
            let type_ = match declaration.type_() {
                Type::EitherOf(options) if options.len() > 1 => {
                    return Err(TaskError::AmbiguousObjectType {
                        object: *declaration.value(),
                    })
                }
                other if other.is_unconstrained() => continue,
                other => other,
            };
            for primitive in type_.primitives() {
                let predicate = symbols
                    .predicate_index(primitive.name(), 1)
                    .map_err(|_| TaskError::UnknownType(*primitive.name()))?;
                Self::add_type_facts(object, predicate, &supertypes, &mut facts);
            }
        }

        let mut action_schemas = Vec::with_capacity(domain.actions().len());
        for action in domain.actions() {
            let index = symbols.intern_action(**action.name())?;
            action_schemas.push(ActionSchema::new(index, action, &symbols)?);
        }

        for index in 0..symbols.num_predicates() {
            if !action_schemas.iter().any(|schema| schema.affects(index)) {
                symbols.predicates_mut()[index].mark_as_static();
            }
        }
        Self::check_quantified_effect_types(&action_schemas, &symbols)?;

        let mut denied = HashSet::new();
        for literal in problem.init() {
            match Negatable::<Atom>::from_parsed(literal, &symbols)? {
                Negatable::Positive(atom) => facts.push(atom),
                Negatable::Negative(atom) => {
                    denied.insert(atom);
                }
            }
        }
        if let Some(atom) = facts.iter().find(|atom| denied.contains(*atom)) {
            return Err(TaskError::ContradictoryInitialLiteral(
                atom.human_readable(&symbols),
            ));
        }
        let initial_state = State::from_atoms(symbols.num_predicates(), &facts);
        let goal = Goal::new(problem.goals(), &symbols)?;
        let universe: Arc<[usize]> = (0..symbols.num_objects()).collect();

        info!(
            objects = symbols.num_objects(),
            predicates = symbols.num_predicates(),
            actions = action_schemas.len(),
            initial_atoms = initial_state.len(),
            "task loaded"
        );

        Ok(Self {
            domain_name: *domain.name(),
            problem_name: *problem.name(),
            symbols,
            action_schemas,
            initial_state,
            goal,
            universe,
        })
    }

    fn add_type_facts(
        object: usize,
        predicate: usize,
        supertypes: &HashMap<usize, Vec<usize>>,
        facts: &mut Vec<Atom>,
    ) {
        let mut seen = HashSet::new();
        let mut pending = vec![predicate];
        while let Some(predicate) = pending.pop() {
            if !seen.insert(predicate) {
                continue;
            }
            facts.push(Atom::new(predicate, [object].into_iter().collect()));
            if let Some(parents) = supertypes.get(&predicate) {
                pending.extend(parents.iter().copied());
            }
        }
    }

    /// Quantified effects are expanded over a domain fixed at grounding time,
    /// so the types of their variables must not change during search.
    fn check_quantified_effect_types(
        action_schemas: &[ActionSchema],
        symbols: &SymbolTable,
    ) -> Result<(), TaskError> {
        for schema in action_schemas {
            let mut dynamic_type = None;
            for effect in schema.effects() {
                effect.for_each_template(&mut vec![], &mut |enclosing, _| {
                    for variable in enclosing {
                        if let Some(&type_) = variable
                            .types
                            .iter()
                            .find(|&&type_| !symbols.predicate(type_).is_static)
                        {
                            dynamic_type.get_or_insert(type_);
                        }
                    }
                });
            }
            if let Some(type_) = dynamic_type {
                return Err(TaskError::DynamicQuantifiedEffectType {
                    action: **schema.name(),
                    type_name: symbols.predicate(type_).name,
                });
            }
        }
        Ok(())
    }

    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    pub fn problem_name(&self) -> &str {
        &self.problem_name
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn action_schemas(&self) -> &[ActionSchema] {
        &self.action_schemas
    }

    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    /// Every object index, in interning order.
    pub fn universe(&self) -> Arc<[usize]> {
        self.universe.clone()
    }

    pub fn is_static(&self, predicate_index: usize) -> bool {
        self.symbols.predicate(predicate_index).is_static
    }

    pub fn static_predicates(&self) -> HashSet<usize> {
        self.symbols
            .predicates()
            .iter()
            .filter(|predicate| predicate.is_static)
            .map(|predicate| predicate.index)
            .collect()
    }

    /// The objects `o` with `(p o)` in the initial state, in ascending order.
    /// Only meaningful as a fixed set when `p` is static.
    pub fn members(&self, unary_predicate: usize) -> Vec<usize> {
        self.initial_state
            .relation(unary_predicate)
            .tuples
            .iter()
            .filter_map(|tuple| tuple.first().copied())
            .collect()
    }

    /// The same task started from another state, e.g. one taken from the
    /// trace of a validated plan.
    /// Fails if the state was built for a task with other predicates.
    pub fn with_initial_state(&self, state: State) -> Result<Self, TaskError> {
        if state.num_predicates() != self.symbols.num_predicates() {
            return Err(TaskError::StateMismatch {
                expected: self.symbols.num_predicates(),
                found: state.num_predicates(),
            });
        }
        Ok(Self {
            initial_state: state,
            ..self.clone()
        })
    }

    /// Adds the positive and removes the negative literals from the initial
    /// state.
    pub fn patch_initial_state(&self, literals: &[NameLiteral]) -> Result<Self, TaskError> {
        let mut adds = vec![];
        let mut deletes = vec![];
        for literal in literals {
            let literal = Negatable::<Atom>::from_parsed(literal, &self.symbols)?;
            let predicate = self.symbols.predicate(literal.predicate_index());
            if predicate.is_static {
                return Err(TaskError::StaticPatch(predicate.name));
            }
            match literal {
                Negatable::Positive(atom) => adds.push(atom),
                Negatable::Negative(atom) => deletes.push(atom),
            }
        }
        self.with_initial_state(self.initial_state.apply_delta(&deletes, &adds))
    }

    /// Removes every dynamic initial atom that has the object as an argument.
    pub fn purge_facts_mentioning(&self, object: &Name) -> Result<Self, TaskError> {
        let object = self.symbols.object_index(object)?;
        let deletes: Vec<Atom> = self
            .initial_state
            .atoms()
            .filter(|atom| !self.is_static(atom.predicate_index()) && atom.mentions(object))
            .collect();
        if deletes.is_empty() {
            warn!(
                object = %self.symbols.object_name(object),
                "no dynamic initial fact mentions object"
            );
        }
        self.with_initial_state(self.initial_state.apply_delta(&deletes, &[]))
    }
}
