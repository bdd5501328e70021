//! Action effects, before and after grounding.

use crate::search::utils::for_each_assignment;
use crate::search::{Atom, AtomSchema, Negatable, QuantifiedVariable};
use std::ops::ControlFlow;
use std::sync::Arc;

/// An effect with variables still to be bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectSchema {
    Add(AtomSchema),
    Delete(AtomSchema),
    Forall(Vec<QuantifiedVariable>, Vec<EffectSchema>),
}

impl EffectSchema {
    /// Visits every add and delete template together with the quantified
    /// variables enclosing it, outermost first.
    pub fn for_each_template<'a, F>(&'a self, enclosing: &mut Vec<&'a QuantifiedVariable>, f: &mut F)
    where
        F: FnMut(&[&'a QuantifiedVariable], Negatable<&'a AtomSchema>),
    {
        match self {
            EffectSchema::Add(schema) => f(enclosing, Negatable::Positive(schema)),
            EffectSchema::Delete(schema) => f(enclosing, Negatable::Negative(schema)),
            EffectSchema::Forall(variables, effects) => {
                let depth = enclosing.len();
                enclosing.extend(variables.iter());
                for effect in effects {
                    effect.for_each_template(enclosing, f);
                }
                enclosing.truncate(depth);
            }
        }
    }
}

/// A universally quantified effect of a ground operator. The operator
/// parameters are already substituted into the templates; the remaining free
/// slots index `domains`. The templates are expanded whenever the operator is
/// applied, over every object of the right type, whether or not the matching
/// atoms currently hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuantifiedEffect {
    domains: Vec<Arc<[usize]>>,
    templates: Vec<Negatable<AtomSchema>>,
}

impl QuantifiedEffect {
    pub fn new(domains: Vec<Arc<[usize]>>, templates: Vec<Negatable<AtomSchema>>) -> Self {
        Self { domains, templates }
    }

    pub fn num_variables(&self) -> usize {
        self.domains.len()
    }

    pub fn for_each_literal<F: FnMut(Negatable<Atom>)>(&self, mut f: F) {
        let domains: Vec<&[usize]> = self.domains.iter().map(|domain| &domain[..]).collect();
        let _ = for_each_assignment(&domains, |assignment| {
            for template in &self.templates {
                f(Negatable::new(
                    template.is_negated(),
                    template.underlying().ground(assignment),
                ));
            }
            ControlFlow::Continue(())
        });
    }
}

/// The effect of a ground operator: explicit deletes and adds plus the
/// quantified effects still to be expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GroundEffect {
    deletes: Vec<Atom>,
    adds: Vec<Atom>,
    quantified: Vec<QuantifiedEffect>,
}

impl GroundEffect {
    pub fn new(deletes: Vec<Atom>, adds: Vec<Atom>, quantified: Vec<QuantifiedEffect>) -> Self {
        Self {
            deletes,
            adds,
            quantified,
        }
    }

    pub fn deletes(&self) -> &[Atom] {
        &self.deletes
    }

    pub fn adds(&self) -> &[Atom] {
        &self.adds
    }

    pub fn quantified(&self) -> &[QuantifiedEffect] {
        &self.quantified
    }

    pub fn has_quantified_effects(&self) -> bool {
        !self.quantified.is_empty()
    }

    /// The complete delete and add lists with quantified effects expanded.
    pub fn expand(&self) -> (Vec<Atom>, Vec<Atom>) {
        let mut deletes = self.deletes.clone();
        let mut adds = self.adds.clone();
        for effect in &self.quantified {
            effect.for_each_literal(|literal| match literal {
                Negatable::Positive(atom) => adds.push(atom),
                Negatable::Negative(atom) => deletes.push(atom),
            });
        }
        (deletes, adds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{object_tuple, SchemaArgument};

    #[test]
    fn quantified_delete_expands_over_the_domain() {
        // (forall (?l ?x) (not (Obstructs ?l 2 ?x))) over objects {0, 1} x {3, 4}
        let template = AtomSchema::new(
            5,
            vec![
                SchemaArgument::Free(0),
                SchemaArgument::Constant(2),
                SchemaArgument::Free(1),
            ],
        );
        let effect = QuantifiedEffect::new(
            vec![Arc::from(vec![0, 1]), Arc::from(vec![3, 4])],
            vec![Negatable::Negative(template)],
        );
        let ground = GroundEffect::new(vec![], vec![Atom::new(1, object_tuple![2])], vec![effect]);

        let (deletes, adds) = ground.expand();
        assert_eq!(adds, vec![Atom::new(1, object_tuple![2])]);
        assert_eq!(
            deletes,
            vec![
                Atom::new(5, object_tuple![0, 2, 3]),
                Atom::new(5, object_tuple![0, 2, 4]),
                Atom::new(5, object_tuple![1, 2, 3]),
                Atom::new(5, object_tuple![1, 2, 4]),
            ]
        );
    }

    #[test]
    fn templates_report_enclosing_variables() {
        let inner = EffectSchema::Forall(
            vec![QuantifiedVariable {
                slot: 2,
                types: vec![],
            }],
            vec![EffectSchema::Delete(AtomSchema::new(
                0,
                vec![SchemaArgument::Free(1), SchemaArgument::Free(2)],
            ))],
        );
        let outer = EffectSchema::Forall(
            vec![QuantifiedVariable {
                slot: 1,
                types: vec![],
            }],
            vec![
                EffectSchema::Add(AtomSchema::new(1, vec![SchemaArgument::Free(1)])),
                inner,
            ],
        );
        let mut depths = vec![];
        outer.for_each_template(&mut vec![], &mut |enclosing, template| {
            depths.push((enclosing.len(), template.is_negated()))
        });
        assert_eq!(depths, vec![(1, false), (2, true)]);
    }
}
