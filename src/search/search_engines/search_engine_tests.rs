use crate::parsed_types::Name;
use crate::search::search_engines::{CancellationToken, SearchEngine, SearchStrategy, TerminationCondition};
use crate::search::successor_generators::SuccessorGeneratorName;
use crate::search::states::State;
use crate::search::{
    ground, search, validate, Atom, GroundOperators, Heuristic, HeuristicValue, Plan,
    PlanningError, StateHeuristicNames, Task,
};
use crate::test_utils::*;
use assert_approx_eq::assert_approx_eq;
use ordered_float::OrderedFloat;
use std::cell::Cell;
use std::rc::Rc;
use strum::IntoEnumIterator;

const ROADS_DOMAIN_TEXT: &str = "(define (domain roads)
    (:predicates (at ?x) (road ?a ?b))
    (:action fly
        :parameters (?a ?b)
        :precondition (at ?a)
        :effect (and (at ?b) (not (at ?a)))
        :cost 10)
    (:action drive
        :parameters (?a ?b)
        :precondition (and (at ?a) (road ?a ?b))
        :effect (and (at ?b) (not (at ?a)))
        :cost 1))";

const ROADS_PROBLEM_TEXT: &str = "(define (problem commute) (:domain roads)
    (:objects home mid work)
    (:init (at home) (road home mid) (road mid work))
    (:goal (at work)))";

fn setup(domain: &str, problem: &str) -> (Task, GroundOperators) {
    let task = Task::from_text(domain, problem).unwrap();
    let operators = ground(&task, 100_000).unwrap();
    (task, operators)
}

fn plan_names(task: &Task, plan: &Plan) -> Vec<String> {
    plan.iter()
        .map(|operator| operator.human_readable(task.symbols()))
        .collect()
}

fn atom(task: &Task, predicate: &str, arguments: &[&str]) -> Atom {
    let symbols = task.symbols();
    Atom::new(
        symbols.find_predicate(&Name::from(predicate)).unwrap(),
        arguments
            .iter()
            .map(|name| symbols.object_index(&Name::from(*name)).unwrap())
            .collect(),
    )
}

#[test]
fn light_tray_is_picked_up_directly() {
    let (task, operators) = setup(DINNER_DOMAIN_TEXT, DINNER_SINGLE_PICK_PROBLEM_TEXT);
    for strategy in SearchStrategy::iter() {
        let plan = search(&task, &operators, strategy, None, None).unwrap();
        assert_eq!(
            plan_names(&task, &plan),
            vec!["(pickTray robot trayA locTable)".to_string()],
            "{strategy}"
        );
    }
}

#[test]
fn heavy_tray_has_no_plan() {
    let (task, operators) = setup(DINNER_DOMAIN_TEXT, DINNER_HEAVY_TRAY_PROBLEM_TEXT);
    for strategy in SearchStrategy::iter() {
        assert!(matches!(
            search(&task, &operators, strategy, None, None),
            Err(PlanningError::PlanNotFound)
        ));
    }
}

#[test]
fn obstructed_object_cannot_be_grasped() {
    let (task, operators) = setup(DINNER_DOMAIN_TEXT, DINNER_OBSTRUCTED_PROBLEM_TEXT);
    let symbols = task.symbols();
    let object = |name: &str| symbols.object_index(&Name::from(name)).unwrap();
    let grasp = symbols.action_index(&Name::from("grasp")).unwrap();
    let operator = operators
        .find(grasp, &[object("objA"), object("loc2"), object("locTable")])
        .unwrap();

    let state = task.initial_state();
    assert!(!operator.is_applicable(state));

    let cleared = state.apply_delta(&[atom(&task, "Obstructs", &["loc2", "objC", "objA"])], &[]);
    assert!(operator.is_applicable(&cleared));
}

#[test]
fn grasp_clears_every_obstruction_by_the_grasped_object() {
    let (task, operators) = setup(DINNER_DOMAIN_TEXT, DINNER_OBSTRUCTED_PROBLEM_TEXT);
    let symbols = task.symbols();
    let object = |name: &str| symbols.object_index(&Name::from(name)).unwrap();
    let grasp = symbols.action_index(&Name::from("grasp")).unwrap();
    let operator = operators
        .find(grasp, &[object("objA"), object("loc1"), object("locTable")])
        .unwrap();

    let state = task.initial_state().apply_delta(
        &[atom(&task, "RobotAt", &["loc2"])],
        &[
            atom(&task, "RobotAt", &["loc1"]),
            atom(&task, "Obstructs", &["locTable", "objA", "objB"]),
            atom(&task, "Obstructs", &["loc2", "objA", "objC"]),
            atom(&task, "Obstructs", &["loc1", "objA", "trayA"]),
        ],
    );
    let next = operator.apply(&state, symbols).unwrap();

    let obstructs = symbols.find_predicate(&Name::from("Obstructs")).unwrap();
    let remaining: Vec<Atom> = next
        .atoms()
        .filter(|atom| atom.predicate_index() == obstructs)
        .collect();
    assert_eq!(remaining, vec![atom(&task, "Obstructs", &["loc2", "objC", "objA"])]);
    assert!(next.contains(&atom(&task, "InGripper", &["objA"])));
    assert!(!next.contains(&atom(&task, "Topmost", &["objA", "trayA"])));
    assert!(!next.contains(&atom(&task, "On", &["objA", "objB"])));
}

#[test]
fn obstructed_problem_is_solved_from_the_other_side() {
    let (task, operators) = setup(DINNER_DOMAIN_TEXT, DINNER_OBSTRUCTED_PROBLEM_TEXT);
    let plan = search(&task, &operators, SearchStrategy::Bfs, None, None).unwrap();
    assert_eq!(
        plan_names(&task, &plan),
        vec![
            "(moveTo robot loc2 loc1)".to_string(),
            "(grasp objA loc1 locTable)".to_string()
        ]
    );
}

#[test]
fn search_is_deterministic() {
    let (task, operators) = setup(DINNER_DOMAIN_TEXT, DINNER_SERVE_PROBLEM_TEXT);
    for strategy in SearchStrategy::iter() {
        let first = search(&task, &operators, strategy, None, None).unwrap();
        let second = search(&task, &operators, strategy, None, None).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn found_plans_validate() {
    let problems = [
        (BLOCKSWORLD_DOMAIN_TEXT, BLOCKSWORLD_PROBLEM_TEXT),
        (DINNER_DOMAIN_TEXT, DINNER_SINGLE_PICK_PROBLEM_TEXT),
        (DINNER_DOMAIN_TEXT, DINNER_OBSTRUCTED_PROBLEM_TEXT),
        (DINNER_DOMAIN_TEXT, DINNER_SERVE_PROBLEM_TEXT),
        (ROADS_DOMAIN_TEXT, ROADS_PROBLEM_TEXT),
    ];
    for (domain, problem) in problems {
        let (task, operators) = setup(domain, problem);
        for strategy in SearchStrategy::iter() {
            for heuristic in StateHeuristicNames::iter() {
                let plan =
                    search(&task, &operators, strategy, Some(heuristic.create()), None)
                        .unwrap();
                assert!(validate(&task, &plan).is_ok(), "{strategy} {heuristic}");
            }
        }
    }
}

#[test]
fn breadth_first_search_finds_shortest_plans() {
    let (task, operators) = setup(BLOCKSWORLD_DOMAIN_TEXT, BLOCKSWORLD_PROBLEM_TEXT);
    let plan = search(&task, &operators, SearchStrategy::Bfs, None, None).unwrap();
    assert_eq!(
        plan_names(&task, &plan),
        vec![
            "(unstack a b)".to_string(),
            "(putdown a)".to_string(),
            "(pickup b)".to_string(),
            "(stack b c)".to_string()
        ]
    );

    let (task, operators) = setup(DINNER_DOMAIN_TEXT, DINNER_SERVE_PROBLEM_TEXT);
    let plan = search(&task, &operators, SearchStrategy::Bfs, None, None).unwrap();
    assert_eq!(
        plan_names(&task, &plan),
        vec![
            "(pickTray robot trayA locTable)".to_string(),
            "(moveTo robot locDoor locStove)".to_string(),
            "(putDownTray robot trayA locCounter)".to_string(),
            "(grasp objA locStove locCounter)".to_string(),
            "(placeOnTray objA trayA locStove locCounter)".to_string()
        ]
    );
}

#[test]
fn goal_holding_initially_gives_the_empty_plan() {
    let (task, operators) = setup(
        BLOCKSWORLD_DOMAIN_TEXT,
        "(define (problem done) (:domain blocksworld)
            (:objects a b) (:init (on a b) (arm-empty)) (:goal (on a b)))",
    );
    for strategy in SearchStrategy::iter() {
        assert!(search(&task, &operators, strategy, None, None)
            .unwrap()
            .is_empty());
    }
}

#[test]
fn untouched_atoms_survive_a_step() {
    let (task, operators) = setup(DINNER_DOMAIN_TEXT, DINNER_SINGLE_PICK_PROBLEM_TEXT);
    let plan = search(&task, &operators, SearchStrategy::Bfs, None, None).unwrap();
    let step = &plan[0];
    let before = task.initial_state();
    let after = step.apply(before, task.symbols()).unwrap();

    for atom in before.atoms() {
        assert_eq!(after.contains(&atom), !step.effect().deletes().contains(&atom));
    }
    for atom in step.effect().adds() {
        assert!(after.contains(atom));
    }
    assert_eq!(after.len(), before.len());
}

#[test]
fn untouched_atoms_survive_a_quantified_step() {
    let (task, operators) = setup(DINNER_DOMAIN_TEXT, DINNER_OBSTRUCTED_PROBLEM_TEXT);
    let before = task.initial_state();
    let grasp = task.symbols().action_index(&Name::from("grasp")).unwrap();
    let step = operators
        .iter()
        .find(|operator| operator.schema_index() == grasp && operator.is_applicable(before))
        .unwrap();
    assert_eq!(step.human_readable(task.symbols()), "(grasp objC loc2 locTable)");

    let after = step.apply(before, task.symbols()).unwrap();
    let (deletes, adds) = step.effect().expand();
    // objC no longer blocks objA once it is in the gripper
    assert!(deletes.contains(&atom(&task, "Obstructs", &["loc2", "objC", "objA"])));

    for atom in before.atoms() {
        assert_eq!(
            after.contains(&atom),
            adds.contains(&atom) || !deletes.contains(&atom)
        );
    }
    for atom in &adds {
        assert!(after.contains(atom));
    }
}

#[test]
fn uniform_cost_search_finds_the_cheapest_plan() {
    let (task, operators) = setup(ROADS_DOMAIN_TEXT, ROADS_PROBLEM_TEXT);

    let bfs = search(&task, &operators, SearchStrategy::Bfs, None, None).unwrap();
    assert_eq!(plan_names(&task, &bfs), vec!["(fly home work)".to_string()]);
    assert_approx_eq!(bfs.cost(), 10.);

    let mut engine = SearchEngine::new(SearchStrategy::Ucs);
    let (result, statistics) = engine.search(&task, &operators);
    let ucs = result.unwrap();
    assert_eq!(
        plan_names(&task, &ucs),
        vec!["(drive home mid)".to_string(), "(drive mid work)".to_string()]
    );
    assert_approx_eq!(ucs.cost(), 2.);
    // both mid and work are first reached by flying
    assert_eq!(statistics.reopened_nodes(), 2);
}

#[test]
fn cancelled_search_stops() {
    let (task, operators) = setup(DINNER_DOMAIN_TEXT, DINNER_SERVE_PROBLEM_TEXT);
    let token = CancellationToken::new();
    token.cancel();
    let termination = TerminationCondition::default().with_cancellation_token(token);
    assert!(matches!(
        search(&task, &operators, SearchStrategy::Bfs, None, Some(termination)),
        Err(PlanningError::Cancelled)
    ));
}

#[test]
fn exhausted_time_limit_stops_the_search() {
    let (task, operators) = setup(DINNER_DOMAIN_TEXT, DINNER_SERVE_PROBLEM_TEXT);
    let termination = TerminationCondition::new(Some(std::time::Duration::ZERO), None);
    assert!(matches!(
        search(&task, &operators, SearchStrategy::Ucs, None, Some(termination)),
        Err(PlanningError::TimeLimitExceeded)
    ));
}

#[test]
fn successor_generators_agree() {
    let (task, operators) = setup(DINNER_DOMAIN_TEXT, DINNER_SERVE_PROBLEM_TEXT);
    for strategy in SearchStrategy::iter() {
        let plans: Vec<Plan> = [SuccessorGeneratorName::Naive, SuccessorGeneratorName::Indexed]
            .into_iter()
            .map(|generator| {
                SearchEngine::new(strategy)
                    .with_successor_generator(generator)
                    .search(&task, &operators)
                    .0
                    .unwrap()
            })
            .collect();
        assert_eq!(plans[0], plans[1]);
    }
}

#[test]
fn greedy_search_counts_its_work() {
    let (task, operators) = setup(DINNER_DOMAIN_TEXT, DINNER_SERVE_PROBLEM_TEXT);
    let mut engine = SearchEngine::new(SearchStrategy::Gbfs);
    let (result, statistics) = engine.search(&task, &operators);
    assert!(result.is_ok());
    assert!(statistics.expanded_nodes() > 0);
    assert!(statistics.evaluated_nodes() >= statistics.expanded_nodes());
    assert!(statistics.generated_nodes() >= statistics.expanded_nodes());
}

#[derive(Debug)]
struct CountingGoals {
    calls: Rc<Cell<usize>>,
}

impl Heuristic for CountingGoals {
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue {
        self.calls.set(self.calls.get() + 1);
        OrderedFloat(task.goal().count_unsatisfied(state) as f64)
    }
}

#[test]
fn greedy_search_uses_the_given_heuristic() {
    let (task, operators) = setup(DINNER_DOMAIN_TEXT, DINNER_SERVE_PROBLEM_TEXT);
    let calls = Rc::new(Cell::new(0));
    let mut engine = SearchEngine::new(SearchStrategy::Gbfs).with_heuristic(Box::new(
        CountingGoals {
            calls: calls.clone(),
        },
    ));
    let (result, statistics) = engine.search(&task, &operators);
    assert!(validate(&task, &result.unwrap()).is_ok());
    assert!(calls.get() > 0);
    assert_eq!(calls.get(), statistics.evaluated_nodes());

    let calls = Rc::new(Cell::new(0));
    let heuristic = CountingGoals {
        calls: calls.clone(),
    };
    let plan = search(
        &task,
        &operators,
        SearchStrategy::Gbfs,
        Some(Box::new(heuristic)),
        None,
    )
    .unwrap();
    assert!(validate(&task, &plan).is_ok());
    assert!(calls.get() > 0);
}

#[test]
fn replanning_from_a_patched_state() {
    let (task, _) = setup(DINNER_DOMAIN_TEXT, DINNER_SERVE_PROBLEM_TEXT);
    let moved = task
        .with_initial_state(task.initial_state().apply_delta(
            &[atom(&task, "RobotAt", &["locDoor"])],
            &[atom(&task, "RobotAt", &["locStove"])],
        ))
        .unwrap();
    let operators = ground(&moved, 100_000).unwrap();
    let plan = search(&moved, &operators, SearchStrategy::Bfs, None, None).unwrap();
    assert!(validate(&moved, &plan).is_ok());
    assert!(validate(&task, &plan).is_err());
}
