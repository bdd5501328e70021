pub const DINNER_DOMAIN_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/dinner/domain.pddl"
));

pub const DINNER_SINGLE_PICK_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/dinner/p01.pddl"
));

pub const DINNER_HEAVY_TRAY_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/dinner/p02.pddl"
));

pub const DINNER_OBSTRUCTED_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/dinner/p03.pddl"
));

pub const DINNER_SERVE_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/dinner/p04.pddl"
));

pub const BLOCKSWORLD_DOMAIN_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/blocksworld/domain.pddl"
));

pub const BLOCKSWORLD_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/blocksworld/p01.pddl"
));
