mod state;

pub use state::{Relation, State};
