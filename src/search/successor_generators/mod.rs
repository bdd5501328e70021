//! Successor generators enumerate the operators applicable in a state, in
//! grounding order.

mod indexed;
mod naive;
mod successor_generator;

pub use indexed::IndexedSuccessorGenerator;
pub use naive::NaiveSuccessorGenerator;
pub use successor_generator::{successors, SuccessorGenerator, SuccessorGeneratorName};
