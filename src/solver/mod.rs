//! Constraint-propagation solving
//!
//! The solver alternates word narrowing and letter narrowing across the whole
//! puzzle until it is solved, stuck or contradictory. There is no search: a
//! puzzle that propagation cannot finish is reported as `Stuck`.

pub mod config;
mod engine;
pub mod narrowing;
pub mod outcome;
pub mod progress;

pub use config::{DEFAULT_MAX_ITERATIONS, SolverConfig};
pub use engine::{Solver, propagate};
pub use outcome::{Contradiction, LoopState, Outcome, Propagation};
pub use progress::{History, NoProgress, Phase, ProgressSink, Step};
