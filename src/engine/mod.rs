//! Execution of the identifier automaton.
//!
//! The engine computes the whole trace eagerly and synchronously. Pacing the
//! trace for animation is left to [`crate::playback`].

mod machine;
mod result;

pub use machine::{run, run_chars};
pub use result::SimulationResult;
