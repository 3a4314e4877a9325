//! The automaton engine.
//!
//! Construction resolves a definition into an arena of states, each owning
//! its outgoing edges as `input -> StateId` entries. Construction is the
//! only phase that mutates states; the resulting [`Automaton`] is frozen.
//!
//! # Execution
//!
//! Three entry points share one traversal:
//!
//! - [`Automaton::execute`]: rejects symbols outside the alphabet before
//!   taking any transition, then runs
//! - [`Automaton::run`]: walks directly, so unknown symbols surface as a
//!   missing transition
//! - [`Automaton::trace`]: walks and returns the visited [`Run`] without
//!   the acceptance test
//!
//! Execution aborts on the first missing transition. There is no partial
//! acceptance.

pub mod error;
mod machine;
mod run;
mod states;

pub use error::{BuildError, ExecutionError};
pub use machine::Automaton;
pub use run::Run;
