//! Topic generators, one module per game category.
//!
//! Every public entry point follows the same signature:
//!
//! ```ignore
//! pub fn generate<R: Rng>(
//!     rng: &mut R,
//!     level: Level,
//!     question_id: String,
//!     tracker: &mut DiversityTracker,
//! ) -> Question
//! ```
//!
//! The generator dispatches to these via `generator.rs`. All of them follow
//! the same repetition policy: generate a candidate, check the tracker,
//! retry a bounded number of times, then record whatever was accepted.

/// CT- : object counting, skip counting, counting backwards
pub mod counting;
/// NR- : number recognition and representation matching
pub mod numbers;
/// AR- : addition and subtraction problems
pub mod arithmetic;
/// FR- : fraction identification and arithmetic
pub mod fractions;
/// SH- : 2D and 3D shape identification
pub mod shapes;
