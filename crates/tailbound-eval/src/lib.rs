//! # tailbound-eval
//!
//! The bound catalog and evaluation engine: computes the four classical
//! tail inequalities, gates each on the currently-known facts, and
//! compares the surviving guarantees against the empirical tail.

pub mod catalog;
pub mod engine;
pub mod formula;
pub mod looseness;
pub mod report;

pub use catalog::BoundKind;
pub use engine::EvalEngine;
pub use looseness::{Looseness, Verdict};
pub use report::{BoundReport, Report};
