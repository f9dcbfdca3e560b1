//! # tailbound-core
//!
//! Foundation crate for the tailbound workspace.
//! Defines the experiment parameter and knowledge types, the sample-set
//! data model, derived statistics, errors, constants, and traits.
//! Every other crate in the workspace depends on this.

pub mod constants;
pub mod errors;
pub mod knowledge;
pub mod params;
pub mod sample;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use errors::{TailboundError, TailboundResult};
pub use knowledge::{Knowledge, KnowledgeFact};
pub use params::{DerivedStats, ExperimentParams};
pub use sample::SampleSet;
