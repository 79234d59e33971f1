//! Core data model for `dnarq`: offline range-statistics queries over DNA
//! sequences.
//!
//! This crate holds the value types shared by the query engine and its
//! callers — the validated [`DnaSequence`](models::DnaSequence), the query
//! descriptors, and the tagged [`Answer`](models::Answer) type — plus the
//! error taxonomy for input-contract violations. No algorithmic logic lives
//! here; the sweep itself is implemented in `dnarq-mo`.

pub mod errors;
pub mod models;

// re-exports
pub use self::errors::SequenceError;
pub use self::models::{Answer, DnaSequence, Nucleotide, QuerySpec, RawQuery, StatKind};
