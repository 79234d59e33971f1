//! Offline range-statistics queries over DNA sequences, answered with Mo's
//! algorithm.
//!
//! Given a fixed sequence over {A, C, G, T} and a batch of range queries
//! known up front, this crate answers every query faster than re-scanning
//! each range independently: queries are sorted into a block-decomposed,
//! serpentine order, and a single window sweeps across the sequence
//! maintaining its statistics incrementally.
//!
//! ## Supported statistics
//!
//! - **Distinct bases** in a range
//! - **Most frequent base** (ties resolve A before C before G before T)
//! - **GC content** as a percentage
//! - **Pattern occurrences** (single-base patterns are O(1) from the window;
//!   longer patterns scan the range directly — see [`evaluate`])
//! - **GA hotspot pairs**: adjacent G→A occurrences inside the range
//!
//! ## Quick Start
//!
//! ```rust
//! use dnarq_mo::{answer_batch, Answer, DnaSequence, QuerySpec, StatKind};
//!
//! let seq: DnaSequence = "ACGTACGTAC".parse().unwrap();
//!
//! let queries = vec![
//!     QuerySpec { l: 0, r: 9, kind: StatKind::Distinct },
//!     QuerySpec { l: 0, r: 9, kind: StatKind::GcContent },
//! ];
//!
//! let answers = answer_batch(&seq, &queries);
//! assert_eq!(answers[0], Answer::Count(4));
//! assert_eq!(answers[1].to_string(), "50.00%");
//! ```
//!
//! ## Batch semantics
//!
//! Answers come back in the original query order, no matter what order the
//! sweep visits them in. Queries with inverted or out-of-bounds ranges are
//! skipped and answer [`Answer::Absent`]; the rest of the batch is
//! unaffected. The whole batch runs to completion in one synchronous pass —
//! there is no partial or streaming mode.

/// Batch runner and raw-input boundary.
pub mod batch;

/// Per-kind statistic evaluators.
pub mod evaluate;

/// Block decomposition and serpentine query ordering.
pub mod schedule;

/// The incrementally maintained window and its reversible operations.
pub mod window;

// re-exports
pub use self::batch::{answer_batch, answer_raw_batch};
pub use self::window::WindowState;

// re-export the core model so callers can depend on this crate alone
pub use dnarq_core::errors::SequenceError;
pub use dnarq_core::models::{Answer, DnaSequence, Nucleotide, QuerySpec, RawQuery, StatKind};
