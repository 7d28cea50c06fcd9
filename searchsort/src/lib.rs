//! # searchsort
//!
//! Algorithm engine behind the search & sort analyzer.
//!
//! ## Modules
//!
//! - `searching` – Lookup algorithms (linear, binary)
//! - `sorting` – Ordering algorithms (selection, insertion, bubble, shell,
//!   merge, quick, heap, radix, counting)
//! - `engine` – Selection dispatch, target validation, single-shot timing
//! - `input` – Boundary parsing of comma-separated integer lists
//! - `error` – Input error kinds surfaced to the caller
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use searchsort::{run, Algorithm, Outcome};
//!
//! let mut numbers = vec![5, 3, 8, 1];
//! let report = run(Algorithm::BubbleSort, &mut numbers, None).unwrap();
//! assert_eq!(report.outcome, Outcome::Sorted(vec![1, 3, 5, 8]));
//! ```
//!
//! ---
//!
//! Sort selections reorder the caller's sequence in place; callers that need
//! the original ordering elsewhere must copy first.

pub mod engine;
pub mod error;
pub mod input;
pub mod searching;
pub mod sorting;

pub use engine::{run, Algorithm, Outcome, Report};
pub use error::EngineError;
