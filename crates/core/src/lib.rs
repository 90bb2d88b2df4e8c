//! `jobboard-core`: shared building blocks.
//!
//! This crate contains **pure** primitives (no IO, no rendering) used by the
//! listings domain and the command-line front end.

pub mod error;
pub mod sequence;

pub use error::{DomainError, DomainResult};
pub use sequence::{LoadSequence, LoadToken};
