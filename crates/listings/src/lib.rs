//! Job listings domain.
//!
//! This crate turns the raw text of a job-listings file into typed [`Job`]
//! records and derives everything a table view needs from them: the distinct
//! filter choices and the sorted, filtered display rows. It is implemented
//! purely as deterministic domain logic (no IO, no rendering); the collaborators
//! that read files and draw tables plug in through the traits in [`board`].

pub mod alert;
pub mod board;
pub mod ingest;
pub mod job;
pub mod options;
pub mod view;

pub use alert::Alert;
pub use board::{JobBoard, LoadOutcome, LoadSummary, Notifier, OptionsRenderer, TableRenderer};
pub use ingest::{IngestError, Ingested, RejectReason, Rejection, REQUIRED_FIELDS, ingest};
pub use job::{Job, parse_posted_minutes, posted_minutes};
pub use options::{Category, CategorySets, DistinctValues, FilterOptions, OptionList};
pub use view::{DisplayRow, Filter, NO_FILTER, SortMode, ViewQuery};
