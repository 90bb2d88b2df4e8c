//! Raw text → normalized job collection.
//!
//! Failures come in two tiers:
//! - **file level** ([`IngestError`]): the text is not JSON, or its top level is
//!   not an array. Nothing is produced.
//! - **element level** ([`Rejection`]): one element is not a listing. It is
//!   dropped and the rest of the file is still used.

use std::borrow::Cow;

use serde_json::{Map, Number, Value};
use thiserror::Error;

use jobboard_core::DomainError;

use crate::alert::Alert;
use crate::job::{Job, posted_minutes};
use crate::options::CategorySets;

pub const TITLE: &str = "Title";
pub const TYPE: &str = "Type";
pub const LEVEL: &str = "Level";
pub const SKILL: &str = "Skill";
pub const DETAIL: &str = "Detail";
pub const POSTED: &str = "Posted";
pub const LINK: &str = "Job Page Link";

/// Keys every element must carry, in constructor order.
pub const REQUIRED_FIELDS: [&str; 7] = [TITLE, TYPE, LEVEL, SKILL, DETAIL, POSTED, LINK];

/// File-level ingest failure. Nothing from the file is kept.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("top-level JSON value must be an array, found {found}")]
    NotAnArray { found: &'static str },

    /// The content could not be obtained as text in the first place.
    #[error("file could not be read: {0}")]
    Unreadable(String),
}

impl IngestError {
    pub fn alert(&self) -> Alert {
        Alert::InvalidFile
    }
}

/// Why a single element was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("element is {found}, not an object")]
    NotAnObject { found: &'static str },

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' is {found}, not text")]
    NotText {
        field: &'static str,
        found: &'static str,
    },

    #[error("posted time '{posted}' rejected: {cause}")]
    MalformedPosted { posted: String, cause: DomainError },
}

/// A dropped element and its position in the source array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub index: usize,
    pub reason: RejectReason,
}

/// Result of a successful ingest: accepted jobs in source order, their
/// distinct category values, and the elements that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ingested {
    jobs: Vec<Job>,
    sets: CategorySets,
    rejections: Vec<Rejection>,
}

impl Ingested {
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn sets(&self) -> &CategorySets {
        &self.sets
    }

    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    pub fn has_skipped(&self) -> bool {
        !self.rejections.is_empty()
    }

    /// The single aggregate warning for this batch, if anything was dropped.
    pub fn alert(&self) -> Option<Alert> {
        self.has_skipped().then_some(Alert::RecordsSkipped)
    }

    pub fn into_parts(self) -> (Vec<Job>, CategorySets, Vec<Rejection>) {
        (self.jobs, self.sets, self.rejections)
    }
}

/// Parse and validate the text of a listings file.
pub fn ingest(text: &str) -> Result<Ingested, IngestError> {
    let root: Value = serde_json::from_str(text)?;
    let elements = match root {
        Value::Array(elements) => elements,
        other => {
            return Err(IngestError::NotAnArray {
                found: json_kind(&other),
            });
        }
    };

    let mut ingested = Ingested {
        jobs: Vec::with_capacity(elements.len()),
        ..Ingested::default()
    };

    for (index, element) in elements.iter().enumerate() {
        match normalize(element) {
            Ok(job) => {
                ingested.sets.register(&job);
                ingested.jobs.push(job);
            }
            Err(reason) => {
                tracing::debug!(index, %reason, "skipping listing");
                ingested.rejections.push(Rejection { index, reason });
            }
        }
    }

    Ok(ingested)
}

fn normalize(element: &Value) -> Result<Job, RejectReason> {
    let object = element.as_object().ok_or(RejectReason::NotAnObject {
        found: json_kind(element),
    })?;

    let [title, job_type, level, skill, description, posted, link] =
        REQUIRED_FIELDS.map(|field| text_field(object, field));

    let job = Job::new(
        title?,
        job_type?,
        level?,
        skill?,
        description?,
        posted?,
        link?,
    );

    if let Err(cause) = posted_minutes(job.posted()) {
        return Err(RejectReason::MalformedPosted {
            posted: job.posted().to_string(),
            cause,
        });
    }

    Ok(job)
}

/// Scalars are taken as their text form (`null`, `true`, `42`); arrays and
/// objects are not text.
fn text_field<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<Cow<'a, str>, RejectReason> {
    match object.get(field) {
        None => Err(RejectReason::MissingField(field)),
        Some(Value::String(text)) => Ok(Cow::Borrowed(text.as_str())),
        Some(Value::Null) => Ok(Cow::Borrowed("null")),
        Some(Value::Bool(flag)) => Ok(Cow::Owned(flag.to_string())),
        Some(Value::Number(number)) => Ok(Cow::Owned(number_text(number))),
        Some(other) => Err(RejectReason::NotText {
            field,
            found: json_kind(other),
        }),
    }
}

/// Integral values print without a fractional part (`1.0` reads as `1`).
fn number_text(number: &Number) -> String {
    if let Some(n) = number.as_i64() {
        n.to_string()
    } else if let Some(n) = number.as_u64() {
        n.to_string()
    } else {
        number.as_f64().map(|n| n.to_string()).unwrap_or_else(|| number.to_string())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
