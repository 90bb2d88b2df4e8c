use serde::Serialize;

use jobboard_core::{DomainError, DomainResult};

/// A single job listing, normalized from one element of a listings file.
///
/// Immutable once constructed; every field is plain text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Job {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Type")]
    job_type: String,
    #[serde(rename = "Level")]
    level: String,
    #[serde(rename = "Skill")]
    skill: String,
    #[serde(rename = "Detail")]
    description: String,
    #[serde(rename = "Posted")]
    posted: String,
    #[serde(rename = "Job Page Link")]
    link: String,
}

impl Job {
    pub fn new(
        title: impl Into<String>,
        job_type: impl Into<String>,
        level: impl Into<String>,
        skill: impl Into<String>,
        description: impl Into<String>,
        posted: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            job_type: job_type.into(),
            level: level.into(),
            skill: skill.into(),
            description: description.into(),
            posted: posted.into(),
            link: link.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Duration type (e.g. "Full-time", "Contract").
    pub fn job_type(&self) -> &str {
        &self.job_type
    }

    /// Difficulty level.
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Skill requirement.
    pub fn skill(&self) -> &str {
        &self.skill
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Posted time as written in the source file (e.g. "3 hours").
    pub fn posted(&self) -> &str {
        &self.posted
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// Minutes elapsed since the listing was posted.
    ///
    /// Derived from [`Job::posted`] on every call. `None` when the posted text
    /// is not in the `<integer> hour(s)|minute(s)` form.
    pub fn minutes_since_posted(&self) -> Option<i64> {
        parse_posted_minutes(&self.posted)
    }
}

/// Parse posted-time text such as `"2 hours"` or `"45 minutes"` into minutes.
///
/// Exactly two whitespace-separated tokens are accepted: an integer magnitude
/// (optionally signed) and one of `hour`, `hours`, `minute`, `minutes`.
pub fn posted_minutes(text: &str) -> DomainResult<i64> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [magnitude, unit] = tokens[..] else {
        return Err(DomainError::validation(format!(
            "expected '<integer> <unit>', got {} token(s)",
            tokens.len()
        )));
    };

    let magnitude: i64 = magnitude.parse().map_err(|_| {
        DomainError::validation(format!("magnitude '{magnitude}' is not an integer"))
    })?;

    match unit {
        "hour" | "hours" => magnitude
            .checked_mul(60)
            .ok_or_else(|| DomainError::validation(format!("{magnitude} hours is too large"))),
        "minute" | "minutes" => Ok(magnitude),
        other => Err(DomainError::validation(format!("unknown unit '{other}'"))),
    }
}

/// [`posted_minutes`] without the failure detail.
pub fn parse_posted_minutes(text: &str) -> Option<i64> {
    posted_minutes(text).ok()
}
