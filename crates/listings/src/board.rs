//! The job board controller.
//!
//! `JobBoard` owns all state derived from a load (the normalized collection and
//! its distinct-value sets) and drives the external collaborators:
//! - a [`Notifier`] for the two user-facing alerts
//! - an [`OptionsRenderer`] for the three filter selectors
//! - a [`TableRenderer`] for the listings table
//!
//! Loads are tagged with a [`LoadToken`] when they start. A valid completion
//! older than the newest *applied* load is discarded, so a slow first file can
//! never overwrite a faster second one. An invalid file is always reported,
//! whatever its token, since it never touches state.

use chrono::{DateTime, Utc};
use serde::Serialize;

use jobboard_core::{DomainError, DomainResult, LoadToken};

use crate::alert::Alert;
use crate::ingest::{IngestError, Ingested, ingest};
use crate::job::Job;
use crate::options::{CategorySets, FilterOptions};
use crate::view::{DisplayRow, ViewQuery};

/// Receives user-facing alerts.
pub trait Notifier {
    fn alert(&mut self, alert: Alert);
}

/// Receives the selector choices after every applied load.
pub trait OptionsRenderer {
    fn replace_options(&mut self, options: &FilterOptions);
}

/// Receives the complete set of visible rows. Previous rows are discarded.
pub trait TableRenderer {
    fn replace_rows(&mut self, rows: &[DisplayRow]);
}

/// What was applied by the most recent successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub token: LoadToken,
    pub loaded_at: DateTime<Utc>,
    pub accepted: usize,
    pub skipped: usize,
}

/// How a load completion was handled.
#[derive(Debug)]
pub enum LoadOutcome {
    /// State was replaced.
    Applied(LoadSummary),
    /// The file was invalid; state is unchanged.
    Rejected(IngestError),
    /// A newer load was already applied; this one was ignored.
    Stale { token: LoadToken, current: LoadToken },
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, LoadOutcome::Applied(_))
    }
}

/// Owner of the normalized collection and its distinct-value sets.
#[derive(Debug, Default)]
pub struct JobBoard {
    jobs: Vec<Job>,
    sets: CategorySets,
    last_load: Option<LoadSummary>,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current records, in their most recent sort order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn sets(&self) -> &CategorySets {
        &self.sets
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions::collect(&self.sets)
    }

    pub fn last_load(&self) -> Option<&LoadSummary> {
        self.last_load.as_ref()
    }

    /// Fails when `token` does not supersede the last applied load.
    pub fn ensure_current(&self, token: LoadToken) -> DomainResult<()> {
        match &self.last_load {
            Some(last) if !token.supersedes(last.token) => {
                Err(DomainError::stale_load(token, last.token))
            }
            _ => Ok(()),
        }
    }

    /// Ingest `text` and apply the result. No collaborators are notified.
    pub fn load(&mut self, token: LoadToken, text: &str) -> LoadOutcome {
        self.apply(token, ingest(text))
    }

    /// Apply an ingest result without notifying collaborators.
    ///
    /// An invalid file leaves every piece of state untouched; a valid one
    /// replaces the collection and the distinct-value sets wholesale.
    pub fn apply(&mut self, token: LoadToken, result: Result<Ingested, IngestError>) -> LoadOutcome {
        let ingested = match result {
            Ok(ingested) => ingested,
            Err(err) => {
                tracing::warn!(%token, error = %err, "rejecting listings file");
                return LoadOutcome::Rejected(err);
            }
        };

        if let Err(DomainError::StaleLoad { token, current }) = self.ensure_current(token) {
            tracing::warn!(%token, %current, "discarding stale load");
            return LoadOutcome::Stale { token, current };
        }

        let (jobs, sets, rejections) = ingested.into_parts();
        let summary = LoadSummary {
            token,
            loaded_at: Utc::now(),
            accepted: jobs.len(),
            skipped: rejections.len(),
        };

        self.jobs = jobs;
        self.sets = sets;
        self.last_load = Some(summary.clone());

        tracing::info!(
            %token,
            accepted = summary.accepted,
            skipped = summary.skipped,
            loaded_at = %summary.loaded_at,
            "listings loaded"
        );

        LoadOutcome::Applied(summary)
    }

    /// Handle a load completion end to end: apply it, raise the matching alert,
    /// repopulate the selectors and redraw the table.
    pub fn complete_load<V>(
        &mut self,
        token: LoadToken,
        result: Result<Ingested, IngestError>,
        query: &ViewQuery,
        view: &mut V,
    ) -> LoadOutcome
    where
        V: Notifier + OptionsRenderer + TableRenderer,
    {
        let skipped_alert = result.as_ref().ok().and_then(Ingested::alert);
        let outcome = self.apply(token, result);

        match &outcome {
            LoadOutcome::Applied(_) => {
                if let Some(alert) = skipped_alert {
                    view.alert(alert);
                }
                view.replace_options(&self.options());
                self.refresh(query, view);
            }
            LoadOutcome::Rejected(err) => view.alert(err.alert()),
            LoadOutcome::Stale { .. } => {}
        }

        outcome
    }

    /// Sort the collection in place and compute the visible rows.
    pub fn rows(&mut self, query: &ViewQuery) -> Vec<DisplayRow> {
        query.apply(&mut self.jobs)
    }

    /// Recompute the visible rows and hand them to the table, replacing what
    /// it showed before.
    pub fn refresh<T: TableRenderer + ?Sized>(&mut self, query: &ViewQuery, table: &mut T) {
        let rows = self.rows(query);
        tracing::debug!(
            sort = query.sort.as_str(),
            level = query.level.as_selection(),
            job_type = query.job_type.as_selection(),
            skill = query.skill.as_selection(),
            visible = rows.len(),
            total = self.jobs.len(),
            "table refreshed"
        );
        table.replace_rows(&rows);
    }
}
