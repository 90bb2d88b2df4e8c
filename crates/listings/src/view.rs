//! Sorting, filtering and row projection for the listings table.

use core::cmp::Ordering;

use serde::Serialize;

use crate::job::Job;
use crate::options::Category;

/// Selector value meaning "do not filter on this category".
pub const NO_FILTER: &str = "No filter";

/// Table sort order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Title ascending (case-sensitive).
    #[default]
    Az,
    /// Title descending.
    Za,
    /// Most recently posted first.
    Newest,
    /// Least recently posted first.
    Oldest,
}

impl SortMode {
    /// Parse a selector token. Anything unrecognized sorts A–Z.
    pub fn from_token(token: &str) -> Self {
        match token {
            "za" => SortMode::Za,
            "newest" => SortMode::Newest,
            "oldest" => SortMode::Oldest,
            _ => SortMode::Az,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Az => "az",
            SortMode::Za => "za",
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
        }
    }

    pub fn compare(&self, a: &Job, b: &Job) -> Ordering {
        match self {
            SortMode::Az => title_order(a, b),
            SortMode::Za => title_order(b, a),
            SortMode::Newest => a.minutes_since_posted().cmp(&b.minutes_since_posted()),
            SortMode::Oldest => b.minutes_since_posted().cmp(&a.minutes_since_posted()),
        }
    }

    /// Sort `jobs` in place. Equal keys keep their current relative order.
    pub fn sort(&self, jobs: &mut [Job]) {
        jobs.sort_by(|a, b| self.compare(a, b));
    }
}

/// Titles compare by UTF-16 code unit, so characters outside the basic
/// multilingual plane sort before U+E000..=U+FFFF.
fn title_order(a: &Job, b: &Job) -> Ordering {
    a.title().encode_utf16().cmp(b.title().encode_utf16())
}

/// Selection for one category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    Any,
    Only(String),
}

impl Filter {
    /// Parse a selector value; [`NO_FILTER`] is the wildcard.
    pub fn from_selection(value: &str) -> Self {
        if value == NO_FILTER {
            Filter::Any
        } else {
            Filter::Only(value.to_string())
        }
    }

    pub fn admits(&self, value: &str) -> bool {
        match self {
            Filter::Any => true,
            Filter::Only(expected) => expected == value,
        }
    }

    pub fn as_selection(&self) -> &str {
        match self {
            Filter::Any => NO_FILTER,
            Filter::Only(value) => value,
        }
    }
}

/// Sort mode plus the three category filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewQuery {
    pub sort: SortMode,
    pub level: Filter,
    pub job_type: Filter,
    pub skill: Filter,
}

impl ViewQuery {
    /// Build a query from the four raw selector values.
    pub fn from_selections(sort: &str, level: &str, job_type: &str, skill: &str) -> Self {
        Self {
            sort: SortMode::from_token(sort),
            level: Filter::from_selection(level),
            job_type: Filter::from_selection(job_type),
            skill: Filter::from_selection(skill),
        }
    }

    pub fn filter(&self, category: Category) -> &Filter {
        match category {
            Category::Level => &self.level,
            Category::Type => &self.job_type,
            Category::Skill => &self.skill,
        }
    }

    /// A job passes when every category filter admits it.
    pub fn admits(&self, job: &Job) -> bool {
        Category::ALL
            .iter()
            .all(|category| self.filter(*category).admits(category.value_of(job)))
    }

    /// Sort `jobs` in place, then project the passing ones into display rows.
    pub fn apply(&self, jobs: &mut [Job]) -> Vec<DisplayRow> {
        self.sort.sort(jobs);
        jobs.iter()
            .filter(|job| self.admits(job))
            .map(DisplayRow::from)
            .collect()
    }
}

/// One table row: the six visible fields of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub title: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub level: String,
    pub skill: String,
    pub description: String,
    pub posted: String,
}

impl DisplayRow {
    pub const HEADERS: [&'static str; 6] =
        ["Title", "Type", "Level", "Skill", "Description", "Posted"];

    /// Cells in header order.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.title.as_str(),
            self.job_type.as_str(),
            self.level.as_str(),
            self.skill.as_str(),
            self.description.as_str(),
            self.posted.as_str(),
        ]
    }
}

impl From<&Job> for DisplayRow {
    fn from(job: &Job) -> Self {
        Self {
            title: job.title().to_string(),
            job_type: job.job_type().to_string(),
            level: job.level().to_string(),
            skill: job.skill().to_string(),
            description: job.description().to_string(),
            posted: job.posted().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, level: &str, job_type: &str, skill: &str, posted: &str) -> Job {
        Job::new(title, job_type, level, skill, format!("{title} role"), posted, "link")
    }

    fn titles(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(Job::title).collect()
    }

    fn sample() -> Vec<Job> {
        vec![
            job("Delta", "L1", "T1", "S1", "2 hours"),
            job("alpha", "L1", "T2", "S1", "45 minutes"),
            job("Bravo", "L2", "T1", "S1", "1 hour"),
            job("Charlie", "L2", "T2", "S2", "3 minutes"),
        ]
    }

    #[test]
    fn unknown_sort_token_defaults_to_az() {
        assert_eq!(SortMode::from_token("za"), SortMode::Za);
        assert_eq!(SortMode::from_token("newest"), SortMode::Newest);
        assert_eq!(SortMode::from_token("oldest"), SortMode::Oldest);
        assert_eq!(SortMode::from_token("az"), SortMode::Az);
        assert_eq!(SortMode::from_token("ZA"), SortMode::Az);
        assert_eq!(SortMode::from_token(""), SortMode::Az);
    }

    #[test]
    fn az_is_case_sensitive() {
        let mut jobs = sample();
        SortMode::Az.sort(&mut jobs);
        assert_eq!(titles(&jobs), vec!["Bravo", "Charlie", "Delta", "alpha"]);
    }

    #[test]
    fn za_reverses_titles() {
        let mut jobs = sample();
        SortMode::Za.sort(&mut jobs);
        assert_eq!(titles(&jobs), vec!["alpha", "Delta", "Charlie", "Bravo"]);
    }

    #[test]
    fn newest_and_oldest_order_by_minutes() {
        let mut jobs = sample();
        SortMode::Newest.sort(&mut jobs);
        assert_eq!(titles(&jobs), vec!["Charlie", "alpha", "Bravo", "Delta"]);

        SortMode::Oldest.sort(&mut jobs);
        assert_eq!(titles(&jobs), vec!["Delta", "Bravo", "alpha", "Charlie"]);
    }

    #[test]
    fn titles_compare_by_utf16_code_units() {
        let mut jobs = vec![
            job("\u{FF5E} fullwidth", "L1", "T1", "S1", "1 hour"),
            job("\u{1F980} crab", "L1", "T1", "S1", "1 hour"),
            job("Zed", "L1", "T1", "S1", "1 hour"),
        ];
        SortMode::Az.sort(&mut jobs);
        assert_eq!(titles(&jobs), vec!["Zed", "\u{1F980} crab", "\u{FF5E} fullwidth"]);

        SortMode::Za.sort(&mut jobs);
        assert_eq!(titles(&jobs), vec!["\u{FF5E} fullwidth", "\u{1F980} crab", "Zed"]);
    }

    #[test]
    fn negative_ages_sort_as_newest() {
        let mut jobs = vec![
            job("Now", "L1", "T1", "S1", "0 minutes"),
            job("Scheduled", "L1", "T1", "S1", "-2 hours"),
            job("Earlier", "L1", "T1", "S1", "+1 hour"),
        ];
        SortMode::Newest.sort(&mut jobs);
        assert_eq!(titles(&jobs), vec!["Scheduled", "Now", "Earlier"]);
    }

    #[test]
    fn equal_titles_keep_relative_order() {
        let mut jobs = vec![
            job("Same", "L1", "T1", "S1", "1 hour"),
            job("Same", "L2", "T1", "S1", "2 hours"),
            job("Other", "L3", "T1", "S1", "3 hours"),
        ];
        SortMode::Az.sort(&mut jobs);
        let first = jobs.clone();
        SortMode::Az.sort(&mut jobs);

        assert_eq!(jobs, first);
        assert_eq!(jobs[1].level(), "L1");
        assert_eq!(jobs[2].level(), "L2");
    }

    #[test]
    fn filters_compose_with_and() {
        let mut jobs = vec![
            job("A", "L1", "T1", "S1", "1 hour"),
            job("B", "L1", "T2", "S1", "1 hour"),
            job("C", "L2", "T1", "S1", "1 hour"),
        ];
        let query = ViewQuery::from_selections("az", "L1", NO_FILTER, "S1");

        let rows = query.apply(&mut jobs);
        assert_eq!(
            rows.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
            vec!["A", "B"]
        );
    }

    #[test]
    fn filtered_rows_follow_sort_order() {
        let mut jobs = vec![
            job("A", "L1", "T1", "S1", "1 hour"),
            job("B", "L1", "T2", "S1", "1 hour"),
            job("C", "L2", "T1", "S1", "1 hour"),
        ];
        let query = ViewQuery::from_selections("za", "L1", NO_FILTER, "S1");

        let rows = query.apply(&mut jobs);
        assert_eq!(
            rows.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
            vec!["B", "A"]
        );
    }

    #[test]
    fn wildcard_everywhere_admits_all() {
        let mut jobs = sample();
        let rows = ViewQuery::default().apply(&mut jobs);
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn filter_values_are_exact() {
        let filter = Filter::from_selection("Senior");
        assert!(filter.admits("Senior"));
        assert!(!filter.admits("senior"));
        assert!(!filter.admits("Senior "));
        assert_eq!(filter.as_selection(), "Senior");

        assert_eq!(Filter::from_selection(NO_FILTER), Filter::Any);
        assert_eq!(Filter::Any.as_selection(), NO_FILTER);
    }

    #[test]
    fn rows_carry_six_visible_fields() {
        let j = job("Rustacean", "Senior", "Contract", "Rust", "30 minutes");
        let row = DisplayRow::from(&j);
        assert_eq!(
            row.cells(),
            ["Rustacean", "Contract", "Senior", "Rust", "Rustacean role", "30 minutes"]
        );

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["type"], "Contract");
        assert!(value.get("link").is_none());
    }

    #[test]
    fn apply_is_idempotent() {
        let mut jobs = sample();
        let query = ViewQuery::from_selections("newest", NO_FILTER, "T1", NO_FILTER);
        let first = query.apply(&mut jobs);
        let second = query.apply(&mut jobs);
        assert_eq!(first, second);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_job() -> impl Strategy<Value = Job> {
            (
                "[A-Za-z ]{0,12}",
                prop::sample::select(vec!["L1", "L2", "L3"]),
                prop::sample::select(vec!["T1", "T2"]),
                prop::sample::select(vec!["S1", "S2"]),
                0u64..500,
                any::<bool>(),
            )
                .prop_map(|(title, level, job_type, skill, n, hours)| {
                    let posted = if hours { format!("{n} hours") } else { format!("{n} minutes") };
                    Job::new(title, job_type, level, skill, "d", posted, "l")
                })
        }

        fn arb_mode() -> impl Strategy<Value = SortMode> {
            prop::sample::select(vec![
                SortMode::Az,
                SortMode::Za,
                SortMode::Newest,
                SortMode::Oldest,
            ])
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: sorting an already sorted collection changes nothing.
            #[test]
            fn sort_is_idempotent(mut jobs in prop::collection::vec(arb_job(), 0..40), mode in arb_mode()) {
                mode.sort(&mut jobs);
                let once = jobs.clone();
                mode.sort(&mut jobs);
                prop_assert_eq!(jobs, once);
            }

            /// Property: sorted output is ordered by the mode's comparator.
            #[test]
            fn sort_orders_adjacent_pairs(mut jobs in prop::collection::vec(arb_job(), 0..40), mode in arb_mode()) {
                mode.sort(&mut jobs);
                for pair in jobs.windows(2) {
                    prop_assert_ne!(mode.compare(&pair[0], &pair[1]), Ordering::Greater);
                }
            }

            /// Property: every emitted row satisfies the filters and none are lost.
            #[test]
            fn filter_is_sound_and_complete(
                mut jobs in prop::collection::vec(arb_job(), 0..40),
                level in prop::sample::select(vec!["L1", "L2", NO_FILTER]),
                skill in prop::sample::select(vec!["S1", NO_FILTER]),
            ) {
                let query = ViewQuery::from_selections("az", level, NO_FILTER, skill);
                let rows = query.apply(&mut jobs);

                let expected: Vec<DisplayRow> = jobs
                    .iter()
                    .filter(|j| (level == NO_FILTER || j.level() == level)
                        && (skill == NO_FILTER || j.skill() == skill))
                    .map(DisplayRow::from)
                    .collect();
                prop_assert_eq!(rows, expected);
            }
        }
    }
}
