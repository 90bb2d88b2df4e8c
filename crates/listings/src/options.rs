//! Distinct categorical values and the filter choices built from them.

use std::collections::HashSet;

use serde::Serialize;

use crate::job::Job;
use crate::view::NO_FILTER;

/// The three categorical dimensions a listing can be filtered on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Level,
    Type,
    Skill,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Level, Category::Type, Category::Skill];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Level => "Level",
            Category::Type => "Type",
            Category::Skill => "Skill",
        }
    }

    /// The value of this dimension on `job`.
    pub fn value_of<'a>(&self, job: &'a Job) -> &'a str {
        match self {
            Category::Level => job.level(),
            Category::Type => job.job_type(),
            Category::Skill => job.skill(),
        }
    }
}

/// Insertion-ordered set of strings.
///
/// Iteration yields values in the order they were first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistinctValues {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl DistinctValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value`; returns `false` when it was already present.
    pub fn insert(&mut self, value: &str) -> bool {
        if self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_string());
        self.ordered.push(value.to_string());
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}

/// Distinct level, type and skill values of a normalized collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySets {
    levels: DistinctValues,
    types: DistinctValues,
    skills: DistinctValues,
}

impl CategorySets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the sets from scratch for `jobs`.
    pub fn from_jobs<'a>(jobs: impl IntoIterator<Item = &'a Job>) -> Self {
        let mut sets = Self::new();
        for job in jobs {
            sets.register(job);
        }
        sets
    }

    pub fn register(&mut self, job: &Job) {
        self.levels.insert(job.level());
        self.types.insert(job.job_type());
        self.skills.insert(job.skill());
    }

    pub fn get(&self, category: Category) -> &DistinctValues {
        match category {
            Category::Level => &self.levels,
            Category::Type => &self.types,
            Category::Skill => &self.skills,
        }
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).is_empty())
    }
}

/// Selectable choices for one category: the wildcard first, then the values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionList {
    pub category: Category,
    pub choices: Vec<String>,
}

/// Option lists for all three selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub level: OptionList,
    pub job_type: OptionList,
    pub skill: OptionList,
}

impl FilterOptions {
    /// Build option lists from the distinct-value sets. Values keep their
    /// first-seen order and are never sorted.
    pub fn collect(sets: &CategorySets) -> Self {
        let list = |category: Category| {
            let values = sets.get(category);
            let mut choices = Vec::with_capacity(values.len() + 1);
            choices.push(NO_FILTER.to_string());
            choices.extend(values.iter().map(str::to_string));
            OptionList { category, choices }
        };

        Self {
            level: list(Category::Level),
            job_type: list(Category::Type),
            skill: list(Category::Skill),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionList> {
        [&self.level, &self.job_type, &self.skill].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(level: &str, job_type: &str, skill: &str) -> Job {
        Job::new("T", job_type, level, skill, "d", "1 hour", "l")
    }

    #[test]
    fn distinct_values_keep_first_seen_order() {
        let mut values = DistinctValues::new();
        assert!(values.insert("Senior"));
        assert!(values.insert("Junior"));
        assert!(!values.insert("Senior"));
        assert!(values.insert("Mid"));

        assert_eq!(values.iter().collect::<Vec<_>>(), vec!["Senior", "Junior", "Mid"]);
        assert_eq!(values.len(), 3);
        assert!(values.contains("Junior"));
        assert!(!values.contains("junior"));
    }

    #[test]
    fn sets_register_each_dimension() {
        let jobs = vec![
            job("Senior", "Full-time", "Rust"),
            job("Junior", "Full-time", "Go"),
            job("Senior", "Contract", "Rust"),
        ];
        let sets = CategorySets::from_jobs(&jobs);

        assert_eq!(
            sets.get(Category::Level).iter().collect::<Vec<_>>(),
            vec!["Senior", "Junior"]
        );
        assert_eq!(
            sets.get(Category::Type).iter().collect::<Vec<_>>(),
            vec!["Full-time", "Contract"]
        );
        assert_eq!(
            sets.get(Category::Skill).iter().collect::<Vec<_>>(),
            vec!["Rust", "Go"]
        );
    }

    #[test]
    fn options_start_with_wildcard_and_are_not_sorted() {
        let jobs = vec![job("Senior", "Part-time", "Zig"), job("Junior", "Contract", "Ada")];
        let options = FilterOptions::collect(&CategorySets::from_jobs(&jobs));

        assert_eq!(options.level.choices, vec![NO_FILTER, "Senior", "Junior"]);
        assert_eq!(options.job_type.choices, vec![NO_FILTER, "Part-time", "Contract"]);
        assert_eq!(options.skill.choices, vec![NO_FILTER, "Zig", "Ada"]);
    }

    #[test]
    fn empty_sets_yield_only_the_wildcard() {
        let sets = CategorySets::new();
        assert!(sets.is_empty());

        let options = FilterOptions::collect(&sets);
        for list in options.iter() {
            assert_eq!(list.choices, vec![NO_FILTER]);
        }
    }

    #[test]
    fn category_reads_matching_field() {
        let j = job("Senior", "Contract", "Rust");
        assert_eq!(Category::Level.value_of(&j), "Senior");
        assert_eq!(Category::Type.value_of(&j), "Contract");
        assert_eq!(Category::Skill.value_of(&j), "Rust");
    }
}
