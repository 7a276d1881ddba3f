//! Natural-language summary of an [`UploadsFilter`].
//!
//! Two clause lists are built in a fixed order, one describing uploads and one
//! describing test failures. Each entry is either absent (its criterion is
//! unset) or a finished clause; the lists are then filtered, joined and
//! optionally wrapped into a sentence.

use crate::filter::UploadsFilter;
use crate::filter::format_timestamp;
use crate::model::Repo;

const SENTENCE_LEAD: &str = "You are currently only viewing ";
const CLAUSE_JOINER: &str = " and ";
const SECTION_JOINER: &str = ", and ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Wrap the fragment into a capitalized sentence ending in a period.
    pub full_sentence_summary: bool,
}

/// Describe what `filter` restricts the view to. Empty for the "no filter" value.
pub fn describe(repo: &Repo, filter: &UploadsFilter, options: SummaryOptions) -> String {
    // The repo clause alone is not a restriction worth reporting.
    if filter.is_empty() {
        return String::new();
    }

    let sections = [
        section("uploads", uploads_clauses(repo, filter)),
        section("test failures", failures_clauses(filter)),
    ];
    let fragment = sections.into_iter().flatten().collect::<Vec<_>>().join(SECTION_JOINER);

    if options.full_sentence_summary {
        format!("{SENTENCE_LEAD}{fragment}.")
    } else {
        fragment
    }
}

pub(crate) fn uploads_clauses(repo: &Repo, filter: &UploadsFilter) -> [Option<String>; 4] {
    let branches = filter.branches();
    [
        Some(format!("belonging to the {} repo", repo.description())),
        (!branches.is_empty()).then(|| {
            format!(
                "from {} {}",
                pluralize("branch", branches.len()),
                branches.join(", ")
            )
        }),
        filter
            .created_before()
            .map(|ts| format!("which were uploaded before {}", format_timestamp(ts))),
        filter
            .created_after()
            .map(|ts| format!("which were uploaded after {}", format_timestamp(ts))),
    ]
}

pub(crate) fn failures_clauses(filter: &UploadsFilter) -> [Option<String>; 2] {
    [
        filter
            .failure_message()
            .map(|message| format!("whose message contains (case-insensitive) \"{message}\"")),
        filter
            .only_failures_with_crash_reports()
            .then(|| "that have a crash report attached".to_string()),
    ]
}

fn section<const N: usize>(subject: &str, clauses: [Option<String>; N]) -> Option<String> {
    let clauses: Vec<String> = clauses.into_iter().flatten().collect();
    if clauses.is_empty() {
        None
    } else {
        Some(format!("{subject} {}", clauses.join(CLAUSE_JOINER)))
    }
}

fn pluralize(noun: &str, count: usize) -> String {
    if count == 1 {
        noun.to_string()
    } else if ["s", "x", "z", "ch", "sh"].iter().any(|end| noun.ends_with(end)) {
        format!("{noun}es")
    } else {
        format!("{noun}s")
    }
}
