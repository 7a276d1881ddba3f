use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use chrono::SecondsFormat;
use chrono::SubsecRound;
use chrono::Utc;
use serde::Serialize;

use crate::error::FilterError;
use crate::error::Result;

/// Criteria narrowing which uploads and test failures are in view.
///
/// The default value is the "no filter" value. Construction normalizes the
/// criteria so that every value survives a trip through the query codec:
/// branches are distinct and non-empty, timestamps carry millisecond
/// precision, and an empty failure message means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadsFilter {
    branches: Vec<String>,
    created_before: Option<DateTime<Utc>>,
    created_after: Option<DateTime<Utc>>,
    failure_message: Option<String>,
    only_failures_with_crash_reports: bool,
}

impl UploadsFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the branch list. Order is kept; repeats and empty names are dropped.
    pub fn with_branches<I, S>(mut self, branches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.branches.clear();
        for branch in branches {
            self = self.with_branch(branch);
        }
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        let branch = branch.into();
        if !branch.is_empty() && !self.branches.contains(&branch) {
            self.branches.push(branch);
        }
        self
    }

    pub fn with_created_before(mut self, created_before: Option<DateTime<Utc>>) -> Self {
        self.created_before = created_before.map(|ts| ts.trunc_subsecs(3));
        self
    }

    pub fn with_created_after(mut self, created_after: Option<DateTime<Utc>>) -> Self {
        self.created_after = created_after.map(|ts| ts.trunc_subsecs(3));
        self
    }

    pub fn with_failure_message<S: Into<String>>(mut self, failure_message: Option<S>) -> Self {
        self.failure_message = failure_message
            .map(Into::into)
            .filter(|message| !message.is_empty());
        self
    }

    pub fn with_only_failures_with_crash_reports(mut self, only: bool) -> Self {
        self.only_failures_with_crash_reports = only;
        self
    }

    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    pub fn created_before(&self) -> Option<DateTime<Utc>> {
        self.created_before
    }

    pub fn created_after(&self) -> Option<DateTime<Utc>> {
        self.created_after
    }

    pub fn failure_message(&self) -> Option<&str> {
        self.failure_message.as_deref()
    }

    pub fn only_failures_with_crash_reports(&self) -> bool {
        self.only_failures_with_crash_reports
    }

    /// True for the "no filter" value.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Canonical ISO-8601 form used in summaries, query strings and form values,
/// e.g. `2024-03-01T12:00:00.000Z`.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Accepts RFC 3339 with any offset, or a bare `YYYY-MM-DD` date (midnight UTC).
///
/// UTC timestamps with signed or 5+ digit years (`+10000-01-01T00:00:00.000Z`,
/// `-0001-...`) are accepted too, since [`format_timestamp`] emits them.
pub(crate) fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.fZ") {
        return Ok(timestamp.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(FilterError::validation(
        field,
        raw,
        "expected an ISO-8601 timestamp",
    ))
}
