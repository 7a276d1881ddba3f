//! Query-string representation of an [`UploadsFilter`].
//!
//! Only criteria that are set produce components, so the "no filter" value
//! encodes to nothing. Several filters can share one query string by giving
//! each a distinct prefix.

use serde::Serialize;
use tracing::debug;
use tracing::trace;
use url::form_urlencoded;

use crate::config::CrashReportParam;
use crate::error::FilterError;
use crate::error::Result;
use crate::filter::UploadsFilter;
use crate::filter::format_timestamp;
use crate::filter::parse_timestamp;

const BRANCHES: &str = "branches[]";
const CREATED_BEFORE: &str = "createdBefore";
const CREATED_AFTER: &str = "createdAfter";
const FAILURE_MESSAGE: &str = "failureMessage";
pub const ONLY_FAILURES_WITH_CRASH_REPORTS: &str = "onlyFailuresWithCrashReports";

const TRUE: &str = "true";
const FALSE: &str = "false";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryComponent {
    pub key: String,
    pub value: String,
}

impl QueryComponent {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The concrete parameter names for one filter instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamNames {
    pub prefix: String,
    pub branches: String,
    pub created_before: String,
    pub created_after: String,
    pub failure_message: String,
    pub only_failures_with_crash_reports: String,
}

impl ParamNames {
    pub fn new(prefix: &str, crash_report_param: CrashReportParam) -> Self {
        let only_failures_with_crash_reports = match crash_report_param {
            CrashReportParam::Global => ONLY_FAILURES_WITH_CRASH_REPORTS.to_string(),
            CrashReportParam::Prefixed => format!("{prefix}{ONLY_FAILURES_WITH_CRASH_REPORTS}"),
        };
        Self {
            prefix: prefix.to_string(),
            branches: format!("{prefix}{BRANCHES}"),
            created_before: format!("{prefix}{CREATED_BEFORE}"),
            created_after: format!("{prefix}{CREATED_AFTER}"),
            failure_message: format!("{prefix}{FAILURE_MESSAGE}"),
            only_failures_with_crash_reports,
        }
    }

    /// Names for `prefix` with the crash-report flag kept global.
    pub fn with_prefix(prefix: &str) -> Self {
        Self::new(prefix, CrashReportParam::Global)
    }
}

impl Default for ParamNames {
    fn default() -> Self {
        Self::with_prefix("")
    }
}

/// Encode `filter` as ordered query components.
pub fn encode(filter: &UploadsFilter, names: &ParamNames) -> Vec<QueryComponent> {
    let mut components: Vec<QueryComponent> = filter
        .branches()
        .iter()
        .map(|branch| QueryComponent::new(&names.branches, branch))
        .collect();

    if let Some(created_before) = filter.created_before() {
        components.push(QueryComponent::new(
            &names.created_before,
            format_timestamp(created_before),
        ));
    }
    if let Some(created_after) = filter.created_after() {
        components.push(QueryComponent::new(
            &names.created_after,
            format_timestamp(created_after),
        ));
    }
    if let Some(failure_message) = filter.failure_message() {
        components.push(QueryComponent::new(&names.failure_message, failure_message));
    }
    if filter.only_failures_with_crash_reports() {
        components.push(QueryComponent::new(
            &names.only_failures_with_crash_reports,
            TRUE,
        ));
    }

    components
}

/// Rebuild a filter from query components.
///
/// Keys that don't belong to `names` are ignored. Empty scalar values are
/// treated as absent, which is what a submitted form sends for blank inputs.
pub fn decode(components: &[QueryComponent], names: &ParamNames) -> Result<UploadsFilter> {
    let mut filter = UploadsFilter::new();

    for QueryComponent { key, value } in components {
        if *key == names.branches {
            filter = filter.with_branch(value.as_str());
        } else if *key == names.created_before {
            filter = filter.with_created_before(decode_timestamp(key, value)?);
        } else if *key == names.created_after {
            filter = filter.with_created_after(decode_timestamp(key, value)?);
        } else if *key == names.failure_message {
            filter = filter.with_failure_message(Some(value.as_str()));
        } else if *key == names.only_failures_with_crash_reports {
            filter = filter.with_only_failures_with_crash_reports(decode_flag(key, value)?);
        } else {
            trace!(key = %key, prefix = %names.prefix, "ignoring query key");
        }
    }

    debug!(prefix = %names.prefix, ?filter, "decoded uploads filter");
    Ok(filter)
}

fn decode_timestamp(key: &str, value: &str) -> Result<Option<chrono::DateTime<chrono::Utc>>> {
    if value.is_empty() {
        return Ok(None);
    }
    parse_timestamp(key, value).map(Some)
}

fn decode_flag(key: &str, value: &str) -> Result<bool> {
    match value {
        TRUE => Ok(true),
        FALSE | "" => Ok(false),
        other => Err(FilterError::validation(
            key,
            other,
            "expected \"true\" or \"false\"",
        )),
    }
}

/// Render components as `application/x-www-form-urlencoded` text, without a leading `?`.
pub fn to_query_string(components: &[QueryComponent]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for component in components {
        serializer.append_pair(&component.key, &component.value);
    }
    serializer.finish()
}

/// Split a raw query string into components. A leading `?` is ignored.
pub fn parse_query_string(raw: &str) -> Vec<QueryComponent> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    form_urlencoded::parse(raw.as_bytes())
        .map(|(key, value)| QueryComponent::new(key.into_owned(), value.into_owned()))
        .collect()
}
