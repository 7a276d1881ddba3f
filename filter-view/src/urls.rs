//! Href construction for pages that carry a filter in their query string.

use crate::config::CrashReportParam;
use crate::filter::UploadsFilter;
use crate::model::Repo;
use crate::query::ParamNames;
use crate::query::encode;
use crate::query::to_query_string;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlHelpers {
    base_path: String,
    names: ParamNames,
}

impl Default for UrlHelpers {
    fn default() -> Self {
        Self::new(String::new(), CrashReportParam::default())
    }
}

impl UrlHelpers {
    pub fn new(base_path: impl Into<String>, crash_report_param: CrashReportParam) -> Self {
        Self {
            base_path: base_path.into(),
            names: ParamNames::new("", crash_report_param),
        }
    }

    /// The uploads listing for `repo`, narrowed by `filter`.
    pub fn href_for_uploads(&self, repo: &Repo, filter: &UploadsFilter) -> String {
        self.href(
            &[
                "repos",
                repo.owner.as_str(),
                repo.name.as_str(),
                "uploads",
            ],
            filter,
        )
    }

    pub fn href_for_upload_details(&self, upload_id: &str, filter: &UploadsFilter) -> String {
        self.href(&["uploads", upload_id], filter)
    }

    pub fn href_for_test_case(&self, test_case_id: &str, filter: &UploadsFilter) -> String {
        self.href(&["test_cases", test_case_id], filter)
    }

    fn href(&self, segments: &[&str], filter: &UploadsFilter) -> String {
        let mut href = self.base_path.clone();
        for segment in segments {
            href.push('/');
            href.push_str(&urlencoding::encode(segment));
        }
        let query = to_query_string(&encode(filter, &self.names));
        if !query.is_empty() {
            href.push('?');
            href.push_str(&query);
        }
        href
    }
}
