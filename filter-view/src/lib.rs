//! # Testdash Filter View
//!
//! View data for the uploads dashboard's filter: the criteria a user picked
//! for CI test uploads and failures, rendered three consistent ways.
//!
//! ## Architecture
//!
//! ```text
//! query string ──parse_query_string──> [QueryComponent] ──decode──> UploadsFilter
//!                                                                     │
//!      ┌──────────────────────────────┬──────────────────────────────┤
//!      │                              │                              │
//!  encode / UrlHelpers          describe (summary)             build_form
//!      │                              │                              │
//!  hrefs, hidden fields     assemble_filter_description          FilterForm
//! ```
//!
//! Everything here is pure: no I/O and no shared state. Callers load the
//! uploads and failures, then hand the filter in.
//!
//! ## Example
//!
//! ```no_run
//! use testdash_filter_view::{ViewConfig, Repo, SummaryOptions};
//! use testdash_filter_view::{decode, describe, parse_query_string};
//!
//! # fn main() -> testdash_filter_view::Result<()> {
//! let config = ViewConfig::default();
//! let names = config.param_names("");
//! let filter = decode(&parse_query_string("?branches[]=main"), &names)?;
//! let summary = describe(
//!     &Repo::new("acme", "widgets"),
//!     &filter,
//!     SummaryOptions { full_sentence_summary: true },
//! );
//! assert_eq!(
//!     summary,
//!     "You are currently only viewing uploads belonging to the acme/widgets repo and from branch main."
//! );
//! # Ok(())
//! # }
//! ```

mod config;
mod description;
mod error;
mod failure;
mod filter;
mod form;
mod format;
mod model;
mod query;
mod summary;
mod urls;
mod view;

pub use config::CrashReportParam;
pub use config::ViewConfig;
pub use description::DescriptionOptions;
pub use description::FilterDescription;
pub use description::assemble_filter_description;
pub use error::FilterError;
pub use error::Result;
pub use failure::FailureViewModel;
pub use filter::UploadsFilter;
pub use filter::format_timestamp;
pub use form::FilterForm;
pub use form::FormOptions;
pub use form::build_form;
pub use form::hidden_fields_for_filter;
pub use format::format_percentage;
pub use format::format_percentage_as_count_suffix;
pub use model::Failure;
pub use model::Repo;
pub use model::TestCase;
pub use model::UploadRefs;
pub use model::branch_name_for_upload;
pub use query::ONLY_FAILURES_WITH_CRASH_REPORTS;
pub use query::ParamNames;
pub use query::QueryComponent;
pub use query::decode;
pub use query::encode;
pub use query::parse_query_string;
pub use query::to_query_string;
pub use summary::SummaryOptions;
pub use summary::describe;
pub use urls::UrlHelpers;
pub use view::Checkbox;
pub use view::CheckboxGroup;
pub use view::Description;
pub use view::DescriptionItem;
pub use view::DescriptionList;
pub use view::Input;
pub use view::Link;
pub use view::SubmitButton;
