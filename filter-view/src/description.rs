//! Summary text plus the links shown around it.

use serde::Serialize;

use crate::filter::UploadsFilter;
use crate::model::Repo;
use crate::summary::SummaryOptions;
use crate::summary::describe;
use crate::urls::UrlHelpers;
use crate::view::Link;

const OVERVIEW_LINK_TEXT: &str = "overview";
const FILTER_LINK_TEXT: &str = "Filter results";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionOptions {
    /// Link back to the repo's uploads listing.
    pub display_overview_link: bool,
    /// Where the "Filter results" link points; no link when `None`.
    pub filter_href: Option<String>,
    pub full_sentence_summary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterDescription {
    pub summary: String,
    pub overview_link: Option<Link>,
    pub filter_link: Option<Link>,
}

pub fn assemble_filter_description(
    repo: &Repo,
    filter: &UploadsFilter,
    urls: &UrlHelpers,
    options: DescriptionOptions,
) -> FilterDescription {
    let summary = describe(
        repo,
        filter,
        SummaryOptions {
            full_sentence_summary: options.full_sentence_summary,
        },
    );
    let overview_link = options
        .display_overview_link
        .then(|| Link::new(OVERVIEW_LINK_TEXT, urls.href_for_uploads(repo, filter)));
    let filter_link = options
        .filter_href
        .map(|href| Link::new(FILTER_LINK_TEXT, href));

    FilterDescription {
        summary,
        overview_link,
        filter_link,
    }
}
