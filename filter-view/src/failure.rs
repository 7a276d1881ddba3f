//! View model for a single test failure's details page.

use serde::Serialize;

use crate::filter::UploadsFilter;
use crate::model::Failure;
use crate::urls::UrlHelpers;
use crate::view::Description;
use crate::view::DescriptionItem;
use crate::view::DescriptionList;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureViewModel {
    pub title: String,
    pub metadata_description_list: DescriptionList,
}

impl FailureViewModel {
    /// Links on the page keep `filter` applied.
    pub fn new(failure: &Failure, filter: &UploadsFilter, urls: &UrlHelpers) -> Self {
        let items = vec![
            DescriptionItem {
                term: "Upload ID".to_string(),
                description: Description::Link {
                    text: failure.upload_id.clone(),
                    href: urls.href_for_upload_details(&failure.upload_id, filter),
                },
            },
            DescriptionItem {
                term: "Test case ID".to_string(),
                description: Description::Link {
                    text: failure.test_case.id.clone(),
                    href: urls.href_for_test_case(&failure.test_case.id, filter),
                },
            },
            DescriptionItem {
                term: "Message".to_string(),
                description: Description::Text {
                    text: failure.message.clone(),
                },
            },
        ];

        Self {
            title: format!("Details of failure {}", failure.id),
            metadata_description_list: DescriptionList { items },
        }
    }
}
