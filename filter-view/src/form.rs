//! Editable form mirroring an [`UploadsFilter`].

use serde::Serialize;
use tracing::debug;

use crate::filter::UploadsFilter;
use crate::filter::format_timestamp;
use crate::query::ParamNames;
use crate::query::encode;
use crate::view::Checkbox;
use crate::view::CheckboxGroup;
use crate::view::Input;
use crate::view::SubmitButton;

const BRANCHES_ID_PREFIX: &str = "branches";
const CRASH_REPORTS_ID_PREFIX: &str = "onlyFailuresWithCrashReports";
const CRASH_REPORTS_LABEL: &str = "Only show test failures that have a crash report attached";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOptions {
    pub form_action: String,
    pub submit_button: SubmitButton,
    /// Submitted alongside the filter fields, e.g. another filter's state.
    pub hidden_fields: Vec<Input>,
}

impl FormOptions {
    pub fn new(form_action: impl Into<String>, submit_button_text: impl Into<String>) -> Self {
        Self {
            form_action: form_action.into(),
            submit_button: SubmitButton {
                text: submit_button_text.into(),
            },
            hidden_fields: Vec::new(),
        }
    }

    pub fn with_hidden_fields(mut self, hidden_fields: Vec<Input>) -> Self {
        self.hidden_fields = hidden_fields;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterForm {
    pub form_action: String,
    pub submit_button: SubmitButton,
    pub hidden_fields: Vec<Input>,
    pub branch_options: CheckboxGroup,
    pub created_before: Input,
    pub created_after: Input,
    pub failure_message: Input,
    pub only_failures_with_crash_reports: CheckboxGroup,
}

/// Build the filter form for `filter`, or a blank form when no filter is applied.
///
/// One checkbox is emitted per entry of `available_branches`, in that order.
/// Branches selected in `filter` but missing from `available_branches` do not
/// appear in the form, so submitting it deselects them.
pub fn build_form(
    filter: Option<&UploadsFilter>,
    available_branches: &[String],
    names: &ParamNames,
    options: FormOptions,
) -> FilterForm {
    let selected = filter.map(UploadsFilter::branches).unwrap_or_default();
    let dropped: Vec<&String> = selected
        .iter()
        .filter(|branch| !available_branches.contains(branch))
        .collect();
    if !dropped.is_empty() {
        debug!(
            ?dropped,
            "selected branches are not available; leaving them out of the filter form"
        );
    }

    let checkboxes = available_branches
        .iter()
        .map(|branch| Checkbox {
            label: branch.clone(),
            value: branch.clone(),
            checked: selected.contains(branch),
        })
        .collect();

    let timestamp_value = |timestamp: Option<chrono::DateTime<chrono::Utc>>| {
        timestamp.map(format_timestamp).unwrap_or_default()
    };

    FilterForm {
        form_action: options.form_action,
        submit_button: options.submit_button,
        hidden_fields: options.hidden_fields,
        branch_options: CheckboxGroup {
            id_prefix: BRANCHES_ID_PREFIX.to_string(),
            name: names.branches.clone(),
            checkboxes,
        },
        created_before: Input::new(
            &names.created_before,
            timestamp_value(filter.and_then(UploadsFilter::created_before)),
        ),
        created_after: Input::new(
            &names.created_after,
            timestamp_value(filter.and_then(UploadsFilter::created_after)),
        ),
        failure_message: Input::new(
            &names.failure_message,
            filter
                .and_then(UploadsFilter::failure_message)
                .unwrap_or_default(),
        ),
        only_failures_with_crash_reports: CheckboxGroup {
            id_prefix: CRASH_REPORTS_ID_PREFIX.to_string(),
            name: names.only_failures_with_crash_reports.clone(),
            checkboxes: vec![Checkbox {
                label: CRASH_REPORTS_LABEL.to_string(),
                value: "true".to_string(),
                checked: filter.is_some_and(UploadsFilter::only_failures_with_crash_reports),
            }],
        },
    }
}

/// `filter`'s query components as hidden inputs, for carrying it through another form.
pub fn hidden_fields_for_filter(filter: &UploadsFilter, names: &ParamNames) -> Vec<Input> {
    encode(filter, names)
        .into_iter()
        .map(|component| Input::new(component.key, component.value))
        .collect()
}
