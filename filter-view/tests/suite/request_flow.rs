use pretty_assertions::assert_eq;
use testdash_filter_view::DescriptionOptions;
use testdash_filter_view::FilterError;
use testdash_filter_view::FormOptions;
use testdash_filter_view::Repo;
use testdash_filter_view::UploadsFilter;
use testdash_filter_view::ViewConfig;
use testdash_filter_view::assemble_filter_description;
use testdash_filter_view::build_form;
use testdash_filter_view::decode;
use testdash_filter_view::encode;
use testdash_filter_view::parse_query_string;
use testdash_filter_view::to_query_string;

fn available_branches() -> Vec<String> {
    vec!["main".to_string(), "dev".to_string(), "release".to_string()]
}

#[test]
fn query_string_drives_summary_and_form() -> anyhow::Result<()> {
    let config = ViewConfig::default();
    let names = config.param_names("");
    let repo = Repo::new("acme", "widgets");

    let filter = decode(
        &parse_query_string(
            "?branches%5B%5D=main&branches%5B%5D=dev&failureMessage=timeout\
             &onlyFailuresWithCrashReports=true&page=2",
        ),
        &names,
    )?;

    let description = assemble_filter_description(
        &repo,
        &filter,
        &config.url_helpers(),
        DescriptionOptions {
            display_overview_link: false,
            filter_href: Some("/repos/acme/widgets/uploads/filter".to_string()),
            full_sentence_summary: true,
        },
    );
    assert_eq!(
        description.summary,
        "You are currently only viewing uploads belonging to the acme/widgets repo and from \
         branches main, dev, and test failures whose message contains (case-insensitive) \
         \"timeout\" and that have a crash report attached."
    );
    assert_eq!(description.overview_link, None);

    let form = build_form(
        Some(&filter),
        &available_branches(),
        &names,
        FormOptions::new("/repos/acme/widgets/uploads", "Apply"),
    );
    let checked: Vec<&str> = form
        .branch_options
        .checkboxes
        .iter()
        .filter(|checkbox| checkbox.checked)
        .map(|checkbox| checkbox.value.as_str())
        .collect();
    assert_eq!(checked, vec!["main", "dev"]);
    assert_eq!(form.failure_message.value, "timeout");
    assert!(form.only_failures_with_crash_reports.checkboxes[0].checked);
    Ok(())
}

#[test]
fn submitted_form_decodes_to_the_same_filter() -> anyhow::Result<()> {
    let names = ViewConfig::default().param_names("");
    let filter = UploadsFilter::new()
        .with_branch("release")
        .with_failure_message(Some("segfault"));

    let form = build_form(
        Some(&filter),
        &available_branches(),
        &names,
        FormOptions::new("/uploads", "Apply"),
    );

    // What a browser would submit for this form left untouched.
    let mut submitted: Vec<(String, String)> = form
        .branch_options
        .checkboxes
        .iter()
        .filter(|checkbox| checkbox.checked)
        .map(|checkbox| (form.branch_options.name.clone(), checkbox.value.clone()))
        .collect();
    for input in [&form.created_before, &form.created_after, &form.failure_message] {
        submitted.push((input.name.clone(), input.value.clone()));
    }
    let raw = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(submitted)
        .finish();

    assert_eq!(decode(&parse_query_string(&raw), &names)?, filter);
    Ok(())
}

#[test]
fn malformed_timestamp_is_a_validation_error() {
    let names = ViewConfig::default().param_names("");
    let err = decode(&parse_query_string("createdBefore=tomorrow"), &names)
        .expect_err("malformed timestamp rejected");
    match err {
        FilterError::Validation { field, value, .. } => {
            assert_eq!(field, "createdBefore");
            assert_eq!(value, "tomorrow");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_filter_round_trips_to_empty_query() -> anyhow::Result<()> {
    let names = ViewConfig::default().param_names("");
    let raw = to_query_string(&encode(&UploadsFilter::new(), &names));
    assert_eq!(raw, "");
    assert!(decode(&parse_query_string(&raw), &names)?.is_empty());
    Ok(())
}
