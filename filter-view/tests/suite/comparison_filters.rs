use pretty_assertions::assert_eq;
use testdash_filter_view::FormOptions;
use testdash_filter_view::QueryComponent;
use testdash_filter_view::UploadsFilter;
use testdash_filter_view::ViewConfig;
use testdash_filter_view::build_form;
use testdash_filter_view::decode;
use testdash_filter_view::encode;
use testdash_filter_view::hidden_fields_for_filter;
use testdash_filter_view::parse_query_string;
use testdash_filter_view::to_query_string;

#[test]
fn two_prefixed_filters_share_one_query_string() -> anyhow::Result<()> {
    let config = ViewConfig::from_toml_str(r#"crash_report_param = "prefixed""#)?;
    let base_names = config.param_names("base_");
    let compare_names = config.param_names("compare_");

    let base = UploadsFilter::new()
        .with_branch("main")
        .with_only_failures_with_crash_reports(true);
    let compare = UploadsFilter::new()
        .with_branch("dev")
        .with_failure_message(Some("flaky"));

    let mut components: Vec<QueryComponent> = encode(&base, &base_names);
    components.extend(encode(&compare, &compare_names));
    let raw = to_query_string(&components);

    let parsed = parse_query_string(&raw);
    assert_eq!(decode(&parsed, &base_names)?, base);
    assert_eq!(decode(&parsed, &compare_names)?, compare);
    Ok(())
}

#[test]
fn global_crash_report_flag_is_shared_between_prefixes() -> anyhow::Result<()> {
    let config = ViewConfig::default();
    let base_names = config.param_names("base_");
    let compare_names = config.param_names("compare_");

    let base = UploadsFilter::new().with_only_failures_with_crash_reports(true);
    let parsed = parse_query_string(&to_query_string(&encode(&base, &base_names)));

    assert!(decode(&parsed, &compare_names)?.only_failures_with_crash_reports());
    Ok(())
}

#[test]
fn comparison_form_preserves_base_filter_as_hidden_fields() -> anyhow::Result<()> {
    let config = ViewConfig::from_toml_str(
        r#"
base_path = "/dashboard"
crash_report_param = "prefixed"
"#,
    )?;
    let base_names = config.param_names("base_");
    let compare_names = config.param_names("compare_");
    let base = UploadsFilter::new().with_branches(["main", "release"]);

    let form = build_form(
        None,
        &["main".to_string(), "dev".to_string()],
        &compare_names,
        FormOptions::new("/dashboard/compare", "Compare")
            .with_hidden_fields(hidden_fields_for_filter(&base, &base_names)),
    );

    let hidden: Vec<QueryComponent> = form
        .hidden_fields
        .iter()
        .map(|input| QueryComponent::new(input.name.clone(), input.value.clone()))
        .collect();
    assert_eq!(decode(&hidden, &base_names)?, base);
    assert_eq!(
        form.only_failures_with_crash_reports.name,
        "compare_onlyFailuresWithCrashReports"
    );
    Ok(())
}
