mod common;

use common::utilities::{fixture_path, load_registry};
use flowly_core::agents::answer::Answers;
use flowly_core::schema::registry::DatasetRegistry;
use flowly_core::schema::{datasets, library};
use flowly_core::{classify_and_resolve, CoreError, Intent};

#[test]
fn substituted_datasets_flow_through_answers() {
    let answers = Answers::new(load_registry("custom.json")).expect("all datasets present");

    let outcome = classify_and_resolve(&answers, "销售趋势", "id");
    let vis = outcome.visualization().unwrap();
    let names: Vec<&str> = vis.series.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Jan", "Feb"]);
    assert_eq!(vis.series[1].value, 2.0);
}

#[test]
fn missing_dataset_is_reported_at_construction() {
    let err = Answers::new(load_registry("partial.json")).unwrap_err();
    match err {
        CoreError::MissingDataset { intent, dataset } => {
            assert_eq!(intent, Intent::SalesTrendWeekly);
            assert_eq!(dataset, "week_sales");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_reports_the_path_on_failure() {
    let path = fixture_path("datasets/does_not_exist.json");
    let err = DatasetRegistry::load(&path).unwrap_err();
    assert!(err.to_string().contains("does_not_exist.json"));
}

#[test]
fn registry_keeps_insertion_order() {
    let reg = load_registry("custom.json");
    let names: Vec<&str> = reg.names().collect();
    assert_eq!(names, ["sales", "week_sales", "traffic", "distribution", "conversion"]);
}

#[test]
fn sample_items_fall_back_to_empty_series_for_unknown_datasets() {
    let items = library::sample_visualizations(&load_registry("partial.json"));
    assert_eq!(items.len(), 6);
    assert_eq!(items[0].series.len(), 1);
    assert!(items[1].series.is_empty());
}

#[test]
fn templates_and_dashboards() {
    let templates = library::templates(&datasets::builtin());
    let ids: Vec<&str> = templates.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t1", "t2", "t3"]);
    assert!(templates.iter().all(|t| t.tags.contains("模板")));

    let names: Vec<String> = library::dashboards().into_iter().map(|d| d.name).collect();
    assert_eq!(names, ["销售概览", "用户分析", "产品分析", "月度报告"]);
}
