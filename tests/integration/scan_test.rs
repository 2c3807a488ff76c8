//! End-to-end scans over a Perspective-like project tree

use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};
use viewscan::{scan_views, LabelStrategy, ReportRow, ScanConfig};

const TABLE_VIEW: &str = r#"{
  "custom": {},
  "params": {},
  "root": {
    "meta": {"name": "root"},
    "children": [
      {
        "meta": {"name": "Table"},
        "propConfig": {
          "props.data": {
            "binding": {
              "type": "query",
              "config": {"queryPath": "uspGetTasklistGroupEntity"}
            }
          }
        }
      },
      {
        "meta": {"name": "Chart"},
        "events": {"dom": {"onClick": {"config": {"script": "system.db.runNamedQuery('umGetCBPChartData')"}}}}
      }
    ]
  }
}"#;

const POPUP_VIEW: &str = r#"{
  "root": {
    "children": [
      {"props": {"text": "uspAdhocHourAdd"}},
      {"meta": {"name": "Save"}, "scripts": ["x = 1", "system.db.runNamedQuery('uspAdhocHourAdd', {})"]}
    ]
  }
}"#;

fn project() -> TempDir {
    let tmp = tempdir().unwrap();
    let views = tmp.path().join("views");
    write_view(&views.join("Plant/Line1/Reports/Tasks"), TABLE_VIEW);
    write_view(&views.join("Plant/Line1/Popups/Hours"), POPUP_VIEW);
    write_view(&views.join("Plant/Line1/Popups/Corrupt"), r#"{"root": "#);
    tmp
}

fn write_view(dir: &Path, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("view.json"), content).unwrap();
}

fn read_rows(path: &Path) -> Vec<ReportRow> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.deserialize().map(|row| row.unwrap()).collect()
}

fn config(tmp: &TempDir, targets: &[&str]) -> (ScanConfig, PathBuf) {
    let output = tmp.path().join("out/results.csv");
    let mut config = ScanConfig::new(
        tmp.path().join("views"),
        targets.iter().map(|t| t.to_string()).collect(),
    );
    config.output_path = output.clone();
    (config, output)
}

#[test]
fn report_lists_every_match_in_order() {
    let tmp = project();
    let (config, output) = config(
        &tmp,
        &["uspGetTasklistGroupEntity", "uspAdhocHourAdd", "umGetCBPChartData"],
    );

    let stats = scan_views(config).unwrap();

    let rows = read_rows(&output);
    let flat: Vec<(&str, &str, &str)> = rows
        .iter()
        .map(|r| (r.target.as_str(), r.location.as_str(), r.key_path.as_str()))
        .collect();
    assert_eq!(
        flat,
        vec![
            (
                "uspGetTasklistGroupEntity",
                "Plant/Line1/Reports/Tasks/root/Table",
                "root/children/0/propConfig/props.data/binding/config/queryPath"
            ),
            (
                "uspAdhocHourAdd",
                "Plant/Line1/Popups/Hours/",
                "root/children/0/props/text"
            ),
            (
                "uspAdhocHourAdd",
                "Plant/Line1/Popups/Hours/Save",
                "root/children/1/scripts/1"
            ),
            (
                "umGetCBPChartData",
                "Plant/Line1/Reports/Tasks/root/Chart",
                "root/children/1/events/dom/onClick/config/script"
            ),
        ]
    );

    assert_eq!(stats.files_found, 3);
    assert_eq!(stats.pairs_failed, 3);
    assert_eq!(stats.pairs_searched, 6);
    assert_eq!(stats.matches, 4);
}

#[test]
fn root_relative_labels_handle_shallow_trees() {
    let tmp = tempdir().unwrap();
    write_view(&tmp.path().join("views/Home"), POPUP_VIEW);
    let (mut config, output) = config(&tmp, &["uspAdhocHourAdd"]);
    config.label = LabelStrategy::RootRelative;

    scan_views(config).unwrap();

    let locations: Vec<String> = read_rows(&output).into_iter().map(|r| r.location).collect();
    assert_eq!(locations, vec!["Home/", "Home/Save"]);
}

#[test]
fn scan_without_matches_writes_header_only() {
    let tmp = project();
    let (config, output) = config(&tmp, &["noSuchQuery"]);

    let stats = scan_views(config).unwrap();
    assert_eq!(stats.matches, 0);
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "Target String,Parent Name,Key Path\n"
    );
}

#[test]
fn duplicate_targets_are_not_deduplicated() {
    let tmp = project();
    let (config, output) = config(&tmp, &["uspGetTasklistGroupEntity", "uspGetTasklistGroupEntity"]);

    scan_views(config).unwrap();
    assert_eq!(read_rows(&output).len(), 2);
}

#[test]
fn strict_scan_fails_on_corrupt_view() {
    let tmp = project();
    let (mut config, _) = config(&tmp, &["uspAdhocHourAdd"]);
    config.strict = true;

    let err = scan_views(config).unwrap_err();
    assert!(err.is_per_file());
}
