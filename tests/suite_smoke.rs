use prime_bench::JsonlWriter;
use prime_bench::suite_cmd;

#[test]
fn test_suite_runs_all_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("suite.yaml");
    let jsonl_path = dir.path().join("runs.jsonl");
    let summary_path = dir.path().join("summary.json");

    std::fs::write(
        &config_path,
        "bounds:\n  - 100\n  - 1000\niterations: 2\nwarmup: 1\n",
    )
    .unwrap();

    suite_cmd::run(
        config_path,
        Some(jsonl_path.clone()),
        Some(summary_path.clone()),
    )
    .expect("suite should succeed");

    // 2 bounds x 2 engines
    let writer = JsonlWriter::new(&jsonl_path);
    assert_eq!(writer.count().unwrap(), 4);

    let scalar_records = writer.read_filtered(Some("scalar")).unwrap();
    assert_eq!(scalar_records.len(), 2);

    let bytes = std::fs::read(&summary_path).unwrap();
    let summary: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let results = summary["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["bound"], 100);
    assert_eq!(results[1]["bound"], 1000);
    assert!(results.iter().all(|r| r["agreement"] == true));
}

#[test]
fn test_suite_empty_bounds_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("suite.yaml");
    std::fs::write(&config_path, "bounds: []\n").unwrap();

    let result = suite_cmd::run(config_path, None, None);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("no bounds"));
}

#[test]
fn test_suite_missing_config_errors() {
    let result = suite_cmd::run("/nonexistent/suite.yaml".into(), None, None);
    assert!(result.is_err());
}
