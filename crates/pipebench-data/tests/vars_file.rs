use pipebench_data::{read_vars_file, write_vars_file, Dataset, Value};
use std::collections::BTreeMap;
use tempfile::tempdir;

#[test]
fn file_round_trip_is_numerically_exact() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mpi.txt");

    let mut vars = BTreeMap::new();
    vars.insert(
        "results_SMALL".to_string(),
        Value::List(vec![0.110787, 0.067214, 0.646959]),
    );
    vars.insert(
        "results_EXTLARGE".to_string(),
        Value::List(vec![149.600611, 82.496043, 28.805096]),
    );
    vars.insert("limit".to_string(), Value::Scalar(150.0));

    write_vars_file(&path, &vars).unwrap();
    let reread = read_vars_file(&path).unwrap();
    assert_eq!(reread, vars);
}

#[test]
fn dataset_written_to_disk_reloads_identically() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.txt");

    let rows: Vec<Vec<f64>> = (1..=4)
        .map(|m| (0..3).map(|i| m as f64 * 10.0 + i as f64 * 0.25).collect())
        .collect();
    let dataset = Dataset::new(vec![1, 2, 3], rows).unwrap();

    write_vars_file(&path, &dataset.to_vars()).unwrap();
    let reloaded = Dataset::from_vars(&read_vars_file(&path).unwrap()).unwrap();
    assert_eq!(reloaded, dataset);
}

#[test]
fn missing_file_reports_the_path() {
    let err = read_vars_file(std::path::Path::new("/nonexistent/mpi.txt")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/mpi.txt"));
}
