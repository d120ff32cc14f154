use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

#[test]
fn generates_tbl_output_for_every_tpch_table() {
    let temp_dir = tempdir().expect("failed to create temporary directory");

    Command::cargo_bin("benchgen-cli")
        .expect("binary not found")
        .arg("--benchmark")
        .arg("tpch")
        .arg("--scale")
        .arg("0.001")
        .arg("--output")
        .arg(temp_dir.path())
        .assert()
        .success();

    for file in ["nation", "region", "part", "supplier", "partsupp", "customer", "orders", "lineitem"] {
        let path = temp_dir.path().join(format!("{file}.tbl"));
        assert!(path.exists(), "expected {path:?} to exist");
        let contents = fs::read_to_string(&path).expect("failed to read generated file");
        assert!(contents.ends_with("|\n"), "{file}.tbl should end each row with '|\\n'");
    }
}

#[test]
fn generates_a_single_table_with_tab_delimited_csv() {
    let temp_dir = tempdir().expect("failed to create temporary directory");

    Command::cargo_bin("benchgen-cli")
        .expect("binary not found")
        .arg("--benchmark")
        .arg("tpch")
        .arg("--table")
        .arg("nation")
        .arg("--scale")
        .arg("0.001")
        .arg("--format")
        .arg("csv")
        .arg("--csv-delimiter")
        .arg("\\t")
        .arg("--output")
        .arg(temp_dir.path())
        .assert()
        .success();

    let path = temp_dir.path().join("nation.csv");
    let contents = fs::read_to_string(path).expect("failed to read generated csv file");
    let mut lines = contents.lines();

    let header = lines.next().expect("missing header line");
    assert!(header.contains('\t'), "expected tab-separated header, got: {header}");
    assert!(!header.contains(','), "header should not contain commas: {header}");

    let first_row = lines.next().expect("missing first data row");
    assert_eq!(first_row.matches('\t').count(), 3, "expected 4 columns in a nation row: {first_row}");
}

#[test]
fn splits_a_table_into_parallel_partitions() {
    let temp_dir = tempdir().expect("failed to create temporary directory");

    Command::cargo_bin("benchgen-cli")
        .expect("binary not found")
        .arg("--benchmark")
        .arg("tpch")
        .arg("--table")
        .arg("orders")
        .arg("--scale")
        .arg("0.001")
        .arg("--parallel")
        .arg("4")
        .arg("--output")
        .arg(temp_dir.path())
        .assert()
        .success();

    for index in 1..=4 {
        let path = temp_dir.path().join(format!("orders-{index}.tbl"));
        assert!(path.exists(), "expected {path:?} to exist");
    }
}

#[test]
fn rejects_an_unknown_table_for_the_chosen_benchmark() {
    let temp_dir = tempdir().expect("failed to create temporary directory");

    Command::cargo_bin("benchgen-cli")
        .expect("binary not found")
        .arg("--benchmark")
        .arg("tpch")
        .arg("--table")
        .arg("store_sales")
        .arg("--output")
        .arg(temp_dir.path())
        .assert()
        .failure();
}

#[test]
fn rejects_cross_table_seed_mode() {
    let temp_dir = tempdir().expect("failed to create temporary directory");

    Command::cargo_bin("benchgen-cli")
        .expect("binary not found")
        .arg("--benchmark")
        .arg("tpch")
        .arg("--scale")
        .arg("0.001")
        .arg("--dbgen-seed-mode")
        .arg("all-tables")
        .arg("--output")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("not implemented"));
}
