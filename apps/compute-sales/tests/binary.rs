//! Exit codes and output streams of the built binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn compute_sales(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_compute-sales"))
        .args(args)
        .current_dir(dir)
        .env_remove("SALES_RESULTS_FILE")
        .env_remove("SALES_LOG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_report_goes_to_stdout_and_results_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("prices.json"), r#"{"apple": 1.50}"#).unwrap();
    fs::write(
        dir.path().join("sales.json"),
        r#"[{"product": "apple", "quantity": 2}, {"product": "milk", "quantity": 1}]"#,
    )
    .unwrap();

    let output = compute_sales(dir.path(), &["prices.json", "sales.json"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let written = fs::read_to_string(dir.path().join("SalesResults.txt")).unwrap();
    assert_eq!(stdout, written);
    assert!(stdout.starts_with("Total de ventas: $3.00\n"));
    assert!(stdout.ends_with("Producto 'milk' no encontrado en el catálogo.\n"));
}

#[test]
fn test_load_failure_exits_1_with_nothing_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("prices.json"), r#"{"apple": 1.50,"#).unwrap();
    fs::write(dir.path().join("sales.json"), "[]").unwrap();

    let output = compute_sales(dir.path(), &["prices.json", "sales.json"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: El archivo prices.json no tiene un formato JSON válido."));
    assert!(stderr.contains("No se puede continuar debido a errores en los archivos JSON."));
    assert!(!dir.path().join("SalesResults.txt").exists());
}

#[test]
fn test_missing_documents_exit_1() {
    let dir = tempfile::tempdir().unwrap();

    let output = compute_sales(dir.path(), &["prices.json", "sales.json"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: No se encontró el archivo prices.json."));
    assert!(stderr.contains("Error: No se encontró el archivo sales.json."));
}

#[test]
fn test_wrong_argument_count_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("prices.json"), r#"{"apple": 1.50}"#).unwrap();

    let output = compute_sales(dir.path(), &["prices.json"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("SalesResults.txt").exists());
}
