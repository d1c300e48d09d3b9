//! End-to-end tests for the `paretoscatter` binary

use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_paretoscatter"))
}

#[test]
fn test_plots_3d_front_to_svg() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("front.out");
    let output = dir.path().join("front.svg");
    std::fs::write(&input, "0.0 0.6 0.8\n0.6 0.0 0.8\n0.8 0.6 0.0\n0.577 0.577 0.577\n").unwrap();

    let status = bin()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--problem", "dtlz2", "--title", "DTLZ2"])
        .status()
        .unwrap();
    assert!(status.success());

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("DTLZ2"));
    assert!(svg.contains("$f_3$"));
}

#[test]
fn test_rejects_single_column_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("front.csv");
    std::fs::write(&input, "1\n2\n3\n").unwrap();

    let output = bin()
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("front.svg"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("at least 2"));
}

#[test]
fn test_rejects_non_svg_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("front.csv");
    std::fs::write(&input, "0,1\n1,0\n").unwrap();

    let status = bin()
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("front.png"))
        .status()
        .unwrap();
    assert!(!status.success());
}
