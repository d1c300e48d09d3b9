//! File-level tests for paretoscatter-io

use approx::assert_relative_eq;
use paretoscatter_core::{Error, PointMatrix};
use paretoscatter_io::*;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

fn sample_front() -> PointMatrix {
    PointMatrix::from_rows(&[
        vec![0.0, 1.0, 0.25],
        vec![0.5, 0.5, 0.125],
        vec![1.0, 0.0, 0.75],
    ])
    .unwrap()
}

#[test]
fn test_read_whitespace_out_file() {
    let mut file = Builder::new().suffix(".out").tempfile().unwrap();
    writeln!(file, "# final population").unwrap();
    writeln!(file, "0.1 0.2 0.7").unwrap();
    writeln!(file, "0.3 0.3 0.4").unwrap();
    file.flush().unwrap();

    let m = read_front(file.path()).unwrap();
    assert_eq!(m.nrows(), 2);
    assert_eq!(m.ncols(), 3);
    assert_relative_eq!(m.as_array()[[1, 2]], 0.4);
}

#[test]
fn test_csv_file_written_and_read_back() {
    let file = Builder::new().suffix(".csv").tempfile().unwrap();
    let front = sample_front();
    write_front(&front, file.path()).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    assert!(text.starts_with("0,1,0.25\n"));
    assert_eq!(read_front(file.path()).unwrap(), front);
}

#[test]
fn test_unknown_extension_detects_delimiter() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "a;b\n1;2\n3;4\n").unwrap();
    file.flush().unwrap();

    let m = read_front(file.path()).unwrap();
    assert_eq!(m.column_vec(1).unwrap(), vec![2.0, 4.0]);
}

#[test]
fn test_missing_file() {
    let err = read_points("/definitely/not/here.out").unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
}
