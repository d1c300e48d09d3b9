//! I/O operations for Pareto fronts
//!
//! This crate reads and writes objective vectors stored as delimited text,
//! the format most optimizers dump their final fronts in.

pub mod delimited;

pub use delimited::*;

use paretoscatter_core::{PointMatrix, Result};
use std::path::Path;

/// Trait for reading point matrices from files
pub trait PointMatrixReader {
    fn read_point_matrix<P: AsRef<Path>>(path: P) -> Result<PointMatrix>;
}

/// Trait for writing point matrices to files
pub trait PointMatrixWriter {
    fn write_point_matrix<P: AsRef<Path>>(points: &PointMatrix, path: P) -> Result<()>;
}

/// Reader/writer for comma separated fronts
pub struct CsvFront;

/// Reader/writer for whitespace separated fronts (`.out`, `.txt`, `.dat`)
pub struct WhitespaceFront;

impl PointMatrixReader for CsvFront {
    fn read_point_matrix<P: AsRef<Path>>(path: P) -> Result<PointMatrix> {
        let options = ReadOptions {
            delimiter: Some(Delimiter::Comma),
        };
        read_points_with_options(path, &options)
    }
}

impl PointMatrixWriter for CsvFront {
    fn write_point_matrix<P: AsRef<Path>>(points: &PointMatrix, path: P) -> Result<()> {
        write_points(points, path, Delimiter::Comma)
    }
}

impl PointMatrixReader for WhitespaceFront {
    fn read_point_matrix<P: AsRef<Path>>(path: P) -> Result<PointMatrix> {
        let options = ReadOptions {
            delimiter: Some(Delimiter::Whitespace),
        };
        read_points_with_options(path, &options)
    }
}

impl PointMatrixWriter for WhitespaceFront {
    fn write_point_matrix<P: AsRef<Path>>(points: &PointMatrix, path: P) -> Result<()> {
        write_points(points, path, Delimiter::Whitespace)
    }
}

/// Auto-detect format and read a front
pub fn read_front<P: AsRef<Path>>(path: P) -> Result<PointMatrix> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("csv") => CsvFront::read_point_matrix(path),
        Some("out") | Some("txt") | Some("dat") => WhitespaceFront::read_point_matrix(path),
        _ => read_points(path),
    }
}

/// Auto-detect format and write a front
pub fn write_front<P: AsRef<Path>>(points: &PointMatrix, path: P) -> Result<()> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("csv") => CsvFront::write_point_matrix(points, path),
        _ => WhitespaceFront::write_point_matrix(points, path),
    }
}
