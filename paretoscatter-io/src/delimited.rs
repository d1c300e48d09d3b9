//! Delimited text front files
//!
//! Objective vectors dumped by optimizers are plain text, one point per line:
//! - auto-detection of delimiters (comma, semicolon, tab, whitespace)
//! - `#` comments and blank lines are skipped
//! - an optional non-numeric header line is skipped

use log::debug;
use paretoscatter_core::{Error, PointMatrix, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Supported delimiters for front files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Semicolon,
    /// Tabs, also accepting lines separated by spaces
    Tab,
    /// Any run of spaces or tabs
    Whitespace,
}

impl Delimiter {
    /// Detect the delimiter used by a line of text
    pub fn detect_from_line(line: &str) -> Self {
        let counts = [
            (line.matches(',').count(), Delimiter::Comma),
            (line.matches(';').count(), Delimiter::Semicolon),
            (line.matches('\t').count(), Delimiter::Tab),
        ];

        counts
            .iter()
            .filter(|(count, _)| *count > 0)
            .max_by_key(|(count, _)| *count)
            .map(|(_, delimiter)| *delimiter)
            .unwrap_or(Delimiter::Whitespace)
    }

    /// Split a line into trimmed fields
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Delimiter::Comma => line.split(',').map(str::trim).collect(),
            Delimiter::Semicolon => line.split(';').map(str::trim).collect(),
            Delimiter::Tab | Delimiter::Whitespace => line.split_whitespace().collect(),
        }
    }

    /// Separator written between fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Semicolon => ";",
            Delimiter::Tab => "\t",
            Delimiter::Whitespace => " ",
        }
    }
}

/// Options for reading front files
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Force a delimiter instead of detecting it from the first data line
    pub delimiter: Option<Delimiter>,
}

fn is_comment_or_blank(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// A header names every column, so none of its fields is a number
fn is_header(fields: &[&str]) -> bool {
    fields.iter().all(|f| f.parse::<f64>().is_err())
}

/// Parse front data from any reader
pub fn read_points_from<R: BufRead>(reader: R, options: &ReadOptions) -> Result<PointMatrix> {
    let mut delimiter = options.delimiter;
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut first_data_line = true;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if is_comment_or_blank(&line) {
            continue;
        }

        let delim = *delimiter.get_or_insert_with(|| Delimiter::detect_from_line(&line));
        let fields = delim.split(&line);

        if first_data_line {
            first_data_line = false;
            if is_header(&fields) {
                debug!("skipping header on line {}", line_no + 1);
                continue;
            }
        }

        let row = fields
            .iter()
            .map(|f| {
                f.parse::<f64>().map_err(|_| {
                    Error::InvalidData(format!(
                        "line {}: cannot parse '{}' as a number",
                        line_no + 1,
                        f
                    ))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(Error::InvalidData(format!(
                    "line {}: expected {} values, found {}",
                    line_no + 1,
                    first.len(),
                    row.len()
                )));
            }
        }
        rows.push(row);
    }

    debug!(
        "read {} points of dimension {}",
        rows.len(),
        rows.first().map_or(0, Vec::len)
    );
    PointMatrix::from_rows(&rows)
}

/// Parse front data held in a string
pub fn parse_points(text: &str) -> Result<PointMatrix> {
    read_points_from(text.as_bytes(), &ReadOptions::default())
}

/// Read a front file, detecting the delimiter
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<PointMatrix> {
    read_points_with_options(path, &ReadOptions::default())
}

pub fn read_points_with_options<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<PointMatrix> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::InvalidData(format!("file not found: {}", path.display()))
        } else {
            Error::Io(e)
        }
    })?;
    read_points_from(BufReader::new(file), options)
}

/// Write a point matrix to any writer, one point per line
pub fn write_points_to<W: Write>(mut writer: W, points: &PointMatrix, delimiter: Delimiter) -> Result<()> {
    for row in points.as_array().rows() {
        let line = row
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(delimiter.as_str());
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a front file
pub fn write_points<P: AsRef<Path>>(points: &PointMatrix, path: P, delimiter: Delimiter) -> Result<()> {
    let file = File::create(path)?;
    write_points_to(BufWriter::new(file), points, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(Delimiter::detect_from_line("1,2,3"), Delimiter::Comma);
        assert_eq!(Delimiter::detect_from_line("1;2;3"), Delimiter::Semicolon);
        assert_eq!(Delimiter::detect_from_line("1\t2\t3"), Delimiter::Tab);
        assert_eq!(Delimiter::detect_from_line("1  2 3"), Delimiter::Whitespace);
    }

    #[test]
    fn test_parse_whitespace_with_comments() {
        let text = "# generation 250\n0.1  0.9\n\n0.5 0.5\n0.9\t0.1\n";
        let m = parse_points(text).unwrap();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 2);
        assert_eq!(m.column_vec(0).unwrap(), vec![0.1, 0.5, 0.9]);
    }

    #[test]
    fn test_parse_csv_with_header() {
        let text = "f1,f2,f3\n1.0,2.0,3.0\n4.0,5.0,6.0\n";
        let m = parse_points(text).unwrap();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.column_vec(2).unwrap(), vec![3.0, 6.0]);
    }

    #[test]
    fn test_parse_ragged_rows() {
        let err = parse_points("1 2 3\n4 5\n").unwrap_err();
        match err {
            Error::InvalidData(msg) => assert!(msg.contains("line 2")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_bad_number() {
        let err = parse_points("1 2\n3 x\n").unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_typo_in_first_row_is_not_a_header() {
        let err = parse_points("0.1 0.2 0.3x\n0.4 0.5 0.6\n").unwrap_err();
        match err {
            Error::InvalidData(msg) => assert!(msg.contains("line 1")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_tab_file_with_space_separated_lines() {
        let m = parse_points("0.1\t0.9\n0.5 0.5\n0.9\t 0.1\n").unwrap();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.column_vec(1).unwrap(), vec![0.9, 0.5, 0.1]);
    }

    #[test]
    fn test_forced_delimiter() {
        let options = ReadOptions {
            delimiter: Some(Delimiter::Semicolon),
        };
        let m = read_points_from("1;2\n3;4\n".as_bytes(), &options).unwrap();
        assert_eq!(m.ncols(), 2);
    }

    #[test]
    fn test_empty_input() {
        let m = parse_points("# nothing here\n").unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn test_write_to_buffer() {
        let m = parse_points("1 2\n3 4\n").unwrap();
        let mut buf = Vec::new();
        write_points_to(&mut buf, &m, Delimiter::Comma).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1,2\n3,4\n");
    }
}
