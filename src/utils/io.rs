use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{Error, Result};
use crate::types::Weight;

#[derive(Parser)]
pub struct Args {
    /// Path to a directory containing edge-list files, or a base path for edge-list files
    #[arg(short, long)]
    prefix: Option<String>,

    /// Path to one or more edge-list CSV files (header: u,v,w)
    #[arg(short, long)]
    file: Option<Vec<String>>,

    /// Write the tour as a " -> " separated label sequence to this file
    #[arg(short, long)]
    pub save_tour: Option<String>,

    /// Write per-leg tour records to this parquet file
    #[arg(long)]
    pub parquet: Option<String>,
}

pub fn enumerate_input_files(args: &Args) -> Result<Vec<PathBuf>> {
    if let Some(files) = &args.file {
        if let Some(prefix) = &args.prefix {
            Ok(files.iter()
                .map(|f| Path::new(prefix).join(f))
                .collect())
        } else {
            Ok(files.iter()
                .map(|f| Path::new(f).to_path_buf())
                .collect())
        }
    } else if let Some(prefix) = &args.prefix {
        let dir_entries = std::fs::read_dir(prefix)?;
        let mut files = Vec::new();
        for entry in dir_entries {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }

        files.sort_by(|a, b| {
            fn split_parts(s: &str) -> Vec<std::result::Result<u64, String>> {
                let mut parts = Vec::new();
                let mut buf = String::new();
                let mut is_digit = None;

                for c in s.chars() {
                    let c = if c == '_' { ' ' } else { c.to_ascii_lowercase() };
                    let current_is_digit = c.is_ascii_digit();

                    match is_digit {
                        Some(prev) if prev != current_is_digit => {
                            if prev {
                                parts.push(Ok(buf.parse::<u64>().unwrap()));
                            } else {
                                parts.push(Err(buf.clone()));
                            }
                            buf.clear();
                        }
                        _ => {}
                    }
                    buf.push(c);
                    is_digit = Some(current_is_digit);
                }

                if !buf.is_empty() {
                    if is_digit == Some(true) {
                        parts.push(Ok(buf.parse::<u64>().unwrap()));
                    } else {
                        parts.push(Err(buf));
                    }
                }

                parts
            }

            let a_key = a.file_name().and_then(|n| n.to_str()).map(split_parts).unwrap_or_default();
            let b_key = b.file_name().and_then(|n| n.to_str()).map(split_parts).unwrap_or_default();

            a_key.cmp(&b_key)
        });

        Ok(files)
    } else {
        Err(Error::invalid_input(
            "Either --file and/or --prefix must be provided",
        ))
    }
}

/// Reads an edge list from a CSV file with a `u,v,w` header (columns may
/// appear in any order). Blank lines are skipped; errors carry the 1-based
/// line number.
pub fn read_csv_edges(path: &Path) -> Result<Vec<(String, String, Weight)>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => return Err(Error::invalid_input("CSV is empty, expected a u,v,w header")),
        }
    };

    let columns: Vec<&str> = header.split(',').map(|h| h.trim()).collect();
    let col = |name: &str| -> Result<usize> {
        columns
            .iter()
            .position(|&h| h == name)
            .ok_or_else(|| {
                Error::invalid_input(format!(
                    "CSV header must contain u,v,w columns, found: {header:?}"
                ))
            })
    };
    let (u_col, v_col, w_col) = (col("u")?, col("v")?, col("w")?);

    let mut edges = Vec::new();
    for (idx, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let lineno = idx + 1;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < columns.len() {
            return Err(Error::invalid_input(format!(
                "line {lineno}: expected {} fields, found {}",
                columns.len(),
                fields.len()
            )));
        }
        let u = fields[u_col].trim();
        let v = fields[v_col].trim();
        if u.is_empty() || v.is_empty() {
            return Err(Error::invalid_input(format!("line {lineno}: empty vertex label")));
        }
        let w: Weight = fields[w_col]
            .trim()
            .parse()
            .map_err(|_| {
                Error::invalid_input(format!(
                    "line {lineno}: invalid weight '{}'",
                    fields[w_col].trim()
                ))
            })?;
        edges.push((u.to_string(), v.to_string(), w));
    }
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_edges_with_reordered_header() {
        let path = write_temp("postroute_io_reordered.csv", "w,u,v\n2.5,A,B\n1,B,C\n");
        let edges = read_csv_edges(&path).unwrap();
        assert_eq!(
            edges,
            vec![
                ("A".to_string(), "B".to_string(), 2.5),
                ("B".to_string(), "C".to_string(), 1.0),
            ]
        );
    }

    #[test]
    fn rejects_missing_header_column() {
        let path = write_temp("postroute_io_bad_header.csv", "u,v\nA,B\n");
        assert!(matches!(read_csv_edges(&path), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn reports_line_number_for_bad_weight() {
        let path = write_temp("postroute_io_bad_weight.csv", "u,v,w\nA,B,1\nB,C,oops\n");
        match read_csv_edges(&path) {
            Err(Error::InvalidInput(message)) => assert!(message.contains("line 3")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}
