use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, SplitError};

pub const QUERIES_FILE: &str = "queries.txt";
pub const GOLD_FILE: &str = "gold.txt";

/// One query line and the gold line at the same position, kept as raw bytes
/// without their line terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    query: Vec<u8>,
    gold: Vec<u8>,
}

impl Pair {
    pub fn new(query: impl Into<Vec<u8>>, gold: impl Into<Vec<u8>>) -> Self {
        Self {
            query: query.into(),
            gold: gold.into(),
        }
    }

    pub fn query(&self) -> &[u8] {
        &self.query
    }

    pub fn gold(&self) -> &[u8] {
        &self.gold
    }

    /// Display form of the query; invalid UTF-8 shows as U+FFFD.
    pub fn query_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.query)
    }

    pub fn gold_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.gold)
    }
}

/// What to do when the two inputs have different line counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingPolicy {
    Strict,
    Truncate,
}

/// Resolves `queries.txt` and `gold.txt` under `data_dir`, failing on the
/// first one that is missing.
pub fn input_paths(data_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let queries = data_dir.join(QUERIES_FILE);
    let gold = data_dir.join(GOLD_FILE);

    for path in [&queries, &gold] {
        if !path.exists() {
            return Err(SplitError::MissingInput(path.clone()));
        }
    }
    Ok((queries, gold))
}

pub fn read_pairs(queries: &Path, gold: &Path, policy: PairingPolicy) -> Result<Vec<Pair>> {
    let query_lines = read_lines(queries)?;
    let gold_lines = read_lines(gold)?;
    tracing::debug!(
        queries = query_lines.len(),
        gold = gold_lines.len(),
        "read input lines"
    );

    if query_lines.len() != gold_lines.len() {
        match policy {
            PairingPolicy::Strict => {
                return Err(SplitError::LengthMismatch {
                    queries: query_lines.len(),
                    gold: gold_lines.len(),
                });
            }
            PairingPolicy::Truncate => {
                tracing::warn!(
                    queries = query_lines.len(),
                    gold = gold_lines.len(),
                    "input line counts differ, pairing up to the shorter file"
                );
            }
        }
    }

    Ok(query_lines
        .into_iter()
        .zip(gold_lines)
        .map(|(q, g)| Pair::new(q, g))
        .collect())
}

/// Reads `path` as raw lines split on `\n`, dropping a trailing `\r`. No
/// encoding is assumed.
fn read_lines(path: &Path) -> Result<Vec<Vec<u8>>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    loop {
        let mut line = Vec::new();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Paths of one written split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitFiles {
    pub queries: PathBuf,
    pub gold: PathBuf,
}

/// Writes `{prefix}.queries.txt` and `{prefix}.gold.txt` under `data_dir`,
/// overwriting existing files. Line N of each file comes from pair N.
pub fn write_files(data_dir: &Path, prefix: &str, pairs: &[Pair]) -> Result<SplitFiles> {
    let files = SplitFiles {
        queries: data_dir.join(format!("{prefix}.{QUERIES_FILE}")),
        gold: data_dir.join(format!("{prefix}.{GOLD_FILE}")),
    };

    let mut qf = BufWriter::new(File::create(&files.queries)?);
    let mut gf = BufWriter::new(File::create(&files.gold)?);
    for pair in pairs {
        qf.write_all(&pair.query)?;
        qf.write_all(b"\n")?;
        gf.write_all(&pair.gold)?;
        gf.write_all(b"\n")?;
    }
    // Dropping a BufWriter swallows flush errors.
    qf.flush()?;
    gf.flush()?;

    tracing::debug!(
        prefix,
        pairs = pairs.len(),
        queries = %files.queries.display(),
        gold = %files.gold.display(),
        "wrote split"
    );
    Ok(files)
}
