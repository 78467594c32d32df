use std::borrow::Cow;
use std::io::{self, Write};

use serde::Serialize;

use crate::dataset::{Pair, SplitFiles};
use crate::error::{Result, SplitError};
use crate::runner::RunResult;

pub fn print_result(format: &str, result: &RunResult) -> Result<()> {
    match format {
        "text" => print_text(result),
        "json" => print_json(result),
        other => Err(unknown_format(other)),
    }
}

/// Rejects unknown formats before any file is touched.
pub fn validate_format(format: &str) -> Result<()> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(unknown_format(other)),
    }
}

fn unknown_format(format: &str) -> SplitError {
    SplitError::InvalidArg(format!("Unknown output format: {format}"))
}

fn print_text(result: &RunResult) -> Result<()> {
    let mut out = io::stdout().lock();
    let outcome = &result.outcome;
    writeln!(
        out,
        "Ratio: {} (dev ratio {:.4})",
        result.ratio,
        result.ratio.dev_fraction()
    )?;
    writeln!(out, "Seed: {}", result.seed)?;
    writeln!(out, "Pairs: {}", outcome.total)?;

    if !outcome.sample.is_empty() {
        writeln!(out)?;
        writeln!(out, "First {} pairs:", outcome.sample.len())?;
        for pair in &outcome.sample {
            writeln!(out, "  {:?} -> {:?}", pair.query_lossy(), pair.gold_lossy())?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Dev:   {:>6} pairs ({:.1}%)  {}, {}",
        outcome.dev.count,
        percent(outcome.dev.count, outcome.total),
        outcome.dev.files.queries.display(),
        outcome.dev.files.gold.display()
    )?;
    writeln!(
        out,
        "Test:  {:>6} pairs ({:.1}%)  {}, {}",
        outcome.test.count,
        percent(outcome.test.count, outcome.total),
        outcome.test.files.queries.display(),
        outcome.test.files.gold.display()
    )?;
    Ok(())
}

#[derive(Serialize)]
struct JsonPair<'a> {
    query: Cow<'a, str>,
    gold: Cow<'a, str>,
}

#[derive(Serialize)]
struct JsonSide<'a> {
    count: usize,
    files: &'a SplitFiles,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    ratio: String,
    dev_ratio: f64,
    seed: u64,
    total: usize,
    sample: Vec<JsonPair<'a>>,
    dev: JsonSide<'a>,
    test: JsonSide<'a>,
}

fn print_json(result: &RunResult) -> Result<()> {
    let outcome = &result.outcome;
    let json_result = JsonResult {
        ratio: result.ratio.to_string(),
        dev_ratio: result.ratio.dev_fraction(),
        seed: result.seed,
        total: outcome.total,
        sample: outcome.sample.iter().map(json_pair).collect(),
        dev: JsonSide {
            count: outcome.dev.count,
            files: &outcome.dev.files,
        },
        test: JsonSide {
            count: outcome.test.count,
            files: &outcome.test.files,
        },
    };
    let out = serde_json::to_string_pretty(&json_result)?;
    println!("{out}");
    Ok(())
}

fn json_pair(pair: &Pair) -> JsonPair<'_> {
    JsonPair {
        query: pair.query_lossy(),
        gold: pair.gold_lossy(),
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total > 0 {
        100.0 * part as f64 / total as f64
    } else {
        0.0
    }
}
