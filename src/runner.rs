use std::path::Path;

use crate::cli::Cli;
use crate::dataset::{self, Pair, PairingPolicy, SplitFiles};
use crate::error::Result;
use crate::random::{SeededSource, UniformSource};
use crate::ratio::SplitRatio;
use crate::splitter::split;

pub struct SplitSide {
    pub count: usize,
    pub files: SplitFiles,
}

pub struct SplitOutcome {
    pub total: usize,
    pub sample: Vec<Pair>,
    pub dev: SplitSide,
    pub test: SplitSide,
}

pub struct RunResult {
    pub ratio: SplitRatio,
    pub seed: u64,
    pub outcome: SplitOutcome,
}

pub fn run_command(cli: &Cli) -> Result<RunResult> {
    let mut source = match cli.seed {
        Some(seed) => SeededSource::new(seed),
        None => SeededSource::fresh(),
    };
    tracing::debug!(seed = source.seed(), ratio = %cli.ratio, "starting split");

    let outcome = split_dataset(
        &cli.data_dir,
        cli.ratio.dev_fraction(),
        cli.pairing_policy(),
        cli.sample,
        &mut source,
    )?;

    Ok(RunResult {
        ratio: cli.ratio,
        seed: source.seed(),
        outcome,
    })
}

/// Reads the input pair under `data_dir`, partitions it with draws from
/// `source`, and writes the dev and test file pairs next to the inputs.
///
/// Nothing is written unless both inputs exist and pair up under `policy`.
pub fn split_dataset<S>(
    data_dir: &Path,
    dev_ratio: f64,
    policy: PairingPolicy,
    sample_size: usize,
    source: &mut S,
) -> Result<SplitOutcome>
where
    S: UniformSource + ?Sized,
{
    let (queries, gold) = dataset::input_paths(data_dir)?;
    let pairs = dataset::read_pairs(&queries, &gold, policy)?;
    let total = pairs.len();
    let sample = pairs.iter().take(sample_size).cloned().collect();

    let (dev, test) = split(pairs, dev_ratio, source);
    tracing::info!(
        total,
        dev = dev.len(),
        test = test.len(),
        dev_ratio,
        "partitioned dataset"
    );

    let dev_files = dataset::write_files(data_dir, "dev", &dev)?;
    let test_files = dataset::write_files(data_dir, "test", &test)?;

    Ok(SplitOutcome {
        total,
        sample,
        dev: SplitSide {
            count: dev.len(),
            files: dev_files,
        },
        test: SplitSide {
            count: test.len(),
            files: test_files,
        },
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::split_dataset;
    use crate::dataset::{GOLD_FILE, PairingPolicy, QUERIES_FILE};
    use crate::error::SplitError;
    use crate::random::mock::ScriptedSource;

    #[test]
    fn scripted_even_split_writes_expected_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(QUERIES_FILE), "q1\nq2\nq3\nq4\n").unwrap();
        fs::write(dir.path().join(GOLD_FILE), "g1\ng2\ng3\ng4\n").unwrap();

        let ratio: crate::ratio::SplitRatio = "1:1".parse().unwrap();
        let mut source = ScriptedSource::new([0.1, 0.9, 0.3, 0.7]);
        let outcome = split_dataset(
            dir.path(),
            ratio.dev_fraction(),
            PairingPolicy::Strict,
            10,
            &mut source,
        )
        .unwrap();

        assert_eq!(outcome.total, 4);
        assert_eq!(outcome.sample.len(), 4);
        assert_eq!(outcome.dev.count, 2);
        assert_eq!(outcome.test.count, 2);

        let read = |name: &str| fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(read("dev.queries.txt"), "q1\nq3\n");
        assert_eq!(read("dev.gold.txt"), "g1\ng3\n");
        assert_eq!(read("test.queries.txt"), "q2\nq4\n");
        assert_eq!(read("test.gold.txt"), "g2\ng4\n");
    }

    #[test]
    fn sample_is_capped_at_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(QUERIES_FILE), "a\nb\nc\n").unwrap();
        fs::write(dir.path().join(GOLD_FILE), "A\nB\nC\n").unwrap();

        let mut source = ScriptedSource::new([0.0, 0.0, 0.0]);
        let outcome =
            split_dataset(dir.path(), 0.5, PairingPolicy::Strict, 2, &mut source).unwrap();
        assert_eq!(outcome.sample.len(), 2);
        assert_eq!(outcome.sample[1].query(), b"b");
    }

    #[test]
    fn latin1_dataset_splits_byte_exact() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(QUERIES_FILE), b"caf\xe9\nr\xe9sum\xe9\n").unwrap();
        fs::write(dir.path().join(GOLD_FILE), b"cafe\nresume\n").unwrap();

        let mut source = ScriptedSource::new([0.2, 0.8]);
        let outcome =
            split_dataset(dir.path(), 0.5, PairingPolicy::Strict, 10, &mut source).unwrap();
        assert_eq!(outcome.dev.count, 1);
        assert_eq!(outcome.test.count, 1);

        let read = |name: &str| fs::read(dir.path().join(name)).unwrap();
        assert_eq!(read("dev.queries.txt"), b"caf\xe9\n");
        assert_eq!(read("dev.gold.txt"), b"cafe\n");
        assert_eq!(read("test.queries.txt"), b"r\xe9sum\xe9\n");
        assert_eq!(read("test.gold.txt"), b"resume\n");
    }

    #[test]
    fn missing_gold_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(QUERIES_FILE), "q1\n").unwrap();

        let mut source = ScriptedSource::new([0.1]);
        let err = split_dataset(dir.path(), 0.5, PairingPolicy::Strict, 10, &mut source)
            .err()
            .expect("missing gold must fail");
        assert!(matches!(err, SplitError::MissingInput(_)));

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from(QUERIES_FILE)]);
    }

    #[test]
    fn mismatch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(QUERIES_FILE), "q1\nq2\n").unwrap();
        fs::write(dir.path().join(GOLD_FILE), "g1\n").unwrap();

        let mut source = ScriptedSource::new([0.1, 0.2]);
        let err = split_dataset(dir.path(), 0.5, PairingPolicy::Strict, 10, &mut source)
            .err()
            .expect("mismatch must fail");
        assert!(matches!(err, SplitError::LengthMismatch { .. }));
        assert!(!dir.path().join("dev.queries.txt").exists());
        assert!(!dir.path().join("test.queries.txt").exists());
    }
}
