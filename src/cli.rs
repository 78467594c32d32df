use std::path::PathBuf;

use clap::Parser;

use crate::dataset::PairingPolicy;
use crate::ratio::SplitRatio;

#[derive(Parser, Debug)]
#[command(
    name = "devtest-split",
    version,
    about = "Split a query/gold dataset into dev and test sets"
)]
pub struct Cli {
    /// Ratio between dev and test, e.g. 7:3
    pub ratio: SplitRatio,

    /// Directory holding queries.txt and gold.txt; outputs are written here too
    pub data_dir: PathBuf,

    /// Seed for the random assignment; a fresh one is drawn and reported if omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pair up to the shorter input instead of failing on a line-count mismatch
    #[arg(long)]
    pub truncate: bool,

    /// Number of leading pairs shown in the report
    #[arg(long, default_value_t = 10)]
    pub sample: usize,

    /// Report format on stdout: text or json
    #[arg(long, default_value = "text")]
    pub output: String,
}

impl Cli {
    pub fn pairing_policy(&self) -> PairingPolicy {
        if self.truncate {
            PairingPolicy::Truncate
        } else {
            PairingPolicy::Strict
        }
    }
}
