use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::SplitError;

/// Relative dev:test weighting given on the command line as `D:T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRatio {
    pub dev: u64,
    pub test: u64,
}

impl SplitRatio {
    /// Probability that a single pair lands in the dev split, `D / (D + T)`.
    pub fn dev_fraction(&self) -> f64 {
        let dev = self.dev as f64;
        dev / (dev + self.test as f64)
    }
}

impl FromStr for SplitRatio {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [dev, test] = parts.as_slice() else {
            return Err(SplitError::InvalidRatio(format!(
                "expected D:T (e.g. 7:3), got {s:?}"
            )));
        };

        let dev = parse_weight(dev, s)?;
        let test = parse_weight(test, s)?;
        Ok(Self { dev, test })
    }
}

fn parse_weight(part: &str, whole: &str) -> Result<u64, SplitError> {
    match part.parse::<u64>() {
        Ok(0) => Err(SplitError::InvalidRatio(format!(
            "weights must be positive, got {whole:?}"
        ))),
        Ok(weight) => Ok(weight),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Err(SplitError::InvalidRatio(
            format!("{part:?} is out of range in {whole:?}"),
        )),
        Err(_) => Err(SplitError::InvalidRatio(format!(
            "{part:?} is not an integer in {whole:?}"
        ))),
    }
}

impl fmt::Display for SplitRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.dev, self.test)
    }
}
