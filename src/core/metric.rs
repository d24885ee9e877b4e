// metric.rs - Distance metric registry

use crate::error::MlstDistError;
use std::fmt;
use std::str::FromStr;

/// Normalization applied to the per-pair mismatch count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// Number of loci with differing calls
    #[default]
    Count,
    /// Differing loci divided by the number of loci
    Proportion,
}

impl FromStr for Metric {
    type Err = MlstDistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "count" | "absolute" | "hamming" => Ok(Metric::Count),
            "proportion" => Ok(Metric::Proportion),
            _ => Err(MlstDistError::UnknownMetric(s.to_string())),
        }
    }
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Count => "count",
            Metric::Proportion => "proportion",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Metric::Count => "number of differing loci",
            Metric::Proportion => "fraction of differing loci",
        }
    }

    /// Turn a mismatch count over `n_loci` loci into this metric's value.
    pub fn normalize(&self, mismatches: usize, n_loci: usize) -> Result<f64, MlstDistError> {
        match self {
            Metric::Count => Ok(mismatches as f64),
            Metric::Proportion => {
                if n_loci == 0 {
                    return Err(MlstDistError::NoLoci);
                }
                Ok(mismatches as f64 / n_loci as f64)
            }
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_aliases() {
        assert_eq!("count".parse::<Metric>().unwrap(), Metric::Count);
        assert_eq!("absolute".parse::<Metric>().unwrap(), Metric::Count);
        assert_eq!("Hamming".parse::<Metric>().unwrap(), Metric::Count);
        assert_eq!("PROPORTION".parse::<Metric>().unwrap(), Metric::Proportion);
    }

    #[test]
    fn test_unknown_metric_is_rejected() {
        match "jaccard".parse::<Metric>() {
            Err(MlstDistError::UnknownMetric(name)) => assert_eq!(name, "jaccard"),
            other => panic!("expected UnknownMetric, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(Metric::Count.normalize(3, 7).unwrap(), 3.0);
        assert_eq!(Metric::Proportion.normalize(1, 4).unwrap(), 0.25);
        assert_eq!(Metric::Count.normalize(0, 0).unwrap(), 0.0);
        assert!(matches!(
            Metric::Proportion.normalize(0, 0),
            Err(MlstDistError::NoLoci)
        ));
    }
}
