// distance.rs - Core distance calculation engine

use crate::core::metric::Metric;
use crate::data::{AllelicProfile, ProfileTable};
use crate::error::{MlstDistError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::Instant;

/// Distance calculation engine
#[derive(Debug, Clone, Copy)]
pub struct DistanceEngine {
    metric: Metric,
}

impl DistanceEngine {
    pub fn new(metric: Metric) -> Self {
        Self { metric }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Number of positions at which two call vectors differ.
    ///
    /// Comparison is exact equality; a missing-call token is just another value.
    pub fn mismatches<T: PartialEq>(&self, calls1: &[T], calls2: &[T]) -> Result<usize> {
        if calls1.len() != calls2.len() {
            return Err(MlstDistError::shape("call vector", calls1.len(), calls2.len()));
        }
        Ok(calls1
            .iter()
            .zip(calls2.iter())
            .filter(|(a, b)| a != b)
            .count())
    }

    /// Distance between two call vectors under the engine's metric
    pub fn distance<T: PartialEq>(&self, calls1: &[T], calls2: &[T]) -> Result<f64> {
        let mismatches = self.mismatches(calls1, calls2)?;
        self.metric.normalize(mismatches, calls1.len())
    }
}

/// Unordered pair of table indices, stored with `lo <= hi`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    pub lo: usize,
    pub hi: usize,
}

impl PairKey {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn is_diagonal(&self) -> bool {
        self.lo == self.hi
    }

    /// Offset in row-major strict-lower-triangle storage. Undefined on the diagonal.
    fn condensed_index(&self) -> usize {
        self.hi * (self.hi - 1) / 2 + self.lo
    }
}

/// Symmetric distance matrix stored as its strict lower triangle.
///
/// Row `i` of the triangle holds distances from sample `i` to samples
/// `0..i` in table order. Diagonal entries are not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    sample_ids: Vec<String>,
    metric: Metric,
    values: Vec<f64>,
}

impl DistanceMatrix {
    pub fn len(&self) -> usize {
        self.sample_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sample_ids.is_empty()
    }

    pub fn sample_ids(&self) -> &[String] {
        &self.sample_ids
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Number of stored (off-diagonal) pairs
    pub fn condensed_len(&self) -> usize {
        self.values.len()
    }

    /// Distance between table rows `a` and `b`; symmetric, zero on the diagonal.
    pub fn get(&self, a: usize, b: usize) -> Result<f64> {
        let n = self.len();
        if a >= n || b >= n {
            return Err(MlstDistError::LookupInconsistency { a, b });
        }
        let key = PairKey::new(a, b);
        if key.is_diagonal() {
            return Ok(0.0);
        }
        self.values
            .get(key.condensed_index())
            .copied()
            .ok_or(MlstDistError::LookupInconsistency { a, b })
    }

    /// Stored pairs as `(row, column, distance)` with `column < row`
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (1..self.len())
            .flat_map(|i| (0..i).map(move |j| (i, j)))
            .zip(self.values.iter())
            .map(|((i, j), &d)| (i, j, d))
    }
}

/// Calculate distance between two samples
pub fn calculate_sample_distance(
    sample1: &AllelicProfile,
    sample2: &AllelicProfile,
    engine: &DistanceEngine,
) -> Result<f64> {
    if sample1.calls.len() != sample2.calls.len() {
        return Err(MlstDistError::shape(
            format!(
                "sample '{}' compared with '{}'",
                sample2.sample_id, sample1.sample_id
            ),
            sample1.calls.len(),
            sample2.calls.len(),
        ));
    }
    engine.distance(&sample1.calls, &sample2.calls)
}

/// Calculate all pairwise distances of a table.
///
/// Rows are computed in parallel and collected in row-major order, so the
/// result is identical to a sequential pass.
pub fn calculate_distance_matrix(
    table: &ProfileTable,
    engine: &DistanceEngine,
    show_progress: bool,
) -> Result<DistanceMatrix> {
    let samples = table.samples();
    let n_samples = samples.len();
    let total_comparisons = n_samples * n_samples.saturating_sub(1) / 2;

    let start = Instant::now();
    log::info!(
        "🔄 Computing distance matrix ({} samples × {} loci = {} comparisons, metric: {})",
        n_samples,
        table.n_loci(),
        total_comparisons,
        engine.metric()
    );

    let pb = if show_progress {
        let pb = ProgressBar::new(total_comparisons as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {per_sec} ETA: {eta}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let rows: Vec<Vec<f64>> = (0..n_samples)
        .into_par_iter()
        .map(|i| {
            let row = (0..i)
                .map(|j| calculate_sample_distance(&samples[j], &samples[i], engine))
                .collect::<Result<Vec<f64>>>();
            pb.inc(i as u64);
            row
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_and_clear();

    let values: Vec<f64> = rows.into_iter().flatten().collect();
    debug_assert_eq!(values.len(), total_comparisons);

    log::info!(
        "✅ Distance matrix computed in {:.2}s",
        start.elapsed().as_secs_f64()
    );

    Ok(DistanceMatrix {
        sample_ids: table.sample_ids().map(|s| s.to_string()).collect(),
        metric: engine.metric(),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_table() -> ProfileTable {
        ProfileTable::from_rows(
            vec!["l1".into(), "l2".into(), "l3".into()],
            vec![
                ("S1", vec!["1", "2", "3"]),
                ("S2", vec!["1", "9", "3"]),
                ("S3", vec!["1", "2", "3"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_count_and_proportion() {
        let count = DistanceEngine::new(Metric::Count);
        let proportion = DistanceEngine::new(Metric::Proportion);
        let a = ["1", "2", "3"];
        let b = ["1", "9", "3"];

        assert_eq!(count.mismatches(&a, &b).unwrap(), 1);
        assert_eq!(count.distance(&a, &b).unwrap(), 1.0);
        assert_eq!(proportion.distance(&a, &b).unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn test_missing_token_is_plain_value() {
        let engine = DistanceEngine::new(Metric::Count);
        assert_eq!(engine.distance(&["-", "1"], &["-", "1"]).unwrap(), 0.0);
        assert_eq!(engine.distance(&["-", "1"], &["4", "1"]).unwrap(), 1.0);
    }

    #[test]
    fn test_unequal_lengths_fail() {
        let engine = DistanceEngine::new(Metric::Count);
        let result = engine.distance(&["1", "2", "3"], &["1", "2"]);
        assert!(matches!(
            result,
            Err(MlstDistError::ShapeMismatch {
                expected: 3,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_sample_distance_names_both_samples() {
        let engine = DistanceEngine::new(Metric::Count);
        let s1 = AllelicProfile {
            sample_id: "S1".into(),
            calls: vec![1, 2, 3],
        };
        let s2 = AllelicProfile {
            sample_id: "S2".into(),
            calls: vec![1, 2],
        };
        match calculate_sample_distance(&s1, &s2, &engine) {
            Err(MlstDistError::ShapeMismatch { context, .. }) => {
                assert!(context.contains("S1") && context.contains("S2"));
            }
            other => panic!("expected ShapeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_pair_key_is_canonical() {
        assert_eq!(PairKey::new(4, 1), PairKey::new(1, 4));
        assert_eq!(PairKey::new(4, 1).lo, 1);
        assert!(PairKey::new(2, 2).is_diagonal());
        assert_eq!(PairKey::new(1, 0).condensed_index(), 0);
        assert_eq!(PairKey::new(2, 0).condensed_index(), 1);
        assert_eq!(PairKey::new(2, 1).condensed_index(), 2);
        assert_eq!(PairKey::new(3, 0).condensed_index(), 3);
    }

    #[test]
    fn test_matrix_example_values() {
        let table = example_table();
        let matrix =
            calculate_distance_matrix(&table, &DistanceEngine::new(Metric::Count), false).unwrap();

        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.condensed_len(), 3);
        assert_eq!(matrix.get(0, 1).unwrap(), 1.0);
        assert_eq!(matrix.get(0, 2).unwrap(), 0.0);
        assert_eq!(matrix.get(1, 2).unwrap(), 1.0);
    }

    #[test]
    fn test_matrix_symmetry_and_identity() {
        let table = ProfileTable::from_rows(
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            vec![
                ("x", vec!["1", "2", "3", "4"]),
                ("y", vec!["1", "0", "3", "5"]),
                ("z", vec!["7", "2", "-", "4"]),
                ("w", vec!["7", "0", "-", "5"]),
            ],
        )
        .unwrap();

        for metric in [Metric::Count, Metric::Proportion] {
            let matrix =
                calculate_distance_matrix(&table, &DistanceEngine::new(metric), false).unwrap();
            for i in 0..4 {
                assert_eq!(matrix.get(i, i).unwrap(), 0.0);
                for j in 0..4 {
                    assert_eq!(matrix.get(i, j).unwrap(), matrix.get(j, i).unwrap());
                }
            }
        }
    }

    #[test]
    fn test_proportion_is_count_over_loci() {
        let table = example_table();
        let counts =
            calculate_distance_matrix(&table, &DistanceEngine::new(Metric::Count), false).unwrap();
        let props =
            calculate_distance_matrix(&table, &DistanceEngine::new(Metric::Proportion), false)
                .unwrap();

        for (i, j, d) in counts.pairs() {
            assert!(d >= 0.0 && d <= 3.0 && d.fract() == 0.0);
            let p = props.get(i, j).unwrap();
            assert!((0.0..=1.0).contains(&p));
            assert_eq!(p, d / 3.0);
        }
    }

    #[test]
    fn test_matches_pairwise_engine_calls() {
        let engine = DistanceEngine::new(Metric::Count);
        let table = ProfileTable::from_rows(
            vec!["a".into(), "b".into()],
            (0..20).map(|i| (format!("s{}", i), vec![(i % 3).to_string(), (i % 5).to_string()])),
        )
        .unwrap();

        let matrix = calculate_distance_matrix(&table, &engine, true).unwrap();
        assert_eq!(matrix.condensed_len(), 190);
        for (i, j, d) in matrix.pairs() {
            let expected = engine
                .distance(&table.samples()[i].calls, &table.samples()[j].calls)
                .unwrap();
            assert_eq!(d, expected);
        }
    }

    #[test]
    fn test_lookup_out_of_range() {
        let matrix = calculate_distance_matrix(
            &example_table(),
            &DistanceEngine::new(Metric::Count),
            false,
        )
        .unwrap();
        assert!(matches!(
            matrix.get(0, 3),
            Err(MlstDistError::LookupInconsistency { a: 0, b: 3 })
        ));
    }

    #[test]
    fn test_empty_and_single_tables() {
        let engine = DistanceEngine::new(Metric::Proportion);
        let empty = calculate_distance_matrix(&ProfileTable::empty(), &engine, false).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.condensed_len(), 0);

        let single =
            ProfileTable::from_rows(vec!["l".into()], vec![("only", vec!["1"])]).unwrap();
        let matrix = calculate_distance_matrix(&single, &engine, false).unwrap();
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix.get(0, 0).unwrap(), 0.0);
    }
}
