// assembler.rs - Project a condensed matrix into an output layout

use crate::core::DistanceMatrix;
use crate::error::{MlstDistError, Result};
use std::fmt;
use std::str::FromStr;

/// Which cells of the matrix are emitted per row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// All N values, diagonal included
    #[default]
    Square,
    /// Row p carries the p values for the rows above it; no diagonal
    Triangular,
}

impl FromStr for Layout {
    type Err = MlstDistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "square" | "full" => Ok(Layout::Square),
            "triangular" | "lower" | "lower-triangular" => Ok(Layout::Triangular),
            _ => Err(MlstDistError::UnknownLayout(s.to_string())),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Layout::Square => "square",
            Layout::Triangular => "triangular",
        })
    }
}

/// Row ordering of the emitted matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Order in which samples were loaded
    #[default]
    Loaded,
    /// Lexicographic by sample identifier
    Sorted,
}

impl FromStr for RowOrder {
    type Err = MlstDistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "loaded" | "input" | "as-loaded" => Ok(RowOrder::Loaded),
            "sorted" | "lexicographic" => Ok(RowOrder::Sorted),
            _ => Err(MlstDistError::UnknownRowOrder(s.to_string())),
        }
    }
}

impl fmt::Display for RowOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RowOrder::Loaded => "loaded",
            RowOrder::Sorted => "sorted",
        })
    }
}

impl RowOrder {
    /// Table indices in emission order
    pub fn arrange(&self, sample_ids: &[String]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..sample_ids.len()).collect();
        if *self == RowOrder::Sorted {
            order.sort_by(|&a, &b| sample_ids[a].cmp(&sample_ids[b]));
        }
        order
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssembledRow {
    pub sample_id: String,
    pub values: Vec<f64>,
}

/// Matrix rows ready for serialization
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledMatrix {
    pub layout: Layout,
    pub rows: Vec<AssembledRow>,
}

impl AssembledMatrix {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Arrange `matrix` into `layout`, rows in `order`.
pub fn assemble(matrix: &DistanceMatrix, layout: Layout, order: RowOrder) -> Result<AssembledMatrix> {
    let order = order.arrange(matrix.sample_ids());

    let rows = order
        .iter()
        .enumerate()
        .map(|(position, &row)| -> Result<AssembledRow> {
            let columns = match layout {
                Layout::Square => &order[..],
                Layout::Triangular => &order[..position],
            };
            let values = columns
                .iter()
                .map(|&col| matrix.get(row, col))
                .collect::<Result<Vec<f64>>>()?;
            Ok(AssembledRow {
                sample_id: matrix.sample_ids()[row].clone(),
                values,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AssembledMatrix { layout, rows })
}
