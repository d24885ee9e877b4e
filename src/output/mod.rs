// mod.rs - Output formatters module

pub mod assembler;

pub use assembler::{assemble, AssembledMatrix, AssembledRow, Layout, RowOrder};

use crate::error::{MlstDistError, Result};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Text serialization of an assembled matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Count line, then `id d1 d2 ...` rows
    #[default]
    Phylip,
    /// Tab-separated square matrix with a header row
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = MlstDistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "phylip" => Ok(OutputFormat::Phylip),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err(MlstDistError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Phylip => "phylip",
            OutputFormat::Tsv => "tsv",
        })
    }
}

impl OutputFormat {
    pub fn supports(&self, layout: Layout) -> bool {
        match self {
            OutputFormat::Phylip => true,
            OutputFormat::Tsv => layout == Layout::Square,
        }
    }
}

/// Fixed-point rendering shared by every format
pub fn format_distance(distance: f64) -> String {
    format!("{:.8}", distance)
}

/// Write distance matrix in PHYLIP-style layout.
///
/// A row with no values still carries the space after the identifier.
pub fn write_phylip<W: Write>(writer: &mut W, matrix: &AssembledMatrix) -> Result<()> {
    writeln!(writer, "{}", matrix.len())?;
    for row in &matrix.rows {
        let values: Vec<String> = row.values.iter().map(|&d| format_distance(d)).collect();
        writeln!(writer, "{} {}", row.sample_id, values.join(" "))?;
    }
    Ok(())
}

/// Write distance matrix in TSV format
pub fn write_tsv<W: Write>(writer: &mut W, matrix: &AssembledMatrix) -> Result<()> {
    if !OutputFormat::Tsv.supports(matrix.layout) {
        return Err(MlstDistError::config(format!(
            "tsv output requires the square layout (got {})",
            matrix.layout
        )));
    }

    let mut tsv = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);

    let mut header = vec!["Sample".to_string()];
    header.extend(matrix.rows.iter().map(|r| r.sample_id.clone()));
    tsv.write_record(&header)?;

    for row in &matrix.rows {
        let mut record = vec![row.sample_id.clone()];
        record.extend(row.values.iter().map(|&d| format_distance(d)));
        tsv.write_record(&record)?;
    }

    tsv.flush()?;
    Ok(())
}

/// Write distance matrix in the specified format
pub fn write_matrix<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    matrix: &AssembledMatrix,
) -> Result<()> {
    match format {
        OutputFormat::Phylip => write_phylip(writer, matrix),
        OutputFormat::Tsv => write_tsv(writer, matrix),
    }
}

/// Render to an in-memory string
pub fn render(matrix: &AssembledMatrix, format: OutputFormat) -> Result<String> {
    let mut buffer = Vec::new();
    write_matrix(&mut buffer, format, matrix)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, values: &[f64]) -> AssembledRow {
        AssembledRow {
            sample_id: id.to_string(),
            values: values.to_vec(),
        }
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(3.0), "3.00000000");
        assert_eq!(format_distance(0.0), "0.00000000");
        assert_eq!(format_distance(1.0 / 3.0), "0.33333333");
        assert_eq!(format_distance(2.0 / 3.0), "0.66666667");
        assert_eq!(format_distance(1234567.0), "1234567.00000000");
    }

    #[test]
    fn test_phylip_square() {
        let matrix = AssembledMatrix {
            layout: Layout::Square,
            rows: vec![row("S1", &[0.0, 1.0]), row("S2", &[1.0, 0.0])],
        };
        assert_eq!(
            render(&matrix, OutputFormat::Phylip).unwrap(),
            "2\nS1 0.00000000 1.00000000\nS2 1.00000000 0.00000000\n"
        );
    }

    #[test]
    fn test_phylip_triangular_first_row_is_bare() {
        let matrix = AssembledMatrix {
            layout: Layout::Triangular,
            rows: vec![row("S1", &[]), row("S2", &[0.5])],
        };
        assert_eq!(
            render(&matrix, OutputFormat::Phylip).unwrap(),
            "2\nS1 \nS2 0.50000000\n"
        );
    }

    #[test]
    fn test_phylip_empty() {
        let matrix = AssembledMatrix {
            layout: Layout::Square,
            rows: Vec::new(),
        };
        assert_eq!(render(&matrix, OutputFormat::Phylip).unwrap(), "0\n");
    }

    #[test]
    fn test_tsv_square() {
        let matrix = AssembledMatrix {
            layout: Layout::Square,
            rows: vec![row("S1", &[0.0, 2.0]), row("S2", &[2.0, 0.0])],
        };
        assert_eq!(
            render(&matrix, OutputFormat::Tsv).unwrap(),
            "Sample\tS1\tS2\nS1\t0.00000000\t2.00000000\nS2\t2.00000000\t0.00000000\n"
        );
    }

    #[test]
    fn test_tsv_rejects_triangular() {
        let matrix = AssembledMatrix {
            layout: Layout::Triangular,
            rows: vec![row("S1", &[])],
        };
        assert!(matches!(
            render(&matrix, OutputFormat::Tsv),
            Err(MlstDistError::Config { .. })
        ));
        assert!(!OutputFormat::Tsv.supports(Layout::Triangular));
    }

    #[test]
    fn test_unknown_format() {
        assert!(matches!(
            "nexus".parse::<OutputFormat>(),
            Err(MlstDistError::UnknownFormat(_))
        ));
        assert_eq!("TSV".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
    }
}
