// delimited.rs - TSV/CSV loader for allelic profiles

use crate::data::profile::ProfileTable;
use crate::error::{MlstDistError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Summary columns written by MLST callers that are not loci
pub const DEFAULT_EXCLUDED_COLUMNS: &[&str] = &["ST", "clonal_complex"];

/// How to read a delimited profile file
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    pub delimiter: u8,
    pub quote: u8,
    /// Header labels dropped from the call vector
    pub excluded_columns: HashSet<String>,
    /// Locus names matching this pattern are dropped as well
    pub exclude_pattern: Option<Regex>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            quote: b'"',
            excluded_columns: DEFAULT_EXCLUDED_COLUMNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            exclude_pattern: None,
        }
    }
}

impl LoaderOptions {
    fn is_excluded(&self, label: &str) -> bool {
        self.excluded_columns.contains(label)
            || self
                .exclude_pattern
                .as_ref()
                .map(|re| re.is_match(label))
                .unwrap_or(false)
    }
}

impl ProfileTable {
    /// Load a delimited profile file
    pub fn from_delimited_file(file_path: &Path, options: &LoaderOptions) -> Result<Self> {
        let file = File::open(file_path).map_err(|e| {
            MlstDistError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to open '{}': {}", file_path.display(), e),
            ))
        })?;
        log::info!("📊 Loading allelic profiles: {}", file_path.display());
        Self::from_reader(BufReader::new(file), options)
    }

    /// Parse profiles from any reader.
    ///
    /// The first header column holds sample identifiers. Every other column
    /// not excluded by `options` becomes a locus, in file order.
    pub fn from_reader<R: Read>(reader: R, options: &LoaderOptions) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Err(MlstDistError::parse(1, "missing header row"));
        }

        let kept_columns: Vec<usize> = (1..headers.len())
            .filter(|&i| !options.is_excluded(&headers[i]))
            .collect();
        let loci_names: Vec<String> = kept_columns
            .iter()
            .map(|&i| headers[i].to_string())
            .collect();
        let excluded = headers.len() - 1 - kept_columns.len();

        let mut builder = ProfileTable::builder(loci_names);

        for (row_num, record) in csv_reader.records().enumerate() {
            let record = record?;
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(row_num + 2);

            let sample_id = record.get(0).unwrap_or_default();
            if sample_id.is_empty() {
                return Err(MlstDistError::parse(line, "empty sample identifier"));
            }

            if record.len() != headers.len() {
                return Err(MlstDistError::shape(
                    format!("record '{}' at line {}", sample_id, line),
                    headers.len() - 1,
                    record.len().saturating_sub(1),
                ));
            }

            let calls: Vec<&str> = kept_columns.iter().map(|&i| &record[i]).collect();
            builder.push_sample(sample_id, calls)?;
        }

        let table = builder.build()?;
        log::info!(
            "✅ Profiles loaded: {} samples, {} loci ({} columns excluded)",
            table.len(),
            table.n_loci(),
            excluded
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MENTALIST_TSV: &str = "\
Sample\tabcZ\tadk\taroE\tST\tclonal_complex
S1\t1\t2\t3\t11\tCC1
S2\t1\t9\t3\t12\tCC1
S3\t1\t2\t3\t11\tCC2
";

    #[test]
    fn test_default_exclusions() {
        let table =
            ProfileTable::from_reader(MENTALIST_TSV.as_bytes(), &LoaderOptions::default())
                .unwrap();

        assert_eq!(table.loci_names(), &["abcZ", "adk", "aroE"]);
        assert_eq!(table.sample_ids().collect::<Vec<_>>(), vec!["S1", "S2", "S3"]);
        assert_eq!(table.call(1, 1), Some("9"));
    }

    #[test]
    fn test_extra_exclusions_and_pattern() {
        let mut options = LoaderOptions::default();
        options.excluded_columns.insert("adk".to_string());
        options.exclude_pattern = Some(Regex::new("^aro").unwrap());

        let table = ProfileTable::from_reader(MENTALIST_TSV.as_bytes(), &options).unwrap();
        assert_eq!(table.loci_names(), &["abcZ"]);
    }

    #[test]
    fn test_csv_with_quotes() {
        let input = "id,l1,l2\n\"S,1\",1,'2'\nS2,1,3\n";
        let options = LoaderOptions {
            delimiter: b',',
            quote: b'"',
            ..LoaderOptions::default()
        };

        let table = ProfileTable::from_reader(input.as_bytes(), &options).unwrap();
        assert_eq!(table.sample_ids().collect::<Vec<_>>(), vec!["S,1", "S2"]);
        // single quotes are not the configured quote char
        assert_eq!(table.call(0, 1), Some("'2'"));
    }

    #[test]
    fn test_ragged_record_is_shape_mismatch() {
        let input = "Sample\tl1\tl2\tl3\nS1\t1\t2\t3\nS2\t1\t2\n";
        let result = ProfileTable::from_reader(input.as_bytes(), &LoaderOptions::default());
        match result {
            Err(MlstDistError::ShapeMismatch {
                context,
                expected,
                found,
            }) => {
                assert!(context.contains("S2"));
                assert!(context.contains("line 3"));
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected ShapeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_sample_rejected() {
        let input = "Sample\tl1\nS1\t1\nS1\t2\n";
        let result = ProfileTable::from_reader(input.as_bytes(), &LoaderOptions::default());
        assert!(matches!(result, Err(MlstDistError::DuplicateIdentifier(_))));
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let input = "Sample\tl1\tl2\n";
        let table =
            ProfileTable::from_reader(input.as_bytes(), &LoaderOptions::default()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.n_loci(), 2);
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        let result = ProfileTable::from_reader("".as_bytes(), &LoaderOptions::default());
        assert!(matches!(result, Err(MlstDistError::Parse { line: 1, .. })));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MENTALIST_TSV.as_bytes()).unwrap();

        let table =
            ProfileTable::from_delimited_file(file.path(), &LoaderOptions::default()).unwrap();
        assert_eq!(table.len(), 3);

        let missing = ProfileTable::from_delimited_file(
            Path::new("/nonexistent/profiles.tsv"),
            &LoaderOptions::default(),
        );
        assert!(matches!(missing, Err(MlstDistError::Io(_))));
    }
}
