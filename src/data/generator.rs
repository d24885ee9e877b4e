// generator.rs - Synthetic allelic profiles for test fixtures

use crate::data::profile::ProfileTable;
use crate::error::Result;
use rand::Rng;
use std::io::Write;

/// Generate `n_samples` x `n_loci` profiles with calls drawn uniformly from 0-9.
///
/// Samples are named `sample-<i>` and loci `locus-<j>`.
pub fn generate_random_profiles<R: Rng>(
    n_samples: usize,
    n_loci: usize,
    rng: &mut R,
) -> Result<ProfileTable> {
    let loci_names = (0..n_loci).map(|j| format!("locus-{}", j)).collect();
    let mut builder = ProfileTable::builder(loci_names);

    for i in 0..n_samples {
        let calls: Vec<String> = (0..n_loci)
            .map(|_| rng.gen_range(0..=9u8).to_string())
            .collect();
        builder.push_sample(format!("sample-{}", i), calls)?;
    }

    builder.build()
}

/// Write a table as tab-separated profiles with a `Sample` header column.
pub fn write_profiles_tsv<W: Write>(table: &ProfileTable, writer: W) -> Result<()> {
    let mut tsv = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);

    let mut header = vec!["Sample"];
    header.extend(table.loci_names().iter().map(|s| s.as_str()));
    tsv.write_record(&header)?;

    for sample in table.samples() {
        let mut row = vec![sample.sample_id.as_str()];
        row.extend(
            sample
                .calls
                .iter()
                .map(|&code| table.allele_token(code).unwrap_or_default()),
        );
        tsv.write_record(&row)?;
    }

    tsv.flush()?;
    Ok(())
}
