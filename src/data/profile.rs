// profile.rs - Allelic profile table

use crate::error::{MlstDistError, Result};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// Interned allele call. Two codes are equal iff their source tokens are byte-equal.
pub type AlleleCode = u32;

/// Represents a single sample's allelic profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllelicProfile {
    pub sample_id: String,
    pub calls: Vec<AlleleCode>,
}

/// Dimensions and diversity of a loaded table
#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    pub samples: usize,
    pub loci: usize,
    pub distinct_alleles: usize,
    pub avg_unique_alleles: f64,
}

/// Immutable N samples x M loci table of allele calls.
///
/// Row order is the order samples were pushed into the builder. Every
/// profile has exactly `loci_names.len()` calls and identifiers are unique;
/// both are checked when the table is built.
#[derive(Debug, Clone)]
pub struct ProfileTable {
    samples: Vec<AllelicProfile>,
    loci_names: Vec<String>,
    alleles: Vec<String>,
}

impl ProfileTable {
    pub fn builder(loci_names: Vec<String>) -> ProfileTableBuilder {
        ProfileTableBuilder::new(loci_names)
    }

    /// Build a table from `(sample_id, calls)` rows in order.
    pub fn from_rows<I, S, T>(loci_names: Vec<String>, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<T>)>,
        S: Into<String>,
        T: AsRef<str>,
    {
        let mut builder = Self::builder(loci_names);
        for (sample_id, calls) in rows {
            builder.push_sample(sample_id, calls)?;
        }
        builder.build()
    }

    /// Table with no samples and no loci
    pub fn empty() -> Self {
        Self {
            samples: Vec::new(),
            loci_names: Vec::new(),
            alleles: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn n_loci(&self) -> usize {
        self.loci_names.len()
    }

    pub fn loci_names(&self) -> &[String] {
        &self.loci_names
    }

    pub fn samples(&self) -> &[AllelicProfile] {
        &self.samples
    }

    pub fn sample(&self, index: usize) -> Option<&AllelicProfile> {
        self.samples.get(index)
    }

    pub fn sample_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.samples.iter().map(|s| s.sample_id.as_str())
    }

    /// Original token for an interned code
    pub fn allele_token(&self, code: AlleleCode) -> Option<&str> {
        self.alleles.get(code as usize).map(|s| s.as_str())
    }

    /// Token of `sample` at `locus`
    pub fn call(&self, sample: usize, locus: usize) -> Option<&str> {
        let code = *self.samples.get(sample)?.calls.get(locus)?;
        self.allele_token(code)
    }

    pub fn summary(&self) -> TableSummary {
        let locus_unique_counts: Vec<usize> = (0..self.n_loci())
            .into_par_iter()
            .map(|locus| {
                self.samples
                    .iter()
                    .map(|sample| sample.calls[locus])
                    .collect::<HashSet<_>>()
                    .len()
            })
            .collect();

        let avg_unique_alleles = if locus_unique_counts.is_empty() {
            0.0
        } else {
            locus_unique_counts.iter().sum::<usize>() as f64 / locus_unique_counts.len() as f64
        };

        TableSummary {
            samples: self.len(),
            loci: self.n_loci(),
            distinct_alleles: self.alleles.len(),
            avg_unique_alleles,
        }
    }
}

/// Incremental constructor used by loaders and the generator
#[derive(Debug)]
pub struct ProfileTableBuilder {
    loci_names: Vec<String>,
    samples: Vec<AllelicProfile>,
    seen: HashSet<String>,
    interner: HashMap<String, AlleleCode>,
    alleles: Vec<String>,
}

impl ProfileTableBuilder {
    pub fn new(loci_names: Vec<String>) -> Self {
        Self {
            loci_names,
            samples: Vec::new(),
            seen: HashSet::new(),
            interner: HashMap::new(),
            alleles: Vec::new(),
        }
    }

    /// Append one sample. Fails on a repeated identifier or a call vector
    /// whose length differs from the number of loci.
    pub fn push_sample<S, T>(&mut self, sample_id: S, calls: Vec<T>) -> Result<()>
    where
        S: Into<String>,
        T: AsRef<str>,
    {
        let sample_id = sample_id.into();
        if calls.len() != self.loci_names.len() {
            return Err(MlstDistError::shape(
                format!("sample '{}'", sample_id),
                self.loci_names.len(),
                calls.len(),
            ));
        }
        if !self.seen.insert(sample_id.clone()) {
            return Err(MlstDistError::DuplicateIdentifier(sample_id));
        }

        let codes = calls.iter().map(|token| self.intern(token.as_ref())).collect();
        self.samples.push(AllelicProfile {
            sample_id,
            calls: codes,
        });
        Ok(())
    }

    fn intern(&mut self, token: &str) -> AlleleCode {
        if let Some(&code) = self.interner.get(token) {
            return code;
        }
        let code = self.alleles.len() as AlleleCode;
        self.alleles.push(token.to_string());
        self.interner.insert(token.to_string(), code);
        code
    }

    pub fn build(self) -> Result<ProfileTable> {
        if !self.samples.is_empty() && self.loci_names.is_empty() {
            return Err(MlstDistError::NoLoci);
        }
        Ok(ProfileTable {
            samples: self.samples,
            loci_names: self.loci_names,
            alleles: self.alleles,
        })
    }
}
