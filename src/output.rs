// ==============================================================================
// output.rs - APOE Result File Generation
// ==============================================================================
// Description: Writes per-sample genotype and cohort summary CSV files
// Author: Matt Barham
// Created: 2025-11-06
// Modified: 2026-10-17
// Version: 2.0.0
// ==============================================================================
// Files (named from a user-supplied base):
//   <base>.APOE_GENOTYPES.csv  FID,IID,SEX,PHENO,rs429358_rs7412,APOE_GENOTYPE
//   <base>.APOE_SUMMARY.csv    APOE_GENOTYPE,COUNT
// ==============================================================================

use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::classifier::combined_key;
use crate::models::{ClassifiedRecord, GenotypeRow};
use crate::summary::FrequencySummary;

pub const GENOTYPES_SUFFIX: &str = ".APOE_GENOTYPES.csv";
pub const SUMMARY_SUFFIX: &str = ".APOE_SUMMARY.csv";

/// Errors that can occur while writing result files
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Paths of both result files for one output base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub genotypes: PathBuf,
    pub summary: PathBuf,
}

impl OutputPaths {
    /// `results/cohort` → `results/cohort.APOE_GENOTYPES.csv`, `results/cohort.APOE_SUMMARY.csv`
    pub fn from_base(base: impl AsRef<Path>) -> Self {
        Self {
            genotypes: append_suffix(base.as_ref(), GENOTYPES_SUFFIX),
            summary: append_suffix(base.as_ref(), SUMMARY_SUFFIX),
        }
    }
}

// Path::with_extension would clobber dots already in the base name
fn append_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = base.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Project a classified record onto the per-sample output row
pub fn genotype_row(record: &ClassifiedRecord) -> GenotypeRow {
    let sample = &record.sample;
    GenotypeRow {
        fid: sample.fid.clone(),
        iid: sample.iid.clone(),
        sex: sample.sex.clone(),
        pheno: sample.pheno.clone(),
        combined_key: combined_key(&sample.rs429358, &sample.rs7412),
        genotype: record.genotype,
    }
}

/// Writer for the two APOE result files
pub struct OutputGenerator {
    paths: OutputPaths,
}

impl OutputGenerator {
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            paths: OutputPaths::from_base(base),
        }
    }

    /// Write both files; returns their final paths
    pub fn generate(
        &self,
        records: &[ClassifiedRecord],
        summary: &FrequencySummary,
    ) -> Result<OutputPaths, OutputError> {
        let rows: Vec<GenotypeRow> = records.iter().map(genotype_row).collect();
        write_csv(&self.paths.genotypes, &rows)?;
        info!("Wrote {} sample rows to {:?}", rows.len(), self.paths.genotypes);

        let summary_rows = summary.rows();
        write_csv(&self.paths.summary, &summary_rows)?;
        info!(
            "Wrote {} summary rows to {:?}",
            summary_rows.len(),
            self.paths.summary
        );

        Ok(self.paths.clone())
    }
}

/// Serialize rows to a sibling temp file, then rename into place
///
/// A failed write never leaves a truncated file under `path`.
fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), OutputError> {
    let tmp_path = append_suffix(path, ".tmp");
    debug!("Writing {:?}", tmp_path);

    let result = write_rows(&tmp_path, rows).and_then(|()| {
        fs::rename(&tmp_path, path).map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }

    result
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), OutputError> {
    let csv_error = |source: csv::Error| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
