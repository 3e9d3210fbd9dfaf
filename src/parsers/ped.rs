// ==============================================================================
// ped.rs - PLINK Compound-Genotype .ped Parser
// ==============================================================================
// Description: Parser for APOE SNP extracts recoded with PLINK compound genotypes
// Author: Matt Barham
// Created: 2025-11-04
// Modified: 2026-10-17
// Version: 2.0.0
// ==============================================================================
// Format: Whitespace-delimited text, no header, one sample per line
// Produced by:
//   plink --bfile YOUR_FILE --snps rs429358,rs7412 --make-bed --out apoe_snps
//   plink --bfile apoe_snps --recode compound-genotypes --out apoe_snps
// Example:
//   BF-1009 BF-1009 0 0 1 1 CT CC
//   BF-1010 BF-1010 0 0 1 2 TT CC
// ==============================================================================

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::models::SampleRecord;

/// FID IID PAT MAT SEX PHENO rs429358 rs7412
pub const PED_COLUMNS: usize = 8;

/// Errors that can occur during .ped file parsing
#[derive(Error, Debug)]
pub enum PedParseError {
    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid line format in {path} at line {line}: expected {expected} whitespace-delimited fields, found {found}")]
    InvalidFormat {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("File {0} is empty or contains only blank lines")]
    EmptyFile(PathBuf),
}

/// Parser for two-SNP PLINK .ped files
#[derive(Debug, Clone, Default)]
pub struct PedParser;

impl PedParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a .ped file into sample records, in file order
    ///
    /// # Arguments
    /// * `path` - Path to the .ped file
    ///
    /// # Returns
    /// * `Ok(Vec<SampleRecord>)` - Every sample in the file
    /// * `Err(PedParseError)` - Unreadable file, wrong column count, or no data
    ///
    /// Blank lines are skipped. Any other line must have exactly 8 fields.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Vec<SampleRecord>, PedParseError> {
        let path = path.as_ref();
        let io_error = |source: std::io::Error| PedParseError::IoError {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();

        for (idx, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(io_error)?;

            if line.trim().is_empty() {
                continue;
            }

            let record = self.parse_line(&line).map_err(|found| {
                PedParseError::InvalidFormat {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    expected: PED_COLUMNS,
                    found,
                }
            })?;

            debug!(
                "Line {}: {} {} {}_{}",
                idx + 1,
                record.fid,
                record.iid,
                record.rs429358,
                record.rs7412
            );
            records.push(record);
        }

        if records.is_empty() {
            return Err(PedParseError::EmptyFile(path.to_path_buf()));
        }

        Ok(records)
    }

    /// Split one line into a record; on mismatch, returns the observed field count
    fn parse_line(&self, line: &str) -> Result<SampleRecord, usize> {
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.len() != PED_COLUMNS {
            return Err(fields.len());
        }

        Ok(SampleRecord {
            fid: fields[0].to_string(),
            iid: fields[1].to_string(),
            pat: fields[2].to_string(),
            mat: fields[3].to_string(),
            sex: fields[4].to_string(),
            pheno: fields[5].to_string(),
            rs429358: fields[6].to_string(),
            rs7412: fields[7].to_string(),
        })
    }
}
