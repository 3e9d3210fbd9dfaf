// ==============================================================================
// models.rs - Cohort Sample Data Models
// ==============================================================================
// Description: Data structures for per-sample APOE genotype classification
// Author: Matt Barham
// Created: 2025-11-12
// Modified: 2026-10-17
// Version: 3.0.0
// ==============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// APOE allele pair determined jointly by rs429358 and rs7412
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApoeGenotype {
    #[serde(rename = "e2/e2")]
    E2E2,
    #[serde(rename = "e2/e3")]
    E2E3,
    /// Ambiguous: both haplotype phasings give the same pair of calls
    #[serde(rename = "e2/e4 or e1/e3")]
    E2E4OrE1E3,
    #[serde(rename = "e3/e3")]
    E3E3,
    #[serde(rename = "e3/e4")]
    E3E4,
    #[serde(rename = "e4/e4")]
    E4E4,
    /// Missing, partial, or unrecognized marker calls
    #[serde(rename = "unknown")]
    Unknown,
}

impl ApoeGenotype {
    /// Every label in lookup table order, `Unknown` last
    pub const ALL: [ApoeGenotype; 7] = [
        ApoeGenotype::E2E2,
        ApoeGenotype::E2E3,
        ApoeGenotype::E2E4OrE1E3,
        ApoeGenotype::E3E3,
        ApoeGenotype::E3E4,
        ApoeGenotype::E4E4,
        ApoeGenotype::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApoeGenotype::E2E2 => "e2/e2",
            ApoeGenotype::E2E3 => "e2/e3",
            ApoeGenotype::E2E4OrE1E3 => "e2/e4 or e1/e3",
            ApoeGenotype::E3E3 => "e3/e3",
            ApoeGenotype::E3E4 => "e3/e4",
            ApoeGenotype::E4E4 => "e4/e4",
            ApoeGenotype::Unknown => "unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ApoeGenotype::Unknown)
    }
}

impl fmt::Display for ApoeGenotype {
    fn fmt(&self, f:&mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a PLINK compound-genotype .ped file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRecord {
    /// Family ID
    pub fid: String,
    /// Individual ID
    pub iid: String,
    /// Paternal ID ("0" if unknown)
    pub pat: String,
    /// Maternal ID ("0" if unknown)
    pub mat: String,
    /// Sex code (1 = male, 2 = female, 0 = unknown)
    pub sex: String,
    /// Phenotype code
    pub pheno: String,
    /// Compound genotype at rs429358 (e.g., "CT", or "0" for no-call)
    pub rs429358: String,
    /// Compound genotype at rs7412
    pub rs7412: String,
}

/// Sample record with its derived APOE genotype
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRecord {
    pub sample: SampleRecord,
    pub genotype: ApoeGenotype,
}

/// Row of the per-sample output file (parentage and raw marker columns dropped)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenotypeRow {
    #[serde(rename = "FID")]
    pub fid: String,
    #[serde(rename = "IID")]
    pub iid: String,
    #[serde(rename = "SEX")]
    pub sex: String,
    #[serde(rename = "PHENO")]
    pub pheno: String,
    #[serde(rename = "rs429358_rs7412")]
    pub combined_key: String,
    #[serde(rename = "APOE_GENOTYPE")]
    pub genotype: ApoeGenotype,
}

/// Row of the cohort summary output file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "APOE_GENOTYPE")]
    pub genotype: ApoeGenotype,
    #[serde(rename = "COUNT")]
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genotype_str() {
        assert_eq!(ApoeGenotype::E2E2.as_str(), "e2/e2");
        assert_eq!(ApoeGenotype::E2E4OrE1E3.as_str(), "e2/e4 or e1/e3");
        assert_eq!(ApoeGenotype::Unknown.as_str(), "unknown");
        assert_eq!(ApoeGenotype::E3E4.to_string(), "e3/e4");
    }

    #[test]
    fn test_all_labels_distinct() {
        let mut labels: Vec<&str> = ApoeGenotype::ALL.iter().map(|g| g.as_str()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), ApoeGenotype::ALL.len());
        assert_eq!(ApoeGenotype::ALL.iter().filter(|g| g.is_unknown()).count(), 1);
    }
}
