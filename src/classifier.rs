// ==============================================================================
// classifier.rs - APOE Genotype Classification
// ==============================================================================
// Description: Maps rs429358/rs7412 compound genotypes to APOE allele pairs
// Author: Matt Barham
// Created: 2025-11-06
// Modified: 2026-10-17
// Version: 2.0.0
// ==============================================================================
// Lookup (https://www.snpedia.com/index.php/APOE):
//   | APOE GENO      | rs429358 | rs7412 | COMBINED                         |
//   |----------------|----------|--------|----------------------------------|
//   | e2/e2          | TT       | TT     | TT_TT                            |
//   | e2/e3          | TT       | TC     | TT_TC or TT_CT                   |
//   | e2/e4 or e1/e3 | TC       | TC     | TC_TC or CT_CT or TC_CT or CT_TC |
//   | e3/e3          | TT       | CC     | TT_CC                            |
//   | e3/e4          | TC       | CC     | TC_CC or CT_CC                   |
//   | e4/e4          | CC       | CC     | CC_CC                            |
//
//   Allele order within a call is NOT canonicalized: each literal pair is its
//   own table entry. Anything else (no-calls, "0", other bases) is unknown.
// ==============================================================================

use crate::models::{ApoeGenotype, ClassifiedRecord, SampleRecord};

/// Separator between the two marker calls in a combined key
pub const KEY_SEPARATOR: char = '_';

/// Build the combined lookup key, e.g. `("CT", "CC")` → `"CT_CC"`
pub fn combined_key(rs429358: &str, rs7412: &str) -> String {
    format!("{}{}{}", rs429358, KEY_SEPARATOR, rs7412)
}

/// Classify an APOE genotype from the rs429358 and rs7412 compound genotypes
///
/// # Arguments
/// * `rs429358` - Two-letter call at rs429358 (e.g., "TT", "CT")
/// * `rs7412` - Two-letter call at rs7412 (e.g., "CC")
///
/// # Returns
/// The matching `ApoeGenotype`, or `ApoeGenotype::Unknown` when the pair is not
/// in the lookup table. Never fails.
///
/// # Examples
/// ```
/// use apoe_genotyper::classifier::classify;
/// use apoe_genotyper::models::ApoeGenotype;
///
/// assert_eq!(classify("CT", "CC"), ApoeGenotype::E3E4);
/// assert_eq!(classify("TT", "CC"), ApoeGenotype::E3E3);
/// assert_eq!(classify("0", "CC"), ApoeGenotype::Unknown);
/// ```
pub fn classify(rs429358: &str, rs7412: &str) -> ApoeGenotype {
    match (rs429358, rs7412) {
        ("TT", "TT") => ApoeGenotype::E2E2,
        ("TT", "TC") => ApoeGenotype::E2E3,
        ("TT", "CT") => ApoeGenotype::E2E3,
        ("TC", "TC") => ApoeGenotype::E2E4OrE1E3,
        ("CT", "CT") => ApoeGenotype::E2E4OrE1E3,
        ("TC", "CT") => ApoeGenotype::E2E4OrE1E3,
        ("CT", "TC") => ApoeGenotype::E2E4OrE1E3,
        ("TT", "CC") => ApoeGenotype::E3E3,
        ("TC", "CC") => ApoeGenotype::E3E4,
        ("CT", "CC") => ApoeGenotype::E3E4,
        ("CC", "CC") => ApoeGenotype::E4E4,
        _ => ApoeGenotype::Unknown,
    }
}

/// Classify a single sample
pub fn classify_record(sample: SampleRecord) -> ClassifiedRecord {
    let genotype = classify(&sample.rs429358, &sample.rs7412);
    ClassifiedRecord { sample, genotype }
}

/// Batch classify a cohort, preserving input order
pub fn classify_all(samples: Vec<SampleRecord>) -> Vec<ClassifiedRecord> {
    samples.into_iter().map(classify_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(fid: &str, rs429358: &str, rs7412: &str) -> SampleRecord {
        SampleRecord {
            fid: fid.to_string(),
            iid: fid.to_string(),
            pat: "0".to_string(),
            mat: "0".to_string(),
            sex: "1".to_string(),
            pheno: "1".to_string(),
            rs429358: rs429358.to_string(),
            rs7412: rs7412.to_string(),
        }
    }

    #[test]
    fn test_combined_key() {
        assert_eq!(combined_key("CT", "CC"), "CT_CC");
        assert_eq!(combined_key("0", "CC"), "0_CC");
    }

    #[test]
    fn test_full_lookup_table() {
        let table = vec![
            ("TT", "TT", "e2/e2"),
            ("TT", "TC", "e2/e3"),
            ("TT", "CT", "e2/e3"),
            ("TC", "TC", "e2/e4 or e1/e3"),
            ("CT", "CT", "e2/e4 or e1/e3"),
            ("TC", "CT", "e2/e4 or e1/e3"),
            ("CT", "TC", "e2/e4 or e1/e3"),
            ("TT", "CC", "e3/e3"),
            ("TC", "CC", "e3/e4"),
            ("CT", "CC", "e3/e4"),
            ("CC", "CC", "e4/e4"),
        ];

        for (rs429358, rs7412, expected) in table {
            assert_eq!(
                classify(rs429358, rs7412).as_str(),
                expected,
                "Failed for key {}",
                combined_key(rs429358, rs7412)
            );
        }
    }

    #[test]
    fn test_unrecognized_pairs_are_unknown() {
        let unknown = vec![
            ("AA", "TT"),
            ("00", "TT"),
            ("0", "CC"),
            ("CC", "0"),
            ("0", "0"),
            ("GG", "GG"),
            ("T", "CC"),
            ("TTT", "CC"),
            ("tt", "cc"),
            // Combinations absent from the table even though both calls are valid
            ("CC", "TT"),
            ("CC", "TC"),
            ("TC", "TT"),
            ("CT", "TT"),
        ];

        for (rs429358, rs7412) in unknown {
            assert_eq!(
                classify(rs429358, rs7412),
                ApoeGenotype::Unknown,
                "Expected unknown for key {}",
                combined_key(rs429358, rs7412)
            );
        }
    }

    #[test]
    fn test_allele_order_not_canonicalized() {
        // TC_TC and CT_CT are separate entries that share a label
        assert_eq!(classify("TC", "TC"), ApoeGenotype::E2E4OrE1E3);
        assert_eq!(classify("CT", "CT"), ApoeGenotype::E2E4OrE1E3);

        // rs7412 order matters for e2/e3; TC_TT has no entry at all
        assert_eq!(classify("TT", "TC"), ApoeGenotype::E2E3);
        assert_eq!(classify("TC", "TT"), ApoeGenotype::Unknown);
    }

    #[test]
    fn test_reclassification_is_stable() {
        let classified = classify_record(sample("BF-1009", "CT", "CC"));
        let again = classify(&classified.sample.rs429358, &classified.sample.rs7412);
        assert_eq!(again, classified.genotype);
        assert_eq!(classify_record(classified.sample.clone()), classified);
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let records = classify_all(vec![
            sample("BF-1009", "CT", "CC"),
            sample("BF-1010", "TT", "CC"),
            sample("BF-1011", "0", "CC"),
        ]);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].sample.fid, "BF-1009");
        assert_eq!(records[0].genotype, ApoeGenotype::E3E4);
        assert_eq!(records[1].genotype, ApoeGenotype::E3E3);
        assert_eq!(records[2].genotype, ApoeGenotype::Unknown);
    }
}
