// ==============================================================================
// summary.rs - Cohort APOE Genotype Frequencies
// ==============================================================================
// Description: Counts classified samples per APOE genotype label
// Author: Matt Barham
// Created: 2026-10-17
// Modified: 2026-10-17
// Version: 1.0.0
// ==============================================================================

use std::collections::HashMap;

use crate::models::{ApoeGenotype, ClassifiedRecord, SummaryRow};

/// Per-label sample counts, ordered by count descending then label ascending
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencySummary {
    entries: Vec<(ApoeGenotype, usize)>,
}

impl FrequencySummary {
    /// Count every record, including those labelled `unknown`
    pub fn from_records(records: &[ClassifiedRecord]) -> Self {
        Self::from_genotypes(records.iter().map(|r| r.genotype))
    }

    pub fn from_genotypes(genotypes: impl IntoIterator<Item = ApoeGenotype>) -> Self {
        let mut counts: HashMap<ApoeGenotype, usize> = HashMap::new();
        for genotype in genotypes {
            *counts.entry(genotype).or_insert(0) += 1;
        }

        let mut entries: Vec<(ApoeGenotype, usize)> = counts.into_iter().collect();
        entries.sort_by(|(a, a_count), (b, b_count)| {
            b_count.cmp(a_count).then_with(|| a.as_str().cmp(b.as_str()))
        });

        Self { entries }
    }

    /// Total number of samples counted
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Count for one label (0 if never observed)
    pub fn count(&self, genotype: ApoeGenotype) -> usize {
        self.entries
            .iter()
            .find(|(g, _)| *g == genotype)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ApoeGenotype, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of distinct labels observed
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rows(&self) -> Vec<SummaryRow> {
        self.iter()
            .map(|(genotype, count)| SummaryRow { genotype, count })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_all;
    use crate::models::SampleRecord;

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
    fn test_two_sample_cohort() {
        let records = classify_all(vec![
            sample("BF-1009", "CT", "CC"),
            sample("BF-1010", "TT", "CC"),
        ]);
        let summary = FrequencySummary::from_records(&records);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary.count(ApoeGenotype::E3E4), 1);
        assert_eq!(summary.count(ApoeGenotype::E3E3), 1);
        assert_eq!(summary.count(ApoeGenotype::E4E4), 0);
        assert_eq!(summary.total(), 2);
    }

    #[test]
    fn test_unknown_is_counted() {
        let records = classify_all(vec![
            sample("S1", "0", "CC"),
            sample("S2", "TT", "CC"),
            sample("S3", "AA", "TT"),
        ]);
        let summary = FrequencySummary::from_records(&records);

        assert_eq!(summary.count(ApoeGenotype::Unknown), 2);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_total_matches_record_count() {
        let calls = ["TT", "TC", "CT", "CC", "0", "AG"];
        let mut samples = Vec::new();
        for (i, a) in calls.iter().enumerate() {
            for (j, b) in calls.iter().enumerate() {
                samples.push(sample(&format!("S{}_{}", i, j), a, b));
            }
        }
        let n = samples.len();

        let summary = FrequencySummary::from_records(&classify_all(samples));
        assert_eq!(summary.total(), n);
    }

    #[test]
    fn test_canonical_order() {
        let summary = FrequencySummary::from_genotypes(vec![
            ApoeGenotype::E3E3,
            ApoeGenotype::Unknown,
            ApoeGenotype::E3E4,
            ApoeGenotype::E3E3,
            ApoeGenotype::E2E3,
            ApoeGenotype::E3E3,
            ApoeGenotype::E3E4,
        ]);

        let order: Vec<(ApoeGenotype, usize)> = summary.iter().collect();
        assert_eq!(
            order,
            vec![
                (ApoeGenotype::E3E3, 3),
                (ApoeGenotype::E3E4, 2),
                // Ties broken alphabetically: "e2/e3" < "unknown"
                (ApoeGenotype::E2E3, 1),
                (ApoeGenotype::Unknown, 1),
            ]
        );
    }

    #[test]
    fn test_empty_summary() {
        let summary = FrequencySummary::from_records(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.total(), 0);
        assert!(summary.rows().is_empty());
    }
}
