// ==============================================================================
// processor.rs - APOE Genotyping Pipeline
// ==============================================================================
// Description: Reads a cohort .ped file, classifies APOE, writes results
// Author: Matt Barham
// Created: 2025-10-31
// Modified: 2026-10-17
// Version: 3.0.0
// ==============================================================================

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::classifier::{classify_all, combined_key};
use crate::models::ClassifiedRecord;
use crate::output::{OutputGenerator, OutputPaths};
use crate::parsers::PedParser;
use crate::summary::FrequencySummary;

/// Result of one completed run
#[derive(Debug, Clone)]
pub struct ProcessingReport {
    pub records: Vec<ClassifiedRecord>,
    pub summary: FrequencySummary,
    pub outputs: OutputPaths,
}

pub struct ApoeProcessor {
    input: PathBuf,
    output_base: PathBuf,
}

impl ApoeProcessor {
    pub fn new(input: PathBuf, output_base: PathBuf) -> Self {
        Self { input, output_base }
    }

    /// Main processing pipeline
    ///
    /// The whole input is parsed before anything is written, so a malformed
    /// file produces no output files.
    pub fn process(&self) -> Result<ProcessingReport> {
        // 1. Parse .ped
        info!("Parsing PLINK .ped file: {:?}", self.input);
        let samples = PedParser::new()
            .parse(&self.input)
            .context("Failed to read APOE genotype input")?;
        info!("Parsed {} samples", samples.len());

        // 2. Classify
        let records = classify_all(samples);
        for record in records.iter().filter(|r| r.genotype.is_unknown()) {
            warn!(
                "Unknown APOE genotype for {} {} (rs429358_rs7412 = {})",
                record.sample.fid,
                record.sample.iid,
                combined_key(&record.sample.rs429358, &record.sample.rs7412)
            );
        }

        // 3. Summarize
        let summary = FrequencySummary::from_records(&records);
        debug_assert_eq!(summary.total(), records.len());
        info!(
            "Classified {} samples into {} APOE genotypes",
            summary.total(),
            summary.len()
        );

        // 4. Write results
        let outputs = OutputGenerator::new(&self.output_base)
            .generate(&records, &summary)
            .with_context(|| {
                format!("Failed to write results for base {:?}", self.output_base)
            })?;

        Ok(ProcessingReport {
            records,
            summary,
            outputs,
        })
    }
}
