// ==============================================================================
// main.rs - APOE Genotyper Entry Point
// ==============================================================================
// Description: Determines APOE genotypes from a PLINK compound-genotype .ped file
// Author: Matt Barham
// Created: 2025-10-31
// Modified: 2026-10-17
// Version: 2.0.0
// ==============================================================================
// Usage:
//   apoe-genotyper -i apoe_snps.ped -o OUTPUT_NAME
// ==============================================================================

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use apoe_genotyper::processor::ApoeProcessor;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input .ped file (FID IID PAT MAT SEX PHENO rs429358 rs7412, no header)
    #[arg(short, long)]
    input: PathBuf,

    /// Desired output name (without suffix)
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Initialize tracing (stderr, so stdout carries only the report)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apoe_genotyper=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    info!("APOE genotyper starting...");

    let report = ApoeProcessor::new(args.input, args.output).process()?;

    println!("These are the final counts of the number of genotypes");
    for (genotype, count) in report.summary.iter() {
        println!("{:<16}{}", genotype.as_str(), count);
    }
    println!(
        "Your complete genotype file has been saved here: {}",
        report.outputs.genotypes.display()
    );
    println!(
        "The summary counts have been saved here: {}",
        report.outputs.summary.display()
    );
    println!("Thanks!");

    Ok(())
}
