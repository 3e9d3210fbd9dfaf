// ==============================================================================
// lib.rs - APOE Genotyper Library
// ==============================================================================
// Description: Library interface for APOE genotype classification modules
// Author: Matt Barham
// Created: 2025-11-03
// Modified: 2026-10-17
// Version: 2.0.0
// ==============================================================================

pub mod parsers;
pub mod models;
pub mod classifier;
pub mod summary;
pub mod output;
pub mod processor;
