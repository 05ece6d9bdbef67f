//! # Engine Module
//!
//! Stateless record transformations for PDB normalization.
//!
//! ## Overview
//!
//! Every transformation takes an ordered record sequence and returns a new one. Inputs
//! are never mutated, so a failing step leaves the caller's records untouched. The
//! transformations share two streaming detectors that decide where chains and residues
//! begin.
//!
//! ## Architecture
//!
//! - **Boundaries** ([`boundary`]) - Chain and residue boundary detectors
//! - **Renumbering** ([`renumber`]) - Sequential atom and residue ids
//! - **Sectioning** ([`sectioning`]) - Repartitioning residues into named chains
//! - **Positions** ([`positions`]) - Bulk coordinate replacement over a record range
//! - **Configuration** ([`config`]) - Step options and the validated run configuration
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod boundary;
pub mod config;
pub mod error;
pub mod positions;
pub mod renumber;
pub mod sectioning;
