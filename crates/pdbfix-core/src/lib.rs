//! # pdbfix Core Library
//!
//! Normalization of PDB coordinate files: renumbering atoms and residues, repartitioning
//! residues into chains, and replacing atom coordinates, all while preserving the fixed
//! 79-column record layout.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture.
//!
//! - **[`core`]: The Foundation.** The fixed-column record model, the line codec, file
//!   I/O for PDB and CSV coordinate files, and residue templates for synthesizing records.
//!
//! - **[`engine`]: The Logic Core.** Boundary detection and the individual record
//!   transformations. Each one consumes a record sequence and produces a new one.
//!
//! - **[`workflows`]: The Public API.** Runs a configured set of transformations over a
//!   record sequence in a fixed order.

pub mod core;
pub mod engine;
pub mod workflows;
