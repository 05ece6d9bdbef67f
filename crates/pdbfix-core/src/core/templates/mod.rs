//! Residue templates for synthesizing ATOM records.
//!
//! A template lists the atom names and element symbols of one residue type. The
//! builder stamps identifiers and coordinates onto a template to produce records,
//! applying the terminal-residue rules for the first and last residue of a peptide.

pub mod builder;
pub mod catalogue;
pub mod library;
