//! # Workflows Module
//!
//! High-level entry points that chain engine transformations into a complete
//! normalization run.
//!
//! - **Normalization Workflow** ([`normalize`]) - Atom renumbering, residue renumbering,
//!   chain sectioning and position replacement applied in that order.

pub mod normalize;
