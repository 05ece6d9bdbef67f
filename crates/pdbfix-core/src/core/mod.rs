//! # Core Module
//!
//! Stateless building blocks shared by the transformation engine: the record data
//! model with its fixed column layout, the line codec and file I/O, and the residue
//! template catalogue used to synthesize new records.
//!
//! - **Records** ([`models`]) - `Record`, `AtomRecord` and the static column table
//! - **I/O** ([`io`]) - line decode/encode, PDB files, CSV coordinates
//! - **Templates** ([`templates`]) - residue templates and the peptide builder

pub mod io;
pub mod models;
pub mod templates;
