//! Line codec and file input/output for PDB atomic-coordinate records.
//!
//! [`codec`] converts single lines to and from [`Record`](crate::core::models::record::Record)s.
//! [`pdb`] loads and saves whole files through the [`traits::RecordFile`] interface, and
//! [`coordinates`] reads coordinate triples from CSV.

pub mod codec;
pub mod coordinates;
pub mod pdb;
pub mod traits;
