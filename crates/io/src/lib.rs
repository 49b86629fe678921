//! # ncdiag-io
//!
//! Read named variables from GSI-style NetCDF observation-diagnostic
//! files. Bridges the external file format into ncdiag's internal
//! `Vec<f64>` array-based APIs.

mod error;
mod netcdf_read;

pub use error::IoError;
pub use netcdf_read::{open_file, read_var};
