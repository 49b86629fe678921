//! # ncdiag-obs
//!
//! Retrieve and derive observation diagnostics from GSI-style NetCDF
//! diag files.
//!
//! [`Obs`] reads raw variables from one file by short or long name,
//! optionally filtered by a single-equality mask expression, and
//! computes derived quantities (`amb`, `sigo`, ...) through a fixed
//! dependency registry. [`ObsTemplate`] aggregates a variable across a
//! time series of files named by a `$yyyy$mm$dd$hh` filename template.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ncdiag_obs::{NameMap, Obs, ObsTemplate, SeriesRequest};
//!
//! let obs = Obs::new("diag_conv_ps.20180220_12z.nc4", names.clone());
//! let omf = obs.get_var("omf", Some("(used==1)"))?;
//!
//! let tmpl = ObsTemplate::new("diag_conv_ps.$yyyy$mm${dd}_${hh}z.nc4", names);
//! let request = SeriesRequest::default()
//!     .with_interval(start, end)
//!     .with_mask_expr("(used==1)");
//! let series = tmpl.get_var("amb", &request)?;
//! ```

mod derive;
mod error;
mod mask;
mod names;
mod store;
mod template;

pub use error::ObsError;
pub use mask::MaskExpr;
pub use names::NameMap;
pub use store::Obs;
pub use template::{DEFAULT_HR_INC, ObsTemplate, SeriesRequest};
