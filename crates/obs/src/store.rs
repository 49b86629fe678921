//! Per-file variable retrieval and derivation.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::derive;
use crate::error::ObsError;
use crate::mask::MaskExpr;
use crate::names::NameMap;

/// Variable store for a single observation-diagnostic file.
///
/// Each retrieval opens the file read-only for the duration of the call
/// and closes it on every exit path; no handle survives a call. The
/// store itself holds only immutable configuration (path, name map,
/// optional default mask), so independent stores never share state.
#[derive(Debug, Clone)]
pub struct Obs {
    path: PathBuf,
    names: NameMap,
    mask_expr: Option<String>,
}

impl Obs {
    /// Create a store for the diag file at `path`, resolving short
    /// names through `names`.
    pub fn new(path: impl Into<PathBuf>, names: NameMap) -> Self {
        Self {
            path: path.into(),
            names,
            mask_expr: None,
        }
    }

    /// Set a default mask expression, applied whenever [`Obs::get_var`]
    /// is called without one.
    pub fn with_mask_expr(mut self, expr: impl Into<String>) -> Self {
        self.mask_expr = Some(expr.into());
        self
    }

    /// Returns the path of the underlying diag file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Retrieve the variable `name`, filtered by `mask_expr` (or the
    /// store's default mask when `None`).
    ///
    /// If `name` is a registered derived variable, its dependencies are
    /// fetched as raw variables in declared order, each under the same
    /// effective mask, and the registered transform is applied to them.
    /// Any other name is fetched directly.
    ///
    /// # Errors
    ///
    /// Returns [`ObsError::MaskFormat`]/[`ObsError::MaskValue`] for a
    /// malformed mask, [`ObsError::Arity`] if a transform receives the
    /// wrong input count, and [`ObsError::Io`] untranslated when the
    /// file or a variable is missing.
    pub fn get_var(&self, name: &str, mask_expr: Option<&str>) -> Result<Vec<f64>, ObsError> {
        if let Some(derived) = derive::lookup(name) {
            debug!(variable = name, deps = ?derived.deps, "computing derived variable");
            let mut inputs = Vec::with_capacity(derived.deps.len());
            for dep in derived.deps {
                let values = self.get_single_var(dep, mask_expr)?;
                inputs.push((dep.to_string(), values));
            }
            return derived.transform.apply(name, &inputs);
        }
        self.get_single_var(name, mask_expr)
    }

    /// Fetch one raw variable, applying the effective mask if any.
    ///
    /// The data array and, when masking, the flag-field array are read
    /// from a single scoped open of the file.
    fn get_single_var(&self, name: &str, mask_expr: Option<&str>) -> Result<Vec<f64>, ObsError> {
        let effective = mask_expr.or(self.mask_expr.as_deref());
        let long_name = self.names.resolve(name);

        let file = ncdiag_io::open_file(&self.path)?;
        let data = ncdiag_io::read_var(&file, long_name, &self.path)?;

        let Some(expr) = effective else {
            debug!(variable = name, long_name, n = data.len(), "read variable");
            return Ok(data);
        };

        let mask = MaskExpr::parse(expr)?;
        let field_long = self.names.resolve(mask.field());
        let field_values = ncdiag_io::read_var(&file, field_long, &self.path)?;
        let filtered = apply_mask(&data, mask.field(), &field_values, mask.expected()?)?;
        debug!(
            variable = name,
            long_name,
            mask = expr,
            n_total = data.len(),
            n_kept = filtered.len(),
            "read masked variable"
        );
        Ok(filtered)
    }
}

/// Keep the elements of `data` whose flag value equals `expected`.
///
/// Relative order is preserved; the result length is the number of
/// matching flags.
fn apply_mask(
    data: &[f64],
    field: &str,
    field_values: &[f64],
    expected: f64,
) -> Result<Vec<f64>, ObsError> {
    if field_values.len() != data.len() {
        return Err(ObsError::MaskLength {
            field: field.to_string(),
            field_len: field_values.len(),
            data_len: data.len(),
        });
    }
    Ok(data
        .iter()
        .zip(field_values.iter())
        .filter(|&(_, f)| *f == expected)
        .map(|(&d, _)| d)
        .collect())
}
