//! Low-level NetCDF extraction helpers.

use std::path::Path;

use crate::error::IoError;

/// Open a NetCDF file at `path` read-only, returning
/// [`IoError::FileNotFound`] if the path does not exist on disk.
///
/// The returned handle closes the file when dropped, so holding it in a
/// narrow scope guarantees release on every exit path.
pub fn open_file(path: &Path) -> Result<netcdf::File, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(netcdf::open(path)?)
}

/// Read the full array of the variable `name` as `f64`.
///
/// The variable is addressed by its exact name; no alias lookup is
/// attempted. Returns [`IoError::MissingVariable`] if the file has no
/// variable with that name.
pub fn read_var(file: &netcdf::File, name: &str, path: &Path) -> Result<Vec<f64>, IoError> {
    let var = file.variable(name).ok_or_else(|| IoError::MissingVariable {
        name: name.to_string(),
        path: path.to_path_buf(),
    })?;
    Ok(var.get_values::<f64, _>(..)?)
}
