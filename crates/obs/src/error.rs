//! Error types for ncdiag-obs.

use ncdiag_calendar::CalendarError;
use ncdiag_io::IoError;

/// Error type for all fallible operations in the ncdiag-obs crate.
///
/// This enum covers malformed mask expressions, transform arity and
/// shape violations, unresolvable cycle sets, and errors propagated
/// from the file-reading and cycle-arithmetic collaborators.
#[derive(Debug, thiserror::Error)]
pub enum ObsError {
    /// Returned when a mask expression is not a single parenthesised
    /// equality.
    #[error("mask expression '{expr}' is not of the form (some_field==some_value)")]
    MaskFormat {
        /// The offending expression.
        expr: String,
    },

    /// Returned when a mask's expected-value token cannot be coerced to
    /// a number.
    #[error("mask value '{value}' is not numeric")]
    MaskValue {
        /// The non-numeric value token.
        value: String,
    },

    /// Returned when a mask field array does not describe the same
    /// observations as the data array.
    #[error("mask field '{field}' has {field_len} values, data array has {data_len}")]
    MaskLength {
        /// Name of the mask field.
        field: String,
        /// Length of the mask field array.
        field_len: usize,
        /// Length of the data array being filtered.
        data_len: usize,
    },

    /// Returned when a transform receives the wrong number of inputs.
    #[error("derived variable '{name}' expects {expected} input(s), got {got}")]
    Arity {
        /// Name of the derived variable.
        name: String,
        /// Number of inputs the transform consumes.
        expected: usize,
        /// Number of inputs actually supplied.
        got: usize,
    },

    /// Returned when a transform's fetched inputs differ in length.
    #[error("derived variable '{name}' input lengths differ: {first_len} vs {second_len}")]
    InputLength {
        /// Name of the derived variable.
        name: String,
        /// Length of the first input.
        first_len: usize,
        /// Length of the mismatching input.
        second_len: usize,
    },

    /// Returned when a series request names zero or conflicting cycle
    /// specifications.
    #[error("cannot resolve cycle set: {details}")]
    AmbiguousRange {
        /// Description of what was (or was not) specified.
        details: String,
    },

    /// Propagated unmodified from the file-reading collaborator.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Propagated unmodified from the cycle-arithmetic collaborator.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
