//! Derived-variable registry and transforms.

use crate::error::ObsError;

/// Largest credible observation-error value; reciprocals beyond this
/// are treated as missing.
const SIGO_CAP: f64 = 9999.0;

/// Sentinel marking a missing/invalid derived value.
const MISSING: f64 = -9999.9;

/// How a derived variable is computed from its fetched inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transform {
    /// First input minus the second, element-wise.
    Subtract,
    /// Element-wise reciprocal, capped to the missing-value sentinel.
    ReciprocalCap,
}

/// A derived diagnostic: its transform plus the raw variables it reads,
/// in the order the transform consumes them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DerivedVar {
    pub name: &'static str,
    pub deps: &'static [&'static str],
    pub transform: Transform,
}

/// The fixed derived-variable registry. Not extensible by callers.
///
/// `sigo` and `sigo_final` intentionally share a dependency and a
/// transform: two names, one behaviour.
pub(crate) const DERIVED_VARS: &[DerivedVar] = &[
    DerivedVar {
        name: "amb",
        deps: &["omf", "oma"],
        transform: Transform::Subtract,
    },
    DerivedVar {
        name: "sigo_input",
        deps: &["Errinv_Input"],
        transform: Transform::ReciprocalCap,
    },
    DerivedVar {
        name: "sigo_final",
        deps: &["Errinv_Final"],
        transform: Transform::ReciprocalCap,
    },
    DerivedVar {
        name: "sigo",
        deps: &["Errinv_Final"],
        transform: Transform::ReciprocalCap,
    },
];

/// Look up a derived variable by name.
pub(crate) fn lookup(name: &str) -> Option<&'static DerivedVar> {
    DERIVED_VARS.iter().find(|d| d.name == name)
}

impl Transform {
    /// Apply the transform to its fetched inputs, given as
    /// `(name, values)` pairs in declared dependency order.
    ///
    /// Each transform re-checks the input count it consumes, even
    /// though the fixed registry makes a mismatch unreachable.
    pub(crate) fn apply(
        self,
        name: &str,
        inputs: &[(String, Vec<f64>)],
    ) -> Result<Vec<f64>, ObsError> {
        match self {
            Transform::Subtract => subtract(name, inputs),
            Transform::ReciprocalCap => reciprocal_cap(name, inputs),
        }
    }
}

/// Element-wise `inputs[0] - inputs[1]`.
fn subtract(name: &str, inputs: &[(String, Vec<f64>)]) -> Result<Vec<f64>, ObsError> {
    if inputs.len() != 2 {
        return Err(ObsError::Arity {
            name: name.to_string(),
            expected: 2,
            got: inputs.len(),
        });
    }
    let (_, a) = &inputs[0];
    let (_, b) = &inputs[1];
    if a.len() != b.len() {
        return Err(ObsError::InputLength {
            name: name.to_string(),
            first_len: a.len(),
            second_len: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x - y).collect())
}

/// Element-wise `1/v`, with values beyond [`SIGO_CAP`] replaced by the
/// [`MISSING`] sentinel.
///
/// A zero input yields an infinite reciprocal, which always exceeds the
/// cap and becomes the sentinel; that is expected, not an error.
fn reciprocal_cap(name: &str, inputs: &[(String, Vec<f64>)]) -> Result<Vec<f64>, ObsError> {
    if inputs.len() != 1 {
        return Err(ObsError::Arity {
            name: name.to_string(),
            expected: 1,
            got: inputs.len(),
        });
    }
    let (_, values) = &inputs[0];
    Ok(values
        .iter()
        .map(|&v| {
            let r = 1.0 / v;
            if r > SIGO_CAP { MISSING } else { r }
        })
        .collect())
}
