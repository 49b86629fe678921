//! Mask expression parsing.

use crate::error::ObsError;

/// A parsed single-equality mask expression.
///
/// Mask expressions select the subset of observations whose flag field
/// equals a value, written as `"(used==1)"`: parentheses required,
/// exactly one `==`. More general boolean expressions are deliberately
/// not supported; a single equality covers the domain's used/unused
/// observation filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskExpr {
    field: String,
    value: String,
}

impl MaskExpr {
    /// Check that `expr` has the `(some_field==some_value)` shape.
    ///
    /// # Errors
    ///
    /// Returns [`ObsError::MaskFormat`] unless `expr` starts with `(`,
    /// ends with `)`, and the span between them splits on the first
    /// `==` into two non-empty tokens.
    pub fn validate_format(expr: &str) -> Result<(), ObsError> {
        let malformed = || ObsError::MaskFormat {
            expr: expr.to_string(),
        };
        let inner = expr
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .ok_or_else(malformed)?;
        let (field, value) = inner.split_once("==").ok_or_else(malformed)?;
        if field.is_empty() || value.is_empty() {
            return Err(malformed());
        }
        Ok(())
    }

    /// Parse `expr` into its field name and expected-value token.
    pub fn parse(expr: &str) -> Result<Self, ObsError> {
        Self::validate_format(expr)?;
        let inner = &expr[1..expr.len() - 1];
        let (field, value) = inner.split_once("==").expect("format validated above");
        Ok(Self {
            field: field.to_string(),
            value: value.to_string(),
        })
    }

    /// Returns the field name to filter on.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the expected value as its raw string token.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Coerce the expected-value token to a float for comparison.
    ///
    /// # Errors
    ///
    /// Returns [`ObsError::MaskValue`] if the token is not numeric.
    pub fn expected(&self) -> Result<f64, ObsError> {
        self.value
            .trim()
            .parse::<f64>()
            .map_err(|_| ObsError::MaskValue {
                value: self.value.clone(),
            })
    }
}
