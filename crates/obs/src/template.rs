//! Time-series aggregation across templated filenames.

use tracing::debug;

use ncdiag_calendar::{CycleTime, cycle_sequence};

use crate::error::ObsError;
use crate::names::NameMap;
use crate::store::Obs;

/// Default spacing between analysis cycles, in hours.
pub const DEFAULT_HR_INC: u32 = 6;

/// Per-call options for a series retrieval.
///
/// A request names its cycle set either as an interval (expanded with
/// the request's hour increment) or as an explicit cycle list, never
/// both. With neither, the template's default interval applies.
#[derive(Debug, Clone)]
pub struct SeriesRequest {
    interval: Option<(CycleTime, CycleTime)>,
    cycles: Option<Vec<CycleTime>>,
    hr_inc: u32,
    mask_expr: Option<String>,
}

impl Default for SeriesRequest {
    fn default() -> Self {
        Self {
            interval: None,
            cycles: None,
            hr_inc: DEFAULT_HR_INC,
            mask_expr: None,
        }
    }
}

impl SeriesRequest {
    /// Set the cycle interval to expand.
    pub fn with_interval(mut self, start: CycleTime, end: CycleTime) -> Self {
        self.interval = Some((start, end));
        self
    }

    /// Set an explicit cycle list, used verbatim and in the given order.
    pub fn with_cycles(mut self, cycles: Vec<CycleTime>) -> Self {
        self.cycles = Some(cycles);
        self
    }

    /// Set the hour increment for interval expansion.
    pub fn with_hr_inc(mut self, hr_inc: u32) -> Self {
        self.hr_inc = hr_inc;
        self
    }

    /// Set the mask expression applied to every per-cycle fetch.
    pub fn with_mask_expr(mut self, expr: impl Into<String>) -> Self {
        self.mask_expr = Some(expr.into());
        self
    }
}

/// Aggregates a variable across a time series of diag files named by a
/// date/time template.
///
/// Templates contain `$yyyy`, `$mm`, `$dd`, `$hh` placeholders (braced
/// `${...}` forms work too), substituted with zero-padded calendar
/// components of each cycle. Each resolved filename is opened through a
/// fresh [`Obs`]; results are concatenated in the chronological order
/// of the cycle set.
#[derive(Debug, Clone)]
pub struct ObsTemplate {
    template: String,
    names: NameMap,
    interval: Option<(CycleTime, CycleTime)>,
}

impl ObsTemplate {
    /// Create an aggregator for `template`, resolving short names
    /// through `names`.
    pub fn new(template: impl Into<String>, names: NameMap) -> Self {
        Self {
            template: template.into(),
            names,
            interval: None,
        }
    }

    /// Set a default cycle interval, used when a request names neither
    /// an interval nor an explicit cycle list.
    pub fn with_interval(mut self, start: CycleTime, end: CycleTime) -> Self {
        self.interval = Some((start, end));
        self
    }

    /// Retrieve `name` across the request's cycle set, concatenated in
    /// chronological order.
    ///
    /// A missing or unreadable file aborts the whole aggregation with
    /// the underlying I/O error; no partial result is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ObsError::AmbiguousRange`] if the request's cycle set
    /// cannot be resolved, plus everything [`Obs::get_var`] can return.
    pub fn get_var(&self, name: &str, request: &SeriesRequest) -> Result<Vec<f64>, ObsError> {
        let cycles = self.resolve_cycles(request)?;
        debug!(variable = name, n_cycles = cycles.len(), "resolved cycle set");

        let mut data = Vec::new();
        for cycle in cycles {
            let filename = fill_template(&self.template, cycle);
            debug!(cycle = %cycle, filename = %filename, "reading cycle file");
            let obs = Obs::new(filename, self.names.clone());
            let values = obs.get_var(name, request.mask_expr.as_deref())?;
            data.extend(values);
        }
        Ok(data)
    }

    /// Resolve the request's cycle set.
    ///
    /// Precedence: request interval, else request list, else the
    /// template's default interval. Giving both an interval and a list
    /// is rejected as a caller error.
    fn resolve_cycles(&self, request: &SeriesRequest) -> Result<Vec<CycleTime>, ObsError> {
        match (&request.interval, &request.cycles) {
            (Some(_), Some(_)) => Err(ObsError::AmbiguousRange {
                details: "both a cycle interval and an explicit cycle list were given".to_string(),
            }),
            (Some((start, end)), None) => {
                Ok(cycle_sequence(*start, *end, request.hr_inc)?)
            }
            (None, Some(cycles)) => Ok(cycles.clone()),
            (None, None) => match self.interval {
                Some((start, end)) => Ok(cycle_sequence(start, end, request.hr_inc)?),
                None => Err(ObsError::AmbiguousRange {
                    details: "no cycle interval or list was given and the template has no default"
                        .to_string(),
                }),
            },
        }
    }
}

/// Substitute `cycle` into the template's placeholders.
///
/// Recognised placeholders are `yyyy`, `mm`, `dd`, and `hh`, in `$name`
/// or `${name}` form. Unrecognised placeholders and stray `$` pass
/// through literally (safe substitution).
fn fill_template(template: &str, cycle: CycleTime) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        let Some((name, token_len)) = placeholder_at(tail) else {
            out.push('$');
            rest = &tail[1..];
            continue;
        };

        match component(name, cycle) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&tail[..token_len]),
        }
        rest = &tail[token_len..];
    }
    out.push_str(rest);
    out
}

/// Parse a `$name` or `${name}` token at the start of `tail`, which
/// begins with `$`. Returns the placeholder name and the token's total
/// length in bytes.
fn placeholder_at(tail: &str) -> Option<(&str, usize)> {
    let after = &tail[1..];
    if let Some(inner) = after.strip_prefix('{') {
        let close = inner.find('}')?;
        if close == 0 {
            return None;
        }
        Some((&inner[..close], close + 3))
    } else {
        let len = after
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        if len == 0 {
            None
        } else {
            Some((&after[..len], len + 1))
        }
    }
}

/// The zero-padded calendar component for a placeholder name.
fn component(name: &str, cycle: CycleTime) -> Option<String> {
    match name {
        "yyyy" => Some(format!("{:04}", cycle.year())),
        "mm" => Some(format!("{:02}", cycle.month())),
        "dd" => Some(format!("{:02}", cycle.day())),
        "hh" => Some(format!("{:02}", cycle.hour())),
        _ => None,
    }
}
