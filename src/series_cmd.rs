//! Series command: aggregate a variable across a templated time series.

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, info_span};

use ncdiag_calendar::CycleTime;
use ncdiag_obs::{ObsTemplate, SeriesRequest};

use crate::cli::SeriesArgs;
use crate::config;
use crate::convert;
use crate::output::{ValuesOutput, write_json};

/// Run the time-series aggregation pipeline.
pub fn run(args: SeriesArgs) -> Result<()> {
    let _cmd = info_span!("series").entered();

    // 1. Load configuration and name table
    let cfg = config::load(args.config.as_deref())?;
    let names = convert::build_name_map(args.names.as_deref(), &cfg)?;

    // 2. Resolve the template
    let template = args.template.or(cfg.series.template).ok_or_else(|| {
        anyhow!("no filename template: pass --template or set [series].template in config")
    })?;

    // 3. Build the series request from CLI arguments
    let interval = match (&args.start, &args.end) {
        (Some(s), Some(e)) => Some((
            s.parse::<CycleTime>().context("invalid --start cycle")?,
            e.parse::<CycleTime>().context("invalid --end cycle")?,
        )),
        (None, None) => None,
        _ => bail!("--start and --end must be given together"),
    };

    let cycles: Vec<CycleTime> = args
        .cycles
        .iter()
        .map(|t| t.parse())
        .collect::<Result<_, _>>()
        .context("invalid --cycle token")?;

    let mask = args.mask.or(cfg.mask.expr);

    let mut request =
        SeriesRequest::default().with_hr_inc(args.hr_inc.unwrap_or(cfg.series.hr_inc));
    if let Some((start, end)) = interval {
        request = request.with_interval(start, end);
    }
    if !cycles.is_empty() {
        request = request.with_cycles(cycles);
    }
    if let Some(expr) = &mask {
        request = request.with_mask_expr(expr.clone());
    }

    // 4. Aggregate and write output
    info!(template = %template, variable = %args.variable, "aggregating series");
    let tmpl = ObsTemplate::new(&template, names);
    let values = tmpl.get_var(&args.variable, &request)?;
    info!(n_values = values.len(), "series aggregated");

    let out = ValuesOutput::new(&args.variable, mask.as_deref(), values);
    write_json(&out.to_json()?, args.output.as_deref())
}
