//! Extract command: retrieve one variable from a single diag file.

use anyhow::Result;
use tracing::{info, info_span};

use ncdiag_obs::Obs;

use crate::cli::ExtractArgs;
use crate::config;
use crate::convert;
use crate::output::{ValuesOutput, write_json};

/// Run the single-file extraction pipeline.
pub fn run(args: ExtractArgs) -> Result<()> {
    let _cmd = info_span!("extract").entered();

    // 1. Load configuration and name table
    let cfg = config::load(args.config.as_deref())?;
    let names = convert::build_name_map(args.names.as_deref(), &cfg)?;

    // 2. Retrieve the variable
    let mask = args.mask.or(cfg.mask.expr);
    info!(
        path = %args.file.display(),
        variable = %args.variable,
        "reading diag file"
    );

    let obs = Obs::new(&args.file, names);
    let values = obs.get_var(&args.variable, mask.as_deref())?;
    info!(n_values = values.len(), "variable retrieved");

    // 3. Write output
    let out = ValuesOutput::new(&args.variable, mask.as_deref(), values);
    write_json(&out.to_json()?, args.output.as_deref())
}
