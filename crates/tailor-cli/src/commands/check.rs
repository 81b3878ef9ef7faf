//! `tailor check`: list template strings still present.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

use tailor_adapters::LocalFilesystem;
use tailor_core::{application::CustomizeService, domain::Residual};

use crate::{
    cli::CheckArgs,
    commands::load_profile,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Serialize)]
struct JsonResiduals<'a> {
    generated_at: DateTime<Utc>,
    root: &'a Path,
    profile: String,
    clean: bool,
    residuals: &'a [Residual],
}

/// Scan the template root; fails when anything is left.
#[instrument(skip_all, fields(root = %args.target.root.display()))]
pub fn execute(args: CheckArgs, output: &OutputManager) -> CliResult<()> {
    let profile = load_profile(&args.target)?;
    let service = CustomizeService::new(Box::new(LocalFilesystem::new()));
    let residuals = service.find_residuals(&args.target.root, &profile.plan, &profile.template)?;

    if output.is_json() {
        output.json(&JsonResiduals {
            generated_at: Utc::now(),
            root: &args.target.root,
            profile: profile.source.to_string(),
            clean: residuals.is_empty(),
            residuals: &residuals,
        })?;
    } else if residuals.is_empty() {
        output.success("No template strings found")?;
    } else {
        output.header("Template strings still present")?;
        for r in &residuals {
            output.warning(&format!("{}: '{}' x{}", r.path.display(), r.key, r.count))?;
        }
    }

    let count: usize = residuals.iter().map(|r| r.count).sum();
    if count == 0 {
        Ok(())
    } else {
        Err(CliError::ResidualPlaceholders { count })
    }
}
