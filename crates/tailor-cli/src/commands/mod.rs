//! Command handlers, one module per subcommand.

use tailor_adapters::{CustomizationProfile, ProfileLoader};
use tracing::debug;

use crate::{
    cli::TargetArgs,
    error::{CliError, CliResult},
};

pub mod check;
pub mod completions;
pub mod config;
pub mod customize;
pub mod init;

/// Resolve the profile for `--root` / `--profile`.
///
/// An explicit `--profile` that does not exist is a not-found error rather
/// than a parse error.
pub(crate) fn load_profile(target: &TargetArgs) -> CliResult<CustomizationProfile> {
    if let Some(path) = &target.profile {
        if !path.is_file() {
            return Err(CliError::ProfileNotFound { path: path.clone() });
        }
    }

    let profile = ProfileLoader::new(&target.root).load(target.profile.as_deref())?;
    debug!(source = %profile.source, package = %profile.template.package_name, "profile resolved");
    Ok(profile)
}
