//! `tailor init`: write the built-in profile to `<root>/tailor.toml`.

use tailor_adapters::{PROFILE_FILE_NAME, builtin_profile, profile_loader::ProfileManifest};
use tailor_core::application::ApplicationError;

use crate::{
    cli::InitArgs,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const HEADER: &str = "\
# Tailor profile: the placeholder identity this template ships with and the
# paths `tailor customize` rewrites. Every key is optional; missing keys use
# the built-in Python package profile.

";

/// Write a profile describing the template at `--root`.
pub fn execute(args: InitArgs, output: &OutputManager) -> CliResult<()> {
    if !args.root.is_dir() {
        return Err(CliError::Core(
            ApplicationError::RootNotFound { path: args.root }.into(),
        ));
    }

    let path = args.root.join(PROFILE_FILE_NAME);

    if path.exists() && !args.force {
        output.warning(&format!(
            "Profile already exists at {}  (use --force to overwrite)",
            path.display(),
        ))?;
        return Ok(());
    }

    let body = ProfileManifest::from_profile(&builtin_profile::python_package()).to_toml()?;

    std::fs::write(&path, format!("{HEADER}{body}"))
        .with_cli_context(|| format!("Failed to write profile to '{}'", path.display()))?;

    output.success(&format!("Profile written to {}", path.display()))?;
    output.detail("Edit [template] to match the placeholders in your template")?;

    Ok(())
}
