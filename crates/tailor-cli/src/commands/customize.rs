//! Implementation of the `tailor customize` command.
//!
//! Responsibility: turn CLI arguments and config into a project [`Identity`],
//! call the core customize service, and display the report. No business
//! logic lives here.

use std::io::IsTerminal as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};

use tailor_adapters::{CustomizationProfile, LocalFilesystem};
use tailor_core::{
    application::{CustomizeService, RunMode},
    domain::{CustomizationReport, FileOutcome, FileStatus, Identity, RenameOutcome},
};

use crate::{
    cli::CustomizeArgs,
    commands::load_profile,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Printed after a successful (non dry-run) customization.
pub const NEXT_STEPS: &str = "Template customization complete!
Next steps:
1. Review the changes
2. Initialize git repository: git init
3. Create initial commit: git add . && git commit -m \"feat: initial commit\"
4. Create initial tag: git tag v0.1.0
5. Install development dependencies: poetry install --with dev,docs,test,build
6. Setup pre-commit hooks: pre-commit install --install-hooks";

/// Execute the `tailor customize` command.
///
/// 1. Resolve the profile and the project identity
/// 2. Confirm with the user unless `--yes`, `--quiet`, `--dry-run`, JSON
///    output, or a non-interactive stdin
/// 3. Run the customize service
/// 4. Print the report and the next steps
#[instrument(skip_all, fields(package = %args.name, root = %args.target.root.display()))]
pub fn execute(args: CustomizeArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let profile = load_profile(&args.target)?;
    let project = resolve_identity(&args, config)?;
    let mode = if args.dry_run {
        RunMode::DryRun
    } else {
        RunMode::Apply
    };

    if needs_confirmation(&args, output) {
        show_plan(&args.target.root, &profile, &project, output)?;
        if !output.confirm("Rewrite the template in place?")? {
            return Err(CliError::Cancelled);
        }
    }

    let service = CustomizeService::new(Box::new(LocalFilesystem::new()));

    let spinner = output.spinner("Customizing template...");
    let result = service.customize(
        &args.target.root,
        &profile.plan,
        &profile.template,
        &project,
        mode,
    );
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let report = result?;

    info!(
        updated = report.updated_count(),
        dry_run = report.dry_run,
        "customize command finished"
    );

    if output.is_json() {
        return output.json(&JsonReport {
            generated_at: Utc::now(),
            root: &args.target.root,
            profile: profile.source.to_string(),
            report: &report,
        });
    }

    render_report(&report, output)?;

    if report.dry_run {
        output.info("Dry run: no files were changed.")?;
    } else {
        output.print("")?;
        output.print(NEXT_STEPS)?;
    }

    Ok(())
}

/// Report envelope for `--output-format json`.
#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    root: &'a Path,
    profile: String,
    report: &'a CustomizationReport,
}

// ── Identity resolution ───────────────────────────────────────────────────────

/// Flags first, then the `[identity]` config section.
fn resolve_identity(args: &CustomizeArgs, config: &AppConfig) -> CliResult<Identity> {
    let defaults = &config.identity;
    let author = pick(&args.author, &defaults.author, "author", "author")?;
    let email = pick(&args.email, &defaults.email, "email", "email")?;
    let github_username = pick(
        &args.github_username,
        &defaults.github_username,
        "github_username",
        "github-username",
    )?;

    Ok(Identity::new(
        args.name.trim(),
        author,
        email,
        args.description.trim(),
        github_username,
    ))
}

fn pick(
    flag: &Option<String>,
    fallback: &Option<String>,
    field: &'static str,
    flag_name: &'static str,
) -> CliResult<String> {
    flag.as_deref()
        .or(fallback.as_deref())
        .map(|v| v.trim().to_owned())
        .ok_or(CliError::MissingIdentity {
            field,
            flag: flag_name,
        })
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn needs_confirmation(args: &CustomizeArgs, output: &OutputManager) -> bool {
    !args.yes
        && !args.dry_run
        && !output.is_quiet()
        && !output.is_json()
        && std::io::stdin().is_terminal()
}

fn show_plan(
    root: &Path,
    profile: &CustomizationProfile,
    project: &Identity,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Customization")?;
    out.print(&format!("  Template root: {}", root.display()))?;
    out.print(&format!("  Profile:       {}", profile.source))?;
    out.print("")?;
    for ((label, from), (_, to)) in profile.template.fields().into_iter().zip(project.fields()) {
        out.print(&format!("  {label:<16} {from}  \u{2192}  {to}"))?;
    }
    out.print("")?;
    out.print(&format!(
        "  {} fixed file(s); sources: *.{} under {}",
        profile.plan.files().len(),
        profile.plan.extension(),
        profile
            .plan
            .source_roots()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    ))?;
    out.print("")?;
    Ok(())
}

fn render_report(report: &CustomizationReport, out: &OutputManager) -> CliResult<()> {
    let verb = if report.dry_run { "Would update" } else { "Updated" };

    out.header("Files")?;
    for outcome in &report.files {
        render_outcome(outcome, verb, out)?;
    }

    match &report.rename {
        RenameOutcome::Renamed { from, to } => {
            out.success(&format!("Renamed {} \u{2192} {}", from.display(), to.display()))?
        }
        RenameOutcome::WouldRename { from, to } => out.info(&format!(
            "Would rename {} \u{2192} {}",
            from.display(),
            to.display()
        ))?,
        RenameOutcome::SourceMissing { from } => out.warning(&format!(
            "Package directory {} not found; nothing renamed",
            from.display()
        ))?,
        RenameOutcome::SameName => out.info("Package name unchanged; nothing renamed")?,
    }

    out.header("Source files")?;
    let mut untouched = 0;
    for outcome in &report.sources {
        if outcome.status == FileStatus::Unchanged {
            untouched += 1;
            continue;
        }
        render_outcome(outcome, verb, out)?;
    }
    if untouched > 0 {
        out.detail(&format!("  {untouched} source file(s) contained no template strings"))?;
    }

    for hazard in &report.hazards {
        out.warning(&format!(
            "The new value for '{}' ('{}') contains '{}'; running tailor again would rewrite it",
            hazard.value_of, hazard.value, hazard.contains_key
        ))?;
    }

    out.print("")?;
    out.success(&format!(
        "{} {} file(s), {} replacement(s), {} listed file(s) missing",
        verb,
        report.updated_count(),
        report.total_replacements(),
        report.files.iter().filter(|o| o.status == FileStatus::Missing).count(),
    ))?;
    Ok(())
}

fn render_outcome(outcome: &FileOutcome, verb: &str, out: &OutputManager) -> CliResult<()> {
    let path = outcome.path.display();
    match outcome.status {
        FileStatus::Updated { replacements } => {
            out.success(&format!("{verb} {path} ({replacements} replacement(s))"))?
        }
        FileStatus::Unchanged => out.detail(&format!("  {path}: no template strings"))?,
        FileStatus::Missing => out.detail(&format!("  {path}: not found, skipped"))?,
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TargetArgs;
    use crate::config::IdentityDefaults;
    use std::path::PathBuf;

    fn args(author: Option<&str>, email: Option<&str>, gh: Option<&str>) -> CustomizeArgs {
        CustomizeArgs {
            name: " mylib ".into(),
            description: "My library".into(),
            author: author.map(Into::into),
            email: email.map(Into::into),
            github_username: gh.map(Into::into),
            target: TargetArgs {
                root: PathBuf::from("."),
                profile: None,
            },
            yes: true,
            dry_run: false,
        }
    }

    #[test]
    fn flags_win_over_config() {
        let mut config = AppConfig::default();
        config.identity = IdentityDefaults {
            author: Some("Config Author".into()),
            email: Some("config@example.com".into()),
            github_username: Some("config".into()),
        };

        let identity =
            resolve_identity(&args(Some("Ada"), None, None), &config).unwrap();
        assert_eq!(identity.package_name, "mylib");
        assert_eq!(identity.author, "Ada");
        assert_eq!(identity.email, "config@example.com");
        assert_eq!(identity.github_username, "config");
    }

    #[test]
    fn missing_field_names_the_flag() {
        let err = resolve_identity(&args(Some("Ada"), Some("a@b.c"), None), &AppConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::MissingIdentity {
                flag: "github-username",
                ..
            }
        ));
    }

    #[test]
    fn next_steps_text_is_exact() {
        let lines: Vec<&str> = NEXT_STEPS.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Template customization complete!");
        assert_eq!(
            lines[4],
            "3. Create initial commit: git add . && git commit -m \"feat: initial commit\""
        );
        assert_eq!(lines[7], "6. Setup pre-commit hooks: pre-commit install --install-hooks");
    }
}
