//! Integration tests for the `tailor` binary.

mod common;

use common::{TemplateFixture, customize, tailor};
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    tailor()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("customize"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_version_flag() {
    tailor()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_customize_help_lists_identity_flags() {
    tailor()
        .args(["customize", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--description"))
        .stdout(predicate::str::contains("--github-username"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_customize_rewrites_template() {
    let fx = TemplateFixture::python();

    customize(fx.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Template customization complete!"))
        .stdout(predicate::str::contains(
            "5. Install development dependencies: poetry install --with dev,docs,test,build",
        ));

    let pyproject = fx.read("pyproject.toml");
    assert!(pyproject.contains(r#"name = "mylib""#));
    assert!(pyproject.contains(r#"description = "Analytical engine helpers""#));
    assert!(pyproject.contains("Ada Lovelace <ada@example.com>"));
    assert!(pyproject.contains("https://github.com/ada/mylib"));
    assert!(pyproject.contains(r#"include = "mylib""#));

    assert!(fx.read("README.md").starts_with("# mylib\n"));
    assert!(fx.read(".github/workflows/ci.yml").contains("--cov=mylib"));
    assert!(fx.read("docs/source/conf.py").contains("author = \"Ada Lovelace\""));
}

#[test]
fn test_customize_renames_package_and_rewrites_sources() {
    let fx = TemplateFixture::python();

    customize(fx.root()).assert().success();

    assert!(!fx.exists("src/pypackage_template"));
    assert!(fx.exists("src/mylib/py.typed"));
    assert_eq!(
        fx.read("src/mylib/__init__.py"),
        "\"\"\"Analytical engine helpers.\"\"\"\n\n__author__ = \"Ada Lovelace\"\n__email__ = \"ada@example.com\"\n"
    );
    assert!(fx.read("src/mylib/core.py").starts_with("from mylib import __author__"));
    assert!(fx.read("tests/conftest.py").contains("from mylib.core import hello"));
    assert!(fx.read("tests/unit/test_core.py").contains("from mylib.core import hello"));
}

#[test]
fn test_customize_does_not_create_missing_files() {
    let fx = TemplateFixture::python();

    customize(fx.root()).assert().success();

    assert!(!fx.exists("LICENSE"));
    assert!(!fx.exists("CONTRIBUTING.md"));
}

#[test]
fn test_customize_dry_run_changes_nothing() {
    let fx = TemplateFixture::python();

    customize(fx.root())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("Would rename"))
        .stdout(predicate::str::contains("Template customization complete!").not());

    assert_eq!(fx.read("pyproject.toml"), common::PYPROJECT);
    assert!(fx.exists("src/pypackage_template/__init__.py"));
    assert!(!fx.exists("src/mylib"));
}

#[test]
fn test_customize_json_report() {
    let fx = TemplateFixture::python();

    let assert = customize(fx.root())
        .args(["--output-format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert!(json["generated_at"].is_string());
    assert_eq!(json["report"]["dry_run"], false);
    assert_eq!(json["report"]["rename"]["status"], "renamed");
    assert_eq!(json["report"]["files"][0]["path"], "pyproject.toml");
    assert_eq!(json["report"]["files"][0]["status"], "updated");

    let sources = json["report"]["sources"].as_array().unwrap();
    assert!(sources.iter().any(|s| s["path"] == "tests/conftest.py"));
}

#[test]
fn test_second_run_reports_nothing_to_rename() {
    let fx = TemplateFixture::python();

    customize(fx.root()).assert().success();
    let after_first = fx.read("pyproject.toml");

    customize(fx.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("not found; nothing renamed"));

    assert_eq!(fx.read("pyproject.toml"), after_first);
}

#[test]
fn test_identity_falls_back_to_config_file() {
    let fx = TemplateFixture::python();
    fx.write(
        "user-config.toml",
        "[identity]\nauthor = \"Config Author\"\nemail = \"config@example.com\"\ngithub_username = \"cfg\"\n",
    );

    tailor()
        .arg("--config")
        .arg(fx.path("user-config.toml"))
        .args(["customize", "-n", "mylib", "-d", "From config", "--yes"])
        .arg("--root")
        .arg(fx.root())
        .assert()
        .success();

    let pyproject = fx.read("pyproject.toml");
    assert!(pyproject.contains("Config Author <config@example.com>"));
    assert!(pyproject.contains("https://github.com/cfg/mylib"));
}

#[test]
fn test_identity_falls_back_to_env() {
    let fx = TemplateFixture::python();

    tailor()
        .env("TAILOR_IDENTITY__AUTHOR", "Env Author")
        .env("TAILOR_IDENTITY__EMAIL", "env@example.com")
        .env("TAILOR_IDENTITY__GITHUB_USERNAME", "envuser")
        .args(["customize", "-n", "mylib", "-d", "From env", "--yes"])
        .arg("--root")
        .arg(fx.root())
        .assert()
        .success();

    assert!(fx.read("pyproject.toml").contains("Env Author <env@example.com>"));
}

#[test]
fn test_check_reports_uncustomized_template() {
    let fx = TemplateFixture::python();

    tailor()
        .arg("check")
        .arg("--root")
        .arg(fx.root())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("pypackage_template"))
        .stderr(predicate::str::contains("template string occurrence(s) remain"));
}

#[test]
fn test_check_passes_after_customize() {
    let fx = TemplateFixture::python();

    customize(fx.root()).assert().success();

    tailor()
        .arg("check")
        .arg("--root")
        .arg(fx.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("No template strings found"));
}

#[test]
fn test_init_writes_profile() {
    let fx = TemplateFixture::python();

    tailor()
        .arg("init")
        .arg("--root")
        .arg(fx.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile written"));

    let profile = fx.read("tailor.toml");
    assert!(profile.contains("[template]"));
    assert!(profile.contains("package_name = \"pypackage_template\""));
    assert!(profile.contains("[layout]"));

    tailor()
        .arg("init")
        .arg("--root")
        .arg(fx.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_profile_file_drives_customization() {
    let fx = TemplateFixture::python();
    fx.write(
        "tailor.toml",
        "[layout]\nfiles = [\"pyproject.toml\"]\nsource_roots = [\"src\"]\n",
    );

    customize(fx.root()).assert().success();

    assert!(fx.read("pyproject.toml").contains(r#"name = "mylib""#));
    // README is no longer in the plan, tests/ is no longer a source root.
    assert_eq!(fx.read("README.md"), common::README);
    assert!(fx.read("tests/conftest.py").contains("pypackage_template"));
    assert!(fx.exists("src/mylib/core.py"));
}

#[test]
fn test_config_get_and_path() {
    tailor()
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output.format = \"auto\""));

    tailor()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml").or(predicate::str::contains(".tailor.toml")));
}

#[test]
fn test_completions_bash() {
    tailor()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tailor"));
}

#[test]
fn test_config_json_format_applies_to_logs() {
    let fx = TemplateFixture::python();
    fx.write("user-config.toml", "[output]\nformat = \"json\"\n");

    let assert = tailor()
        .arg("-vv")
        .arg("--config")
        .arg(fx.path("user-config.toml"))
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"CLI started\""));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value, "json");
}
