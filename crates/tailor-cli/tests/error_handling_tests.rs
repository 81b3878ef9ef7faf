//! Tests for error handling, suggestions, and exit codes.

mod common;

use common::{TemplateFixture, customize, tailor};
use predicates::prelude::*;

#[test]
fn test_missing_required_flag_is_usage_error() {
    tailor()
        .args(["customize", "--name", "mylib"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--description"));
}

#[test]
fn test_missing_identity_field_suggests_flag_and_config() {
    let fx = TemplateFixture::python();

    tailor()
        .args(["customize", "-n", "mylib", "-d", "x", "-a", "Ada", "-e", "a@b.c", "--yes"])
        .arg("--root")
        .arg(fx.root())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing github_username"))
        .stderr(predicate::str::contains("TAILOR_IDENTITY__GITHUB_USERNAME"));

    assert_eq!(fx.read("pyproject.toml"), common::PYPROJECT);
}

#[test]
fn test_invalid_package_name() {
    let fx = TemplateFixture::python();

    tailor()
        .args([
            "customize", "-n", "../escape", "-d", "x", "-a", "A", "-e", "e", "-g", "g", "--yes",
        ])
        .arg("--root")
        .arg(fx.root())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid package name"));

    assert!(fx.exists("src/pypackage_template"));
}

#[test]
fn test_empty_identity_value_is_rejected() {
    let fx = TemplateFixture::python();

    tailor()
        .args([
            "customize", "-n", "mylib", "-d", "   ", "-a", "A", "-e", "e", "-g", "g", "--yes",
        ])
        .arg("--root")
        .arg(fx.root())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("description"));
}

#[test]
fn test_missing_root_is_not_found() {
    let fx = TemplateFixture::python();

    customize(&fx.path("does-not-exist"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Template root not found"));
}

#[test]
fn test_missing_profile_is_not_found() {
    let fx = TemplateFixture::python();

    customize(fx.root())
        .arg("--profile")
        .arg(fx.path("nope.toml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Profile not found"))
        .stderr(predicate::str::contains("tailor init"));
}

#[test]
fn test_malformed_profile_is_configuration_error() {
    let fx = TemplateFixture::python();
    fx.write("tailor.toml", "[template\npackage_name = ");

    customize(fx.root())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid profile"));

    assert_eq!(fx.read("pyproject.toml"), common::PYPROJECT);
}

#[test]
fn test_existing_destination_blocks_rename() {
    let fx = TemplateFixture::python();
    fx.write("src/mylib/__init__.py", "# already here\n");

    customize(fx.root())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("tailor check"));

    assert!(fx.exists("src/pypackage_template/__init__.py"));
    assert_eq!(fx.read("src/mylib/__init__.py"), "# already here\n");
    assert_eq!(fx.read("pyproject.toml"), common::PYPROJECT);
    assert_eq!(fx.read("README.md"), common::README);
}

#[test]
fn test_missing_config_file_is_configuration_error() {
    let fx = TemplateFixture::python();

    tailor()
        .arg("--config")
        .arg(fx.path("absent.toml"))
        .arg("check")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_key() {
    tailor()
        .args(["config", "get", "identity.shoe_size"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_verbose_error_shows_no_hint() {
    let fx = TemplateFixture::python();

    customize(&fx.path("does-not-exist"))
        .arg("-v")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}
