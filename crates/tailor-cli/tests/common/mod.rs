//! Shared fixtures for the binary tests.
//!
//! [`TemplateFixture`] lays out a small but realistic Python package template
//! in a temporary directory.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const PYPROJECT: &str = r#"[tool.poetry]
name = "pypackage_template"
version = "0.1.0"
description = "A fully featured Python package template"
authors = ["Marcus Sherman <m.sherman@northeastern.edu>"]
homepage = "https://github.com/betteridiot/pypackage_template"
packages = [{ include = "pypackage_template", from = "src" }]
"#;

pub const README: &str = "# pypackage_template

A fully featured Python package template

[![CI](https://github.com/betteridiot/pypackage_template/actions/workflows/ci.yml/badge.svg)]
";

pub const CI_WORKFLOW: &str = "name: CI
on: [push]
jobs:
  test:
    steps:
      - run: pytest --cov=pypackage_template
";

pub const DOCS_CONF: &str = "project = \"pypackage_template\"
author = \"Marcus Sherman\"
";

pub const PACKAGE_INIT: &str = "\"\"\"A fully featured Python package template.\"\"\"

__author__ = \"Marcus Sherman\"
__email__ = \"m.sherman@northeastern.edu\"
";

pub const CORE_MODULE: &str = "from pypackage_template import __author__


def hello() -> str:
    return \"hello from pypackage_template\"
";

pub const CONFTEST: &str = "import pytest

from pypackage_template.core import hello


@pytest.fixture
def greeting():
    return hello()
";

pub const TEST_CORE: &str = "from pypackage_template.core import hello


def test_hello(greeting):
    assert greeting == hello()
";

/// A template checkout in a temp dir.
pub struct TemplateFixture {
    dir: TempDir,
}

impl TemplateFixture {
    /// Template with every file the built-in profile lists except `LICENSE`
    /// and `CONTRIBUTING.md`.
    pub fn python() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("create temp dir"),
        };
        fixture.write("pyproject.toml", PYPROJECT);
        fixture.write("README.md", README);
        fixture.write("docs/source/conf.py", DOCS_CONF);
        fixture.write(".github/workflows/ci.yml", CI_WORKFLOW);
        fixture.write(".github/workflows/docs.yml", "name: docs\n");
        fixture.write(".github/workflows/publish.yml", "name: publish\n");
        fixture.write("src/pypackage_template/__init__.py", PACKAGE_INIT);
        fixture.write("src/pypackage_template/core.py", CORE_MODULE);
        fixture.write("src/pypackage_template/py.typed", "");
        fixture.write("tests/conftest.py", CONFTEST);
        fixture.write("tests/unit/test_core.py", TEST_CORE);
        fixture
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(path, content).expect("write fixture file");
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("read fixture file")
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }
}

/// `tailor` with color off and no user config or env leaking in.
pub fn tailor() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tailor");
    cmd.arg("--no-color")
        .env_remove("RUST_LOG")
        .env_remove("TAILOR_IDENTITY__AUTHOR")
        .env_remove("TAILOR_IDENTITY__EMAIL")
        .env_remove("TAILOR_IDENTITY__GITHUB_USERNAME")
        .env_remove("TAILOR_OUTPUT__FORMAT");
    cmd
}

/// `tailor customize` with a complete identity against `root`.
pub fn customize(root: &Path) -> Command {
    let mut cmd = tailor();
    cmd.arg("customize")
        .args(["--name", "mylib"])
        .args(["--description", "Analytical engine helpers"])
        .args(["--author", "Ada Lovelace"])
        .args(["--email", "ada@example.com"])
        .args(["--github-username", "ada"])
        .arg("--root")
        .arg(root)
        .arg("--yes");
    cmd
}
