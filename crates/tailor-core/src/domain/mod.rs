//! Core domain layer for Tailor.
//!
//! Pure logic: no filesystem, no network. All I/O goes through the ports in
//! the application layer.
//!
//! - [`ReplacementMap`]: ordered literal substitution, the heart of the tool
//! - [`Identity`]: the five strings that name a project
//! - [`CustomizationPlan`]: which files and trees a run touches
//! - [`CustomizationReport`]: what a run did

pub mod common;
pub mod error;
pub mod identity;
pub mod plan;
pub mod replacement;
pub mod report;

mod validation;

pub use common::RelativePath;
pub use error::DomainError;
pub use identity::Identity;
pub use plan::CustomizationPlan;
pub use replacement::{OverlapHazard, Replacement, ReplacementMap, Substitution};
pub use report::{CustomizationReport, FileOutcome, FileStatus, RenameOutcome, Residual};
pub use validation::DomainValidator;
