//! Tailor Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Tailor
//! template customization tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            tailor-cli (CLI)             │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (CustomizeService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Driven: Filesystem)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     tailor-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ReplacementMap, Identity, Plan, ...)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tailor_core::prelude::*;
//!
//! # fn run(filesystem: Box<dyn Filesystem>, plan: CustomizationPlan, template: Identity) -> TailorResult<()> {
//! let project = Identity::new("mylib", "Ada", "ada@example.com", "My library", "ada");
//!
//! let service = CustomizeService::new(filesystem);
//! let report = service.customize(".", &plan, &template, &project, RunMode::Apply)?;
//! println!("{} files updated", report.updated_count());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{CustomizeService, RunMode, ports::Filesystem};
    pub use crate::domain::{
        CustomizationPlan, CustomizationReport, FileOutcome, FileStatus, Identity,
        OverlapHazard, RelativePath, RenameOutcome, Replacement, ReplacementMap, Residual,
        Substitution,
    };
    pub use crate::error::{TailorError, TailorResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
