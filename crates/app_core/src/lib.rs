//! ImageRenamer Core Domain Logic
//!
//! This crate contains:
//! - Naming parameter validation
//! - Rename planning (pure)
//! - Rename execution with per-file outcomes
//! - Request/response handlers
//! - Configuration
//! - Error types

pub mod config;
pub mod error;
pub mod executor;
pub mod naming;
pub mod planner;
pub mod service;

pub use config::{AppConfig, BrowseConfig, NamingDefaults, ServerConfig};
pub use error::RenameError;
pub use executor::{execute, ExecutionReport, RenameExecutor, RenameOutcome, RenameRecord};
pub use naming::{validate, NamingParameters, ValidationError};
pub use planner::{plan, PlanError, Preview, RenameMapping, RenamePair};
pub use service::{
    BrowseRequest, BrowseResponse, PreviewResponse, RenameForm, RenameResponse, RenameService,
};
