pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{NullRenderer, TextRenderer};
pub use crate::config::session::{SessionConfig, Step};
pub use crate::core::form::{EntryBinding, RecordListForm};
pub use crate::core::policy::{EntryErrors, Rule, RuleViolation, ValidationPolicy};
pub use crate::core::session::{SessionReport, SessionRunner};
pub use crate::domain::model::{Field, FieldState, RecordEntry, Snapshot};
pub use crate::utils::error::{FormError, Result};
