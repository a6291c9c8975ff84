pub mod form;
pub mod policy;
pub mod session;

pub use crate::domain::model::{Field, FieldState, RecordEntry, Snapshot};
pub use crate::domain::ports::Renderer;
pub use crate::utils::error::Result;
