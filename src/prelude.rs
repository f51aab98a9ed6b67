// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use autosave::prelude::*;` to get started quickly.

pub use crate::backend::{HttpBackend, SaveBackend};
pub use crate::compare::json_equal;
pub use crate::coordinator::{Autosave, SaveOutcome};
pub use crate::error::{AutosaveError, BackendError, StoreError};
pub use crate::project::{Project, ProjectDraft, ProjectStore};
