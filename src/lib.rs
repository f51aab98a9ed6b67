// ABOUTME: Root module for autosave - save coordination for form-backed records.
// ABOUTME: Re-exports all public types from submodules.

pub mod backend;
pub mod compare;
pub mod coordinator;
pub mod error;
pub mod prelude;
pub mod project;

pub use coordinator::{Autosave, SaveOutcome};
pub use error::AutosaveError;
