// ABOUTME: Coordinator module for save scheduling.
// ABOUTME: Contains the race-safe autosave primitive.

mod autosave;

pub use autosave::{Autosave, SaveOutcome};
