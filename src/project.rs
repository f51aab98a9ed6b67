// ABOUTME: Project records and an in-memory project store.
// ABOUTME: Updates are timestamp-guarded so the last client write always wins.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::backend::SaveBackend;
use crate::error::StoreError;

/// A stored project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub subhead: String,
    pub description: String,
    /// When the record was last written. Used to reject stale concurrent
    /// updates.
    pub last_updated: DateTime<Utc>,
}

impl Project {
    /// The editable fields of this project, as a form payload.
    pub fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            id: self.id,
            title: self.title.clone(),
            subhead: self.subhead.clone(),
            description: self.description.clone(),
        }
    }
}

/// The editable form payload for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub id: i64,
    pub title: String,
    pub subhead: String,
    pub description: String,
}

/// In-memory project store.
///
/// # Update semantics
///
/// An update carries the client's timestamp and is applied only when the
/// stored record's `last_updated` is strictly older. Concurrent requests can
/// arrive in any order; whichever carries the newest timestamp wins, and the
/// canonical stored row is returned either way.
pub struct ProjectStore {
    projects: Mutex<HashMap<i64, Project>>,
    next_id: AtomicI64,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            projects: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Create a new blank project with a fresh id and timestamp.
    pub async fn create_empty(&self) -> Project {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let project = Project {
            id,
            title: String::new(),
            subhead: String::new(),
            description: String::new(),
            last_updated: Utc::now(),
        };
        self.projects.lock().await.insert(id, project.clone());
        project
    }

    /// Look up a project by id.
    pub async fn get(&self, id: i64) -> Option<Project> {
        self.projects.lock().await.get(&id).cloned()
    }

    /// Apply a draft stamped with the client's write time.
    ///
    /// The draft is applied only if `stamp` is newer than the stored record's
    /// `last_updated`. Returns the canonical stored row whether or not the
    /// write was applied.
    ///
    /// Returns `Err(StoreError::NotFound)` if the project does not exist.
    pub async fn update(
        &self,
        draft: &ProjectDraft,
        stamp: DateTime<Utc>,
    ) -> Result<Project, StoreError> {
        let mut projects = self.projects.lock().await;
        let project = projects
            .get_mut(&draft.id)
            .ok_or(StoreError::NotFound(draft.id))?;

        if project.last_updated < stamp {
            project.title = draft.title.clone();
            project.subhead = draft.subhead.clone();
            project.description = draft.description.clone();
            project.last_updated = stamp;
        }

        Ok(project.clone())
    }
}

#[async_trait]
impl SaveBackend<ProjectDraft, Project> for ProjectStore {
    async fn save(&self, payload: &ProjectDraft) -> Result<Project, anyhow::Error> {
        let project = self.update(payload, Utc::now()).await?;
        Ok(project)
    }
}
