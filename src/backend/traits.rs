// ABOUTME: Defines the SaveBackend trait for async durable persistence.
// ABOUTME: Called by the coordinator whenever a payload needs saving.

use async_trait::async_trait;

/// Trait for save backend implementations.
///
/// A backend durably persists a payload and returns the canonical stored
/// result. Backends must tolerate duplicate writes of the same payload: the
/// coordinator does not suppress superseded calls at the network layer, so a
/// stale request may still reach the backend after a newer one.
#[async_trait]
pub trait SaveBackend<P, R>: Send + Sync {
    /// Persist the payload.
    ///
    /// Returns the stored result on success, or an arbitrary error value on
    /// failure. The coordinator decides whether either is observed.
    async fn save(&self, payload: &P) -> Result<R, anyhow::Error>;
}
