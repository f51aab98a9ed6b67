// ABOUTME: Save backend abstraction - the seam between the coordinator and storage.
// ABOUTME: Contains the SaveBackend trait and the HTTP backend implementation.

mod http;
mod traits;

pub use http::HttpBackend;
pub use traits::SaveBackend;
