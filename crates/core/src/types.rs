//! Shared type aliases used across the workspace.

/// Opaque product identifier, assigned by the store on creation.
pub type ProductId = uuid::Uuid;

/// UTC timestamp type used for record bookkeeping fields.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
