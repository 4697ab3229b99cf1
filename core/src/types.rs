//! Domain DTOs for the hero API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the client crate compiles without pulling in Axum internals. Integration
//! tests catch any schema drift between the two crates. The client treats a
//! `Hero` as an opaque record: only `id` and `name` are read, for log lines.

use serde::{Deserialize, Serialize};

/// A single hero record exchanged with the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: u64,
    pub name: String,
}

/// Request payload for creating a new hero. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHero {
    pub name: String,
}
