//! Asynchronous API client core for the hero service.
//!
//! # Overview
//! `HeroClient` wraps the six operations of the hero backend (list, get,
//! create, update, delete, search-by-name) behind a uniform contract: every
//! call resolves to a value. Transport failures, unexpected statuses, and
//! decode errors are swallowed at the operation boundary and replaced with a
//! per-operation fallback (empty vec or `None`); the only traces of a
//! failure are one line in the message sink and the missing data.
//!
//! # Design
//! - `HeroClient` is stateless apart from `base_url` and the two injected
//!   collaborators, passed explicitly at construction.
//! - The [`Transport`] trait executes plain-data [`HttpRequest`] /
//!   [`HttpResponse`] values, keeping the I/O seam explicit and the request
//!   building unit-testable. [`ReqwestTransport`] is the production
//!   implementation.
//! - The [`MessageSink`] trait receives one human-readable line per
//!   completed operation; [`MessageLog`] is the shipped in-memory sink.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod messages;
pub mod transport;
pub mod types;

pub use client::HeroClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use messages::{MessageLog, MessageSink};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Hero, NewHero};
