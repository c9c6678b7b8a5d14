//! Data models for the translation API.
//!
//! - `api`: request/response bodies for the HTTP endpoints.
//! - `direction`: the supported translation directions and their fixed
//!   mapping to hosted model identifiers.

pub mod api;
pub mod direction;

pub use api::{HealthResponse, TranslationRequest, TranslationResponse};
pub use direction::Direction;
