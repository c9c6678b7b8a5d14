//! Translation engine: the seam between the HTTP layer and model inference.
//!
//! # Components
//!
//! - `cache`: per-direction model cache with single-flight first loads.
//! - `marian`: the production backend running pretrained Marian pipelines.
//!
//! Handlers only see the `Translator` trait, so tests can drive the full
//! HTTP surface against an engine double.

pub mod cache;
pub mod marian;

pub use cache::ModelCache;
pub use marian::MarianEngine;

use crate::error::Result;
use crate::models::Direction;
use async_trait::async_trait;

/// Inference backend serving both translation directions.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` along `direction`, loading the backing model pair on
    /// first use for that direction.
    async fn translate(&self, text: &str, direction: Direction) -> Result<String>;
}
