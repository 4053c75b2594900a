//! # AppError
//!
//! Centralized error handling for the Rusty-Blog crates.
//! Maps post lifecycle failures to actionable error types.

use thiserror::Error;

use crate::models::PostDraft;

/// The primary error type for all rb-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// No live post owns the key (e.g. ("post", id) or ("slug", "/cats"))
    #[error("{0} not found: {1}")]
    NotFound(String, String),

    /// Another live post already uses this title (case-insensitive).
    /// Carries the rejected submission so the form can be redisplayed.
    #[error("a post titled {:?} already exists", .0.title)]
    DuplicateTitle(PostDraft),

    /// The title derives a slug no link can reach ("", "." or "..").
    #[error("the title {:?} cannot be used as a post address", .0.title)]
    InvalidTitle(PostDraft),

    /// Infrastructure failure (e.g. poisoned lock, template rendering)
    #[error("internal service error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn post_not_found(id: &str) -> Self {
        Self::NotFound("post".to_string(), id.to_string())
    }

    pub fn slug_not_found(slug: &str) -> Self {
        Self::NotFound("slug".to_string(), slug.to_string())
    }
}

/// A specialized Result type for Rusty-Blog logic.
pub type Result<T> = std::result::Result<T, AppError>;
