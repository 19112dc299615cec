// ABOUTME: Error types for the cooking intelligence engine
// ABOUTME: Defines CatalogError for the substitution catalog persistence seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

//! Error handling for the engine.
//!
//! Errors exist only at the catalog seam. The public engine functions are
//! total: malformed input defaults, and catalog failures collapse to empty
//! results after being logged.

use thiserror::Error;

/// Errors raised by a substitution catalog backend
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog store could not be reached
    #[error("substitution catalog unavailable: {0}")]
    Unavailable(String),

    /// A query against the catalog failed
    #[error("catalog query for '{ingredient}' failed: {message}")]
    Query {
        /// Ingredient the failed query was for
        ingredient: String,
        /// Backend error description
        message: String,
    },

    /// The catalog returned data that could not be decoded
    #[error("catalog returned malformed data: {0}")]
    MalformedData(String),
}

/// Result alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
