// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Tally.

use thiserror::Error;

use crate::types::DraftField;

/// Top-level error type for all Tally operations.
#[derive(Debug, Error)]
pub enum TallyError {
    // -- Export errors --
    #[error("PDF generation failed: {0}")]
    PdfError(String),

    #[error("font could not be loaded: {0}")]
    FontError(String),

    // -- Scanner errors --
    #[error("camera could not be started: {0}")]
    CameraUnavailable(String),

    // -- Storage --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Why a form draft was not turned into a product record.
///
/// These are never shown to the user; the form simply does not submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("field `{0}` is empty")]
    MissingField(DraftField),

    #[error("quantity `{0}` is not a whole number of at least 1")]
    InvalidQuantity(String),
}
