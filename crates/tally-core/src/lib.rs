// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tally: Core types, inventory state, and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod inventory;
pub mod labels;
pub mod types;

pub use config::AppConfig;
pub use error::{DraftError, TallyError};
pub use inventory::Inventory;
pub use types::*;
