// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// tally-document: Document export for the Tally inventory tool.
//
// Turns a snapshot of the product list into a paginated PDF table (with an
// optional right-to-left Hebrew layout) and names the exported file.

pub mod export;
pub mod pdf;

// Re-export the primary structs so callers can use `tally_document::ProductListExporter` etc.
pub use export::{ExportedDocument, ProductListExporter, export_filename, write_document};
pub use pdf::writer::ProductTableWriter;
