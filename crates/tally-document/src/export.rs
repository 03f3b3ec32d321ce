// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Product list export: snapshot to PDF bytes plus a timestamped file name.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use tally_core::error::TallyError;
use tally_core::labels::Labels;
use tally_core::{AppConfig, Product};

use crate::pdf::writer::{COLUMNS, ProductTableWriter};

/// Literal prefix of every exported file name.
pub const FILE_PREFIX: &str = "product-list-";

/// Extension of every exported file name.
pub const FILE_EXTENSION: &str = "pdf";

/// A rendered product list ready to be saved.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Number of body rows in the table.
    pub rows: usize,
}

/// `product-list-YYYY-MM-DDTHH-MM-SS.pdf` for the given instant (UTC, seconds).
pub fn export_filename(at: DateTime<Utc>) -> String {
    format!(
        "{FILE_PREFIX}{}.{FILE_EXTENSION}",
        at.format("%Y-%m-%dT%H-%M-%S")
    )
}

/// Builds the product-list PDF from the current records.
pub struct ProductListExporter {
    writer: ProductTableWriter,
    labels: Labels,
}

impl ProductListExporter {
    /// Exporter around a prepared table writer; labels follow its direction.
    pub fn new(writer: ProductTableWriter) -> Self {
        let labels = Labels::for_direction(writer.direction());
        Self { writer, labels }
    }

    /// Exporter configured from the app settings.
    ///
    /// Reads the configured TrueType font up front so a missing file is
    /// reported as a font problem rather than a generic I/O error.
    pub fn from_config(config: &AppConfig) -> Result<Self, TallyError> {
        let mut writer = ProductTableWriter::new(config.paper_size);
        writer.set_direction(config.direction);
        if let Some(path) = &config.font_path {
            let bytes = std::fs::read(path).map_err(|err| {
                TallyError::FontError(format!("cannot read {}: {err}", path.display()))
            })?;
            writer.set_font_bytes(bytes);
        }
        Ok(Self::new(writer))
    }

    /// Render `products` (in the given order) as a titled table.
    ///
    /// An empty slice yields a document with the title and header row only.
    #[instrument(skip(self, products), fields(count = products.len()))]
    pub fn export(
        &self,
        products: &[Product],
        at: DateTime<Utc>,
    ) -> Result<ExportedDocument, TallyError> {
        let header: [String; COLUMNS] = [
            self.labels.barcode.to_owned(),
            self.labels.product_name.to_owned(),
            self.labels.quantity.to_owned(),
        ];
        let rows: Vec<[String; COLUMNS]> = products
            .iter()
            .map(|p| [p.barcode.clone(), p.name.clone(), p.quantity.to_string()])
            .collect();

        let bytes = self.writer.render(self.labels.list_title, &header, &rows)?;
        let file_name = export_filename(at);

        info!(file_name = %file_name, bytes = bytes.len(), "product list exported");

        Ok(ExportedDocument {
            file_name,
            bytes,
            rows: rows.len(),
        })
    }
}

/// Write an exported document to `path`.
///
/// Bytes go to a sibling `.part` file first and are renamed into place, so a
/// failed write never leaves a truncated PDF under the final name.
pub fn write_document(document: &ExportedDocument, path: impl AsRef<Path>) -> Result<PathBuf, TallyError> {
    let path = path.as_ref();
    let mut partial = path.as_os_str().to_owned();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    if let Err(err) = std::fs::write(&partial, &document.bytes) {
        let _ = std::fs::remove_file(&partial);
        return Err(err.into());
    }
    std::fs::rename(&partial, path)?;

    info!("Wrote product list to {}", path.display());
    Ok(path.to_path_buf())
}
