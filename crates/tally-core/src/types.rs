// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Tally inventory tool.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a product record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One counted product line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub barcode: String,
    pub name: String,
    /// Always at least 1.
    pub quantity: u32,
}

impl Product {
    pub fn new(barcode: String, name: String, quantity: u32) -> Self {
        Self {
            id: ProductId::new(),
            barcode,
            name,
            quantity: quantity.max(1),
        }
    }
}

/// The fields of the add-product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Barcode,
    Name,
    Quantity,
}

impl DraftField {
    /// Stable form-field name, also used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Barcode => "barcode",
            Self::Name => "name",
            Self::Quantity => "quantity",
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, uncommitted text of the add-product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub barcode: String,
    pub name: String,
    pub quantity: String,
}

impl ProductDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Barcode => &self.barcode,
            DraftField::Name => &self.name,
            DraftField::Quantity => &self.quantity,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Barcode => &mut self.barcode,
            DraftField::Name => &mut self.name,
            DraftField::Quantity => &mut self.quantity,
        }
    }

    /// First field (in form order) whose text is blank.
    pub fn first_missing(&self) -> Option<DraftField> {
        [DraftField::Barcode, DraftField::Name, DraftField::Quantity]
            .into_iter()
            .find(|f| self.field(*f).trim().is_empty())
    }
}

/// Reading direction of the UI and the exported document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextDirection {
    #[default]
    Ltr,
    /// Hebrew layout: labels in Hebrew, cells reversed and right-anchored.
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn html_dir(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Self::Rtl)
    }

    pub fn from_html_dir(dir: &str) -> Option<Self> {
        match dir {
            "ltr" => Some(Self::Ltr),
            "rtl" => Some(Self::Rtl),
            _ => None,
        }
    }
}

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A5,
    Letter,
    Legal,
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A4 => (210, 297),
            Self::A5 => (148, 210),
            Self::Letter => (216, 279),
            Self::Legal => (216, 356),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::A4 => "A4",
            Self::A5 => "A5",
            Self::Letter => "Letter",
            Self::Legal => "Legal",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "A4" => Some(Self::A4),
            "A5" => Some(Self::A5),
            "Letter" => Some(Self::Letter),
            "Legal" => Some(Self::Legal),
            _ => None,
        }
    }
}

/// Which camera the scanner asks the platform for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacingMode {
    /// Rear camera ("environment").
    #[default]
    Environment,
    /// Front camera ("user").
    User,
}

impl FacingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::User => "user",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "environment" => Some(Self::Environment),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

/// Barcode symbologies the decoder is asked to recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbology {
    Ean13,
    Code128,
    UpcA,
    Qr,
}

impl Symbology {
    /// Retail 1D formats plus QR.
    pub const DEFAULT_SET: [Symbology; 4] = [Self::Ean13, Self::Code128, Self::UpcA, Self::Qr];
}
