// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory product list plus the add-product form draft.
//
// The inventory is owned by the UI's application state and mutated only from
// UI event handlers, so it carries no locking. Records are kept in insertion
// order; every quantity is at least 1 and every id is unique.

use tracing::{debug, info, instrument};

use crate::error::DraftError;
use crate::types::{DraftField, Product, ProductDraft, ProductId};

/// The product list and the form draft that feeds it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    products: Vec<Product>,
    draft: ProductDraft,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Draft ---------------------------------------------------------------

    /// Current form text.
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Store raw text into one draft field. No validation happens here.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
    }

    /// Put a scanned code into the barcode field.
    ///
    /// Repeated delivery simply overwrites the field again.
    pub fn fill_barcode(&mut self, code: impl Into<String>) {
        let code = code.into();
        debug!(code = %code, "barcode filled from scanner");
        self.draft.barcode = code;
    }

    /// Turn the draft into a new record.
    ///
    /// Refuses (leaving list and draft untouched) when any field is blank or
    /// the quantity is not a whole number ≥ 1. On success the draft is cleared.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Result<ProductId, DraftError> {
        if let Some(field) = self.draft.first_missing() {
            debug!(%field, "draft incomplete, not submitting");
            return Err(DraftError::MissingField(field));
        }

        let quantity = parse_quantity(&self.draft.quantity)?;
        let product = Product::new(
            self.draft.barcode.trim().to_owned(),
            self.draft.name.trim().to_owned(),
            quantity,
        );
        let id = product.id;

        info!(%id, barcode = %product.barcode, quantity, "product added");
        self.products.push(product);
        self.draft = ProductDraft::default();
        Ok(id)
    }

    // -- Records -------------------------------------------------------------

    /// Records in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Owned copy of the records, for export.
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.clone()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_units(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity)).sum()
    }

    /// Remove the record with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        let removed = self.products.len() != before;
        if removed {
            info!(%id, "product deleted");
        }
        removed
    }

    /// Replace a record's quantity. Values below 1 are ignored.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) -> bool {
        if quantity < 1 {
            debug!(%id, "quantity below 1 ignored");
            return false;
        }
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Add one to a record's quantity.
    pub fn increment(&mut self, id: ProductId) -> bool {
        match self.get(id) {
            Some(p) => {
                let next = p.quantity.saturating_add(1);
                self.set_quantity(id, next)
            }
            None => false,
        }
    }

    /// Subtract one from a record's quantity. Rejected when it is already 1.
    pub fn decrement(&mut self, id: ProductId) -> bool {
        match self.get(id) {
            Some(p) if p.quantity > 1 => {
                let next = p.quantity - 1;
                self.set_quantity(id, next)
            }
            _ => false,
        }
    }
}

/// Parse form quantity text into a count of at least 1.
fn parse_quantity(text: &str) -> Result<u32, DraftError> {
    let trimmed = text.trim();
    match trimmed.parse::<u32>() {
        Ok(q) if q >= 1 => Ok(q),
        _ => Err(DraftError::InvalidQuantity(trimmed.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_draft(barcode: &str, name: &str, quantity: &str) -> Inventory {
        let mut inv = Inventory::new();
        inv.update_field(DraftField::Barcode, barcode);
        inv.update_field(DraftField::Name, name);
        inv.update_field(DraftField::Quantity, quantity);
        inv
    }

    #[test]
    fn submit_widget_then_decrement_to_floor() {
        let mut inv = with_draft("123", "Widget", "3");
        let id = inv.submit().unwrap();

        assert_eq!(inv.len(), 1);
        let p = &inv.products()[0];
        assert_eq!((p.barcode.as_str(), p.name.as_str(), p.quantity), ("123", "Widget", 3));
        assert_eq!(inv.draft(), &ProductDraft::default());

        assert!(inv.decrement(id));
        assert!(inv.decrement(id));
        assert_eq!(inv.get(id).unwrap().quantity, 1);
        assert!(!inv.decrement(id));
        assert_eq!(inv.get(id).unwrap().quantity, 1);
    }

    #[test]
    fn submit_with_empty_field_changes_nothing() {
        for (b, n, q) in [("", "Widget", "3"), ("123", "", "3"), ("123", "Widget", "")] {
            let mut inv = with_draft(b, n, q);
            let draft_before = inv.draft().clone();
            assert!(matches!(inv.submit(), Err(DraftError::MissingField(_))));
            assert!(inv.is_empty());
            assert_eq!(inv.draft(), &draft_before);
        }
    }

    #[test]
    fn unparseable_quantity_is_refused_and_draft_kept() {
        for q in ["abc", "0", "-2", "1.5", "99999999999"] {
            let mut inv = with_draft("123", "Widget", q);
            assert_eq!(inv.submit(), Err(DraftError::InvalidQuantity(q.to_owned())));
            assert!(inv.is_empty());
            assert_eq!(inv.draft().quantity, q);
        }
    }

    #[test]
    fn quantity_whitespace_is_tolerated() {
        let mut inv = with_draft("123", "Widget", " 7 ");
        inv.submit().unwrap();
        assert_eq!(inv.products()[0].quantity, 7);
    }

    #[test]
    fn increment_adds_exactly_one() {
        let mut inv = with_draft("1", "A", "5");
        let id = inv.submit().unwrap();
        assert!(inv.increment(id));
        assert_eq!(inv.get(id).unwrap().quantity, 6);
    }

    #[test]
    fn increment_saturates_at_max() {
        let mut inv = with_draft("1", "A", "1");
        let id = inv.submit().unwrap();
        assert!(inv.set_quantity(id, u32::MAX));
        inv.increment(id);
        assert_eq!(inv.get(id).unwrap().quantity, u32::MAX);
    }

    #[test]
    fn set_quantity_below_one_is_ignored() {
        let mut inv = with_draft("1", "A", "4");
        let id = inv.submit().unwrap();
        assert!(!inv.set_quantity(id, 0));
        assert_eq!(inv.get(id).unwrap().quantity, 4);
    }

    #[test]
    fn delete_removes_only_target() {
        let mut inv = Inventory::new();
        let mut ids = Vec::new();
        for (b, n) in [("1", "A"), ("2", "B"), ("3", "C")] {
            inv.update_field(DraftField::Barcode, b);
            inv.update_field(DraftField::Name, n);
            inv.update_field(DraftField::Quantity, "1");
            ids.push(inv.submit().unwrap());
        }

        assert!(inv.delete(ids[1]));
        let names: Vec<_> = inv.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);

        assert!(!inv.delete(ids[1]));
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn operations_on_unknown_id_are_noops() {
        let mut inv = with_draft("1", "A", "2");
        inv.submit().unwrap();
        let stranger = ProductId::new();
        assert!(!inv.increment(stranger));
        assert!(!inv.decrement(stranger));
        assert!(!inv.set_quantity(stranger, 9));
        assert!(!inv.delete(stranger));
        assert_eq!(inv.total_units(), 2);
    }

    #[test]
    fn fill_barcode_overwrites_only_barcode() {
        let mut inv = with_draft("old", "Widget", "2");
        inv.fill_barcode("4006381333931");
        inv.fill_barcode("4006381333931");
        assert_eq!(inv.draft().barcode, "4006381333931");
        assert_eq!(inv.draft().name, "Widget");
    }

    #[test]
    fn random_operation_sequences_keep_invariants() {
        // Fixed-seed LCG.
        let mut seed: u64 = 0x5EED_7A11;
        let mut next = move || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) as usize
        };

        let mut inv = Inventory::new();
        for _ in 0..2_000 {
            let ids: Vec<ProductId> = inv.products().iter().map(|p| p.id).collect();
            let pick = |n: usize| ids.get(n % ids.len().max(1)).copied();
            match next() % 6 {
                0 | 1 => {
                    inv.update_field(DraftField::Barcode, format!("{}", next() % 1000));
                    inv.update_field(DraftField::Name, "item");
                    inv.update_field(DraftField::Quantity, format!("{}", next() % 4));
                    let _ = inv.submit();
                }
                2 => {
                    if let Some(id) = pick(next()) {
                        inv.delete(id);
                    }
                }
                3 => {
                    if let Some(id) = pick(next()) {
                        inv.increment(id);
                    }
                }
                4 => {
                    if let Some(id) = pick(next()) {
                        inv.decrement(id);
                    }
                }
                _ => {
                    if let Some(id) = pick(next()) {
                        inv.set_quantity(id, (next() % 3) as u32);
                    }
                }
            }

            let mut seen = std::collections::HashSet::new();
            for p in inv.products() {
                assert!(p.quantity >= 1);
                assert!(seen.insert(p.id), "duplicate id {}", p.id);
            }
        }
    }
}
