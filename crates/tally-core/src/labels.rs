// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fixed English and Hebrew label sets for the UI and the exported PDF.

use crate::types::TextDirection;

/// Every user-visible string, in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub add_heading: &'static str,
    pub barcode: &'static str,
    pub product_name: &'static str,
    pub quantity: &'static str,
    pub actions: &'static str,
    pub barcode_placeholder: &'static str,
    pub name_placeholder: &'static str,
    pub quantity_placeholder: &'static str,
    pub add_button: &'static str,
    pub scan_button: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    /// Also the exported PDF title.
    pub list_title: &'static str,
    pub items: &'static str,
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
    pub export_disabled: &'static str,
    pub export_prefix: &'static str,
    pub export_suffix: &'static str,
    pub saved_prefix: &'static str,
    pub settings: &'static str,
}

impl Labels {
    pub const ENGLISH: Labels = Labels {
        app_title: "Product Manager",
        app_subtitle: "Add products and export to PDF",
        add_heading: "Add New Product",
        barcode: "Barcode",
        product_name: "Product Name",
        quantity: "Quantity",
        actions: "Actions",
        barcode_placeholder: "Enter barcode",
        name_placeholder: "Enter product name",
        quantity_placeholder: "Enter quantity",
        add_button: "Add Product",
        scan_button: "Scan",
        cancel: "Cancel",
        delete: "Delete",
        list_title: "Product List",
        items: "items",
        empty_title: "No products added yet",
        empty_hint: "Add your first product above",
        export_disabled: "No Products to Export",
        export_prefix: "Export",
        export_suffix: "Products to PDF",
        saved_prefix: "Saved to",
        settings: "Settings",
    };

    pub const HEBREW: Labels = Labels {
        app_title: "ניהול מוצרים",
        app_subtitle: "הוסיפו מוצרים וייצאו ל-PDF",
        add_heading: "הוספת מוצר חדש",
        barcode: "ברקוד",
        product_name: "שם מוצר",
        quantity: "כמות",
        actions: "פעולות",
        barcode_placeholder: "הזינו ברקוד",
        name_placeholder: "הזינו שם מוצר",
        quantity_placeholder: "הזינו כמות",
        add_button: "הוספת מוצר",
        scan_button: "סריקה",
        cancel: "ביטול",
        delete: "מחיקה",
        list_title: "רשימת מוצרים",
        items: "פריטים",
        empty_title: "עדיין לא נוספו מוצרים",
        empty_hint: "הוסיפו את המוצר הראשון למעלה",
        export_disabled: "אין מוצרים לייצוא",
        export_prefix: "ייצוא",
        export_suffix: "מוצרים ל-PDF",
        saved_prefix: "נשמר בנתיב",
        settings: "הגדרות",
    };

    pub fn for_direction(direction: TextDirection) -> Self {
        match direction {
            TextDirection::Ltr => Self::ENGLISH,
            TextDirection::Rtl => Self::HEBREW,
        }
    }

    /// Text of the export button for a list of `count` products.
    pub fn export_button(&self, count: usize) -> String {
        if count == 0 {
            self.export_disabled.to_owned()
        } else {
            format!("{} {count} {}", self.export_prefix, self.export_suffix)
        }
    }

    /// Status line shown after the list was written to `path`.
    pub fn saved_to(&self, path: &str) -> String {
        format!("{}: {path}", self.saved_prefix)
    }
}
