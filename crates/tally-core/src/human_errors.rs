// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the blocking alerts.
//
// Every technical error is mapped to a short plain-English message with a
// suggestion. Severity drives the alert level.

use crate::error::TallyError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Trying the same thing again may work.
    Transient,
    /// User must do something first (pick a font, allow camera access).
    ActionRequired,
    /// Cannot be fixed from inside the app.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Alert heading.
    pub message: String,
    /// Alert body.
    pub suggestion: String,
    pub severity: Severity,
}

impl HumanError {
    /// Heading and suggestion joined for a single-text alert.
    pub fn alert_text(&self) -> String {
        format!("{}\n\n{}", self.message, self.suggestion)
    }
}

/// Convert a `TallyError` into a `HumanError` for the alert dialog.
pub fn humanize_error(err: &TallyError) -> HumanError {
    match err {
        TallyError::PdfError(_) => HumanError {
            message: "Error generating PDF. Please try again.".into(),
            suggestion: "Your product list is unchanged. If this keeps happening, restart the app.".into(),
            severity: Severity::Transient,
        },

        TallyError::FontError(detail) => HumanError {
            message: "Error generating PDF. Please try again.".into(),
            suggestion: format!(
                "The Hebrew layout needs a TrueType font. Choose one in Settings. ({detail})"
            ),
            severity: Severity::ActionRequired,
        },

        TallyError::CameraUnavailable(detail) => HumanError {
            message: format!("Camera error: {detail}"),
            suggestion: "Check that no other app is using the camera and that camera access is allowed. You can still type the barcode.".into(),
            severity: Severity::ActionRequired,
        },

        TallyError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The app isn't allowed to write there.".into(),
                    suggestion: "Choose a different folder, such as Documents or Downloads.".into(),
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your device's storage may be full.".into(),
                    severity: Severity::Transient,
                }
            }
        }

        TallyError::Serialization(_) => HumanError {
            message: "The settings file could not be read or written.".into(),
            suggestion: "Open Settings and save them again.".into(),
            severity: Severity::Transient,
        },

        TallyError::Bridge(_) => HumanError {
            message: "A device feature didn't work.".into(),
            suggestion: "Try restarting the app.".into(),
            severity: Severity::Transient,
        },

        TallyError::PlatformUnavailable => HumanError {
            message: "This feature isn't available on your device.".into(),
            suggestion: "Type the barcode into the form instead.".into(),
            severity: Severity::Permanent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_failure_uses_export_alert_text() {
        let human = humanize_error(&TallyError::PdfError("boom".into()));
        assert_eq!(human.message, "Error generating PDF. Please try again.");
        assert_eq!(human.severity, Severity::Transient);
    }

    #[test]
    fn camera_failure_names_the_cause() {
        let human = humanize_error(&TallyError::CameraUnavailable("NotAllowedError".into()));
        assert_eq!(human.message, "Camera error: NotAllowedError");
        assert_eq!(human.severity, Severity::ActionRequired);
    }

    #[test]
    fn missing_platform_is_permanent() {
        let human = humanize_error(&TallyError::PlatformUnavailable);
        assert_eq!(human.severity, Severity::Permanent);
    }

    #[test]
    fn permission_denied_asks_for_another_folder() {
        let err = TallyError::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.alert_text().contains("different folder"));
    }
}
