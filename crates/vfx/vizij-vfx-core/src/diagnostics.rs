use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::BinderId;

/// Diagnostics configuration for property binders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsCfg {
    /// Log a warning for every absent entry of the binding list.
    pub log_missing: bool,
    /// Log a warning when a binder update fails.
    pub log_failures: bool,
}

impl Default for DiagnosticsCfg {
    fn default() -> Self {
        DiagnosticsCfg {
            log_missing: true,
            log_failures: true,
        }
    }
}

/// One non-fatal problem observed during a tick. Reported whether or not logging is on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BindingDiagnostic {
    MissingBinder {
        index: usize,
        owner: String,
    },
    UpdateFailed {
        index: usize,
        binder: BinderId,
        error: String,
    },
}

impl fmt::Display for BindingDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingDiagnostic::MissingBinder { index, owner } => write!(
                f,
                "property binder at index {index} of '{owner}' is null or missing"
            ),
            BindingDiagnostic::UpdateFailed {
                index,
                binder,
                error,
            } => write!(
                f,
                "property binder at index {index} ({binder:?}) failed to update: {error}"
            ),
        }
    }
}

/// Outcome of one `PropertyBinder::tick`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// The preview gate suppressed this tick.
    pub skipped: bool,
    /// No target was resolved, so nothing was processed.
    pub target_missing: bool,
    /// Binders whose update ran and succeeded, in list order.
    pub updated: Vec<BinderId>,
    /// Binders that reported themselves invalid.
    pub invalid: Vec<BinderId>,
    pub diagnostics: Vec<BindingDiagnostic>,
}

impl TickReport {
    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }

    pub fn missing_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, BindingDiagnostic::MissingBinder { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, BindingDiagnostic::UpdateFailed { .. }))
            .count()
    }
}
