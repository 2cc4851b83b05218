//! Diagnostic warning records attached to pallet configurations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Severity of a diagnostic warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Severity {
    /// Safety violation; the caller should reject or override explicitly.
    Critical,
    /// Cost impact (tariff penalty or similar), not a safety concern.
    Cost,
    /// Condition worth attention before shipping.
    Warning,
    /// Informational note.
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Critical => "CRITICAL",
            Severity::Cost => "COST",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        };
        f.write_str(s)
    }
}

/// A single diagnostic attached to a pallet configuration.
///
/// Safety and cost concerns are never errors; they are carried as data so
/// the caller can decide to reject or override.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Warning {
    /// Severity of the condition.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl Warning {
    /// Creates a new warning record.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Creates a CRITICAL warning.
    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, message)
    }

    /// Creates a COST warning.
    pub fn cost(message: impl Into<String>) -> Self {
        Self::new(Severity::Cost, message)
    }

    /// Creates a WARNING-severity warning.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an INFO note.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Returns true for CRITICAL severity.
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let w = Warning::critical("stability violation");
        assert_eq!(w.to_string(), "CRITICAL: stability violation");
        assert!(w.is_critical());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical < Severity::Cost);
        assert!(Severity::Cost < Severity::Warning);
        assert!(Severity::Warning < Severity::Info);
    }
}
