//! Analysis Modes
//!
//! The closed set of analysis categories a caller can request. The mode
//! selects both the instruction block of the outbound prompt and which record
//! field is authoritative in the normalized result.
//!
//! `FromStr` is the validation boundary: any identifier outside the set is an
//! `InvalidMode` error, never a silent default.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InsightError;
use crate::record::RecordField;

/// An analysis category from the fixed closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Refactoring suggestions plus the rewritten code
    Refactor,
    /// Unit test generation
    Tests,
    /// Vulnerability and security-practice analysis
    Security,
    /// Bottleneck and optimization analysis
    Performance,
    /// Inline comments and usage documentation
    Documentation,
    /// Bug and logic-error hunting
    Debug,
    /// Module decomposition and file-structure suggestions
    Modularization,
}

impl AnalysisMode {
    /// All modes, in canonical order.
    pub const ALL: [AnalysisMode; 7] = [
        AnalysisMode::Refactor,
        AnalysisMode::Tests,
        AnalysisMode::Security,
        AnalysisMode::Performance,
        AnalysisMode::Documentation,
        AnalysisMode::Debug,
        AnalysisMode::Modularization,
    ];

    /// The lowercase wire identifier for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Refactor => "refactor",
            AnalysisMode::Tests => "tests",
            AnalysisMode::Security => "security",
            AnalysisMode::Performance => "performance",
            AnalysisMode::Documentation => "documentation",
            AnalysisMode::Debug => "debug",
            AnalysisMode::Modularization => "modularization",
        }
    }

    /// Capitalized display name, used for context section headings.
    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisMode::Refactor => "Refactor",
            AnalysisMode::Tests => "Tests",
            AnalysisMode::Security => "Security",
            AnalysisMode::Performance => "Performance",
            AnalysisMode::Documentation => "Documentation",
            AnalysisMode::Debug => "Debug",
            AnalysisMode::Modularization => "Modularization",
        }
    }

    /// The record field that is authoritative for this mode.
    ///
    /// `refactoredCode` is additionally the baseline code view for every mode;
    /// this table names the field a caller (and the session context) reads as
    /// the mode's result. Adding a mode is a one-row change here.
    pub fn primary_field(&self) -> RecordField {
        match self {
            AnalysisMode::Refactor => RecordField::RefactoredCode,
            AnalysisMode::Tests => RecordField::UnitTests,
            AnalysisMode::Security => RecordField::SecurityAnalysis,
            AnalysisMode::Performance => RecordField::PerformanceAnalysis,
            AnalysisMode::Documentation => RecordField::Documentation,
            AnalysisMode::Debug => RecordField::RefactoredCode,
            AnalysisMode::Modularization => RecordField::ArchitecturalSuggestions,
        }
    }
}

impl std::fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnalysisMode {
    type Err = InsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "refactor" => Ok(AnalysisMode::Refactor),
            "tests" => Ok(AnalysisMode::Tests),
            "security" => Ok(AnalysisMode::Security),
            "performance" => Ok(AnalysisMode::Performance),
            "documentation" => Ok(AnalysisMode::Documentation),
            "debug" => Ok(AnalysisMode::Debug),
            "modularization" => Ok(AnalysisMode::Modularization),
            _ => Err(InsightError::invalid_mode(s)),
        }
    }
}
