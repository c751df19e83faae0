//! Analysis Record
//!
//! The canonical structured result of one analysis request: exactly eight
//! text-or-list fields, always all present. Fields that do not apply to the
//! active mode are empty strings (or an empty list for inline comments),
//! never null and never missing.
//!
//! Records are created fresh per request and immutable once returned; they
//! are never merged across requests.

use serde::{Deserialize, Serialize};

/// Identifies one of the eight record fields.
///
/// Used by the mode → primary-field table and by the session store to extract
/// a record's authoritative content without scattering field matches around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    RefactoredCode,
    RefactoringSummary,
    InlineComments,
    UnitTests,
    SecurityAnalysis,
    PerformanceAnalysis,
    Documentation,
    ArchitecturalSuggestions,
}

impl RecordField {
    /// All fields, in schema order.
    pub const ALL: [RecordField; 8] = [
        RecordField::RefactoredCode,
        RecordField::RefactoringSummary,
        RecordField::InlineComments,
        RecordField::UnitTests,
        RecordField::SecurityAnalysis,
        RecordField::PerformanceAnalysis,
        RecordField::Documentation,
        RecordField::ArchitecturalSuggestions,
    ];

    /// The camelCase wire name, as it appears in the JSON schema the prompt
    /// demands of the model.
    pub fn wire_name(&self) -> &'static str {
        match self {
            RecordField::RefactoredCode => "refactoredCode",
            RecordField::RefactoringSummary => "refactoringSummary",
            RecordField::InlineComments => "inlineComments",
            RecordField::UnitTests => "unitTests",
            RecordField::SecurityAnalysis => "securityAnalysis",
            RecordField::PerformanceAnalysis => "performanceAnalysis",
            RecordField::Documentation => "documentation",
            RecordField::ArchitecturalSuggestions => "architecturalSuggestions",
        }
    }
}

/// Severity of a single inline comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentSeverity {
    Info,
    Warning,
    Error,
}

impl Default for CommentSeverity {
    fn default() -> Self {
        CommentSeverity::Info
    }
}

/// One line-anchored comment produced by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineComment {
    /// 1-based line number in the submitted source
    pub line_number: u32,
    /// Comment text
    pub text: String,
    /// Severity, defaulting to info when the model omits it
    #[serde(default)]
    pub severity: CommentSeverity,
}

/// The eight-field canonical analysis result.
///
/// `Default` yields the all-empty record, which is also the worst-case
/// normalization output shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisRecord {
    /// Rewritten or baseline code view
    pub refactored_code: String,
    /// Human-readable summary of what changed (or of the reply, as fallback)
    pub refactoring_summary: String,
    /// Line-anchored comments
    pub inline_comments: Vec<InlineComment>,
    /// Generated unit tests
    pub unit_tests: String,
    /// Security findings
    pub security_analysis: String,
    /// Performance findings
    pub performance_analysis: String,
    /// Generated documentation
    pub documentation: String,
    /// Modularization / architecture suggestions
    pub architectural_suggestions: String,
}

impl AnalysisRecord {
    /// Read a textual field by identifier.
    ///
    /// `InlineComments` is not a textual field and reads as empty; the
    /// primary-field table never points at it.
    pub fn field_text(&self, field: RecordField) -> &str {
        match field {
            RecordField::RefactoredCode => &self.refactored_code,
            RecordField::RefactoringSummary => &self.refactoring_summary,
            RecordField::InlineComments => "",
            RecordField::UnitTests => &self.unit_tests,
            RecordField::SecurityAnalysis => &self.security_analysis,
            RecordField::PerformanceAnalysis => &self.performance_analysis,
            RecordField::Documentation => &self.documentation,
            RecordField::ArchitecturalSuggestions => &self.architectural_suggestions,
        }
    }
}
