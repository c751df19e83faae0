//! Response Normalizer
//!
//! Converts the model's raw reply into the eight-field `AnalysisRecord`.
//! Two tiers, tried in order, first success wins:
//!
//! 1. **Strict JSON** - widest brace span parsed as a JSON object, with the
//!    eight known fields projected out. Authoritative when it parses, even if
//!    its content is structurally thin.
//! 2. **Heuristic** - fenced code spans, keyword-filtered lines, and a
//!    first-lines summary scraped from the raw text.
//!
//! Normalization is total: it never returns an error. The worst case is a
//! record whose only populated field is `refactoringSummary`.

use serde_json::{Map, Value};
use tracing::debug;

use code_insight_core::{AnalysisMode, AnalysisRecord, InlineComment, RecordField};

/// Separator inserted between concatenated fenced code spans.
const CODE_BLOCK_SEPARATOR: &str = "\n\n// ---\n\n";

/// Number of leading reply lines used for the fallback summary.
const SUMMARY_LINES: usize = 5;

/// Keyword sets for heuristic section extraction, matched case-insensitively
/// against each reply line.
const SECURITY_KEYWORDS: &[&str] = &["vulnerabilidad", "sql injection", "xss", "seguridad", "riesgo"];
const PERFORMANCE_KEYWORDS: &[&str] = &["rendimiento", "optimización", "eficiencia", "o(n"];
const DOCUMENTATION_KEYWORDS: &[&str] = &["documentación", "comentario", "docstring"];
const MODULARIZATION_KEYWORDS: &[&str] = &["módulo", "arquitectura", "estructura", "separación"];

/// Which tier produced the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationTier {
    /// The reply contained a parseable JSON object
    StrictJson,
    /// No parseable JSON; the record was scraped from the raw text
    Heuristic,
}

/// The normalizer's output: the record plus diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedReply {
    /// The eight-field canonical record
    pub record: AnalysisRecord,
    /// Which tier produced the record
    pub tier: NormalizationTier,
    /// The complete, unmodified raw reply, retained for support/debugging
    pub raw_text: String,
}

/// Normalize a raw model reply into an `AnalysisRecord`.
///
/// Tier 2 only triggers on JSON-parse failure, never because a Tier-1 field
/// looks empty.
pub fn normalize(raw_text: &str, mode: AnalysisMode) -> NormalizedReply {
    match strict_parse(raw_text) {
        Some(record) => NormalizedReply {
            record,
            tier: NormalizationTier::StrictJson,
            raw_text: raw_text.to_string(),
        },
        None => {
            debug!(%mode, "no parseable JSON object in reply, using heuristic extraction");
            NormalizedReply {
                record: heuristic_extract(raw_text, mode),
                tier: NormalizationTier::Heuristic,
                raw_text: raw_text.to_string(),
            }
        }
    }
}

// ============================================================================
// Tier 1 - Strict JSON
// ============================================================================

/// The widest brace span: first `{` to last `}`.
///
/// Replies contain at most one JSON object, so the greedy span is the object
/// even when the model wrapped it in prose or a markdown fence.
fn widest_brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start < end {
        Some(&text[start..=end])
    } else {
        None
    }
}

/// Parse the brace span as a JSON object and project the known fields.
fn strict_parse(text: &str) -> Option<AnalysisRecord> {
    let span = widest_brace_span(text)?;
    let value: Value = serde_json::from_str(span).ok()?;
    let obj = value.as_object()?;
    Some(project_record(obj))
}

/// Project only the eight known field names into a record.
///
/// Absent fields and type-mismatched fields collapse to the field's empty
/// default instead of propagating an error.
fn project_record(obj: &Map<String, Value>) -> AnalysisRecord {
    AnalysisRecord {
        refactored_code: text_field(obj, RecordField::RefactoredCode),
        refactoring_summary: text_field(obj, RecordField::RefactoringSummary),
        inline_comments: comments_field(obj),
        unit_tests: text_field(obj, RecordField::UnitTests),
        security_analysis: text_field(obj, RecordField::SecurityAnalysis),
        performance_analysis: text_field(obj, RecordField::PerformanceAnalysis),
        documentation: text_field(obj, RecordField::Documentation),
        architectural_suggestions: text_field(obj, RecordField::ArchitecturalSuggestions),
    }
}

fn text_field(obj: &Map<String, Value>, field: RecordField) -> String {
    obj.get(field.wire_name())
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

/// Inline comments: a non-array value collapses to the empty list; elements
/// that do not match the expected shape are dropped.
fn comments_field(obj: &Map<String, Value>) -> Vec<InlineComment> {
    obj.get(RecordField::InlineComments.wire_name())
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value::<InlineComment>(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

// ============================================================================
// Tier 2 - Heuristic extraction
// ============================================================================

/// Scrape a record from unstructured reply text.
fn heuristic_extract(raw_text: &str, mode: AnalysisMode) -> AnalysisRecord {
    let mut record = AnalysisRecord::default();

    let code_blob = extract_code_blocks(raw_text);
    if !code_blob.is_empty() {
        match mode {
            AnalysisMode::Refactor
            | AnalysisMode::Security
            | AnalysisMode::Debug
            | AnalysisMode::Modularization => record.refactored_code = code_blob,
            AnalysisMode::Tests => record.unit_tests = code_blob,
            // Prose-centric modes rely on section extraction below.
            AnalysisMode::Performance | AnalysisMode::Documentation => {}
        }
    }

    match mode {
        AnalysisMode::Security => {
            record.security_analysis = extract_section(raw_text, SECURITY_KEYWORDS);
        }
        AnalysisMode::Performance => {
            record.performance_analysis = extract_section(raw_text, PERFORMANCE_KEYWORDS);
        }
        AnalysisMode::Documentation => {
            record.documentation = extract_section(raw_text, DOCUMENTATION_KEYWORDS);
        }
        AnalysisMode::Modularization => {
            record.architectural_suggestions = extract_section(raw_text, MODULARIZATION_KEYWORDS);
        }
        AnalysisMode::Refactor | AnalysisMode::Tests | AnalysisMode::Debug => {}
    }

    // Human-diagnosable fallback, set regardless of mode.
    record.refactoring_summary = first_lines(raw_text, SUMMARY_LINES);

    record
}

/// Concatenate all fenced code spans, separated by a visible comment.
///
/// Fences are triple-backtick markers, optionally tagged with a language hint
/// on the opening line.
fn extract_code_blocks(text: &str) -> String {
    let mut blocks: Vec<&str> = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("```") {
        let after_fence = &remaining[start + 3..];
        // Skip the optional language hint up to the end of the opening line.
        let content_start = match after_fence.find('\n') {
            Some(nl) => nl + 1,
            None => break,
        };
        let content = &after_fence[content_start..];
        match content.find("```") {
            Some(end) => {
                let block = content[..end].trim_matches('\n');
                if !block.trim().is_empty() {
                    blocks.push(block);
                }
                remaining = &content[end + 3..];
            }
            None => break,
        }
    }

    blocks.join(CODE_BLOCK_SEPARATOR)
}

/// Collect every line containing at least one keyword, case-insensitively.
///
/// No matching lines yields an empty string; that is not an error condition.
fn extract_section(text: &str, keywords: &[&str]) -> String {
    text.lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            keywords.iter().any(|keyword| lower.contains(keyword))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The first `count` lines of the reply, joined.
fn first_lines(text: &str, count: usize) -> String {
    text.lines().take(count).collect::<Vec<_>>().join("\n")
}
