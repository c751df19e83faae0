//! Prompt Builder
//!
//! Composes the single instruction document sent to the model for an analysis
//! request. The document layout is fixed: role framing, mode instructions (or
//! translation framing), output schema, language identifiers, fenced code
//! payload, and a JSON-only closing instruction. Pure function of the
//! request; identical inputs yield identical output.

use code_insight_core::AnalysisRequest;

use crate::registry::instructions_for;

/// Role-framing preamble naming the assistant's expertise.
const ROLE_PREAMBLE: &str = "Eres un asistente experto en programación. Responde en español \
con claridad, citando líneas cuando sea útil.";

/// Output schema block enumerating the eight record fields.
///
/// Every field is always present in the reply; fields that do not apply to
/// the requested analysis stay empty.
const OUTPUT_SCHEMA_BLOCK: &str = r#"Estructura tu respuesta como un objeto JSON con exactamente estos ocho campos (todos siempre presentes; usa cadena vacía o lista vacía cuando un campo no aplique al análisis solicitado):
- "refactoredCode" (string): el código resultante o la vista base del código analizado
- "refactoringSummary" (string): resumen de los cambios o hallazgos principales
- "inlineComments" (array de objetos {"lineNumber": número, "text": string, "severity": "info" | "warning" | "error"}): comentarios anclados a líneas concretas
- "unitTests" (string): pruebas unitarias generadas
- "securityAnalysis" (string): hallazgos de seguridad
- "performanceAnalysis" (string): hallazgos de rendimiento
- "documentation" (string): documentación generada
- "architecturalSuggestions" (string): sugerencias de modularización y arquitectura"#;

/// Closing instruction demanding a bare JSON reply.
const JSON_ONLY_CLOSING: &str = "Responde EXCLUSIVAMENTE con un único objeto JSON que cumpla \
el esquema anterior, sin texto antes o después y sin envolver el JSON en bloques de código \
markdown.";

/// Translation-framing instruction block, substituted for the mode block when
/// the target language differs from the source.
fn translation_instructions(source: &str, target: &str) -> String {
    format!(
        "Traduce el siguiente código de {source} a {target}. Mantén la funcionalidad \
         exactamente igual, pero adapta la sintaxis, los idiomas propios y las mejores \
         prácticas del lenguaje de destino. Si hay librerías o funciones específicas del \
         lenguaje original, sugiere equivalentes en {target}. Coloca el código traducido \
         en \"refactoredCode\" y añade a \"refactoringSummary\", como prosa, las \
         dependencias o librerías necesarias en {target} y los cambios principales \
         realizados.",
        source = source,
        target = target,
    )
}

/// Build the instruction document for an analysis request.
///
/// Deterministic for identical inputs. Callers validate the request (and the
/// mode identifier) beforehand; this function has no failure path.
pub fn build_analysis_prompt(request: &AnalysisRequest) -> String {
    let instruction_block = if request.is_translation() {
        translation_instructions(&request.source_language, request.resolved_target())
    } else {
        instructions_for(request.mode).to_string()
    };

    let language_block = if request.is_translation() {
        format!(
            "Lenguaje de origen: {}\nLenguaje de destino: {}",
            request.source_language,
            request.resolved_target()
        )
    } else {
        format!("Lenguaje: {}", request.source_language)
    };

    format!(
        "{preamble}\n\n{instructions}\n\n{schema}\n\n{languages}\n\nCódigo:\n```{tag}\n{code}\n```\n\n{closing}",
        preamble = ROLE_PREAMBLE,
        instructions = instruction_block,
        schema = OUTPUT_SCHEMA_BLOCK,
        languages = language_block,
        tag = request.source_language,
        code = request.source_code,
        closing = JSON_ONLY_CLOSING,
    )
}
