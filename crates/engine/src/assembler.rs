//! Context Assembler
//!
//! Folds a session's prior analyses into a single text block used to ground
//! follow-up conversational turns, and composes the chat-turn system prompt
//! around it. Pure functions of their inputs; the session cache itself is
//! owned and injected by the caller.

use code_insight_core::ConversationContext;

/// Role framing for conversational turns.
const CHAT_ROLE_PREAMBLE: &str = "Eres un asistente experto en programación. Ayudas al usuario \
a entender y mejorar su código. Responde en español con claridad, citando líneas cuando sea útil.";

/// Instructions for using the prior-analyses block.
const CONTEXT_USAGE_INSTRUCTIONS: &str = "Usa los análisis previos como contexto al responder. \
Si la pregunta se refiere a un análisis anterior, básate en su contenido en lugar de repetir \
el trabajo.";

/// Assemble the prior-analyses block: one titled subsection per mode, in
/// insertion order of first occurrence. An empty context yields an empty
/// string, and the caller omits the section entirely.
pub fn assemble_context(context: &ConversationContext) -> String {
    context
        .iter()
        .map(|(mode, content)| format!("### {}:\n{}", mode.display_name(), content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Compose the system prompt for a chat turn: role framing, the user's code,
/// the assembled prior analyses (when any exist) with usage instructions.
/// The running message history rides separately as provider messages.
pub fn build_chat_system_prompt(
    code: &str,
    language: &str,
    context: &ConversationContext,
) -> String {
    let mut sections = vec![
        CHAT_ROLE_PREAMBLE.to_string(),
        format!("Código actual del usuario:\n```{}\n{}\n```", language, code),
    ];

    let assembled = assemble_context(context);
    if !assembled.is_empty() {
        sections.push(format!("Análisis previos realizados:\n\n{}", assembled));
        sections.push(CONTEXT_USAGE_INSTRUCTIONS.to_string());
    }

    sections.join("\n\n")
}
