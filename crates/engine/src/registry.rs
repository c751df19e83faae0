//! Mode Registry
//!
//! Static mapping from analysis mode to the human-readable instruction block
//! inserted into the outbound prompt. Pure lookup, total over the closed
//! enum; identifier validation happens in `AnalysisMode::from_str` before a
//! mode value can exist.

use code_insight_core::AnalysisMode;

/// The instruction block for a mode.
pub fn instructions_for(mode: AnalysisMode) -> &'static str {
    match mode {
        AnalysisMode::Refactor => {
            "Analiza el siguiente código y proporciona sugerencias de refactorización \
             para mejorar la legibilidad, mantenibilidad y eficiencia. Incluye el código \
             refactorizado si es necesario."
        }
        AnalysisMode::Tests => {
            "Analiza el siguiente código y genera casos de prueba unitarios completos. \
             Incluye casos edge y diferentes escenarios de prueba."
        }
        AnalysisMode::Security => {
            "Realiza un análisis de seguridad del siguiente código. Identifica \
             vulnerabilidades potenciales, malas prácticas de seguridad y proporciona \
             recomendaciones para corregirlas."
        }
        AnalysisMode::Performance => {
            "Analiza el rendimiento del siguiente código. Identifica cuellos de botella, \
             optimizaciones posibles y mejores prácticas para el rendimiento."
        }
        AnalysisMode::Documentation => {
            "Analiza el siguiente código y genera documentación completa. Incluye \
             comentarios inline, documentación de funciones/métodos y guía de uso."
        }
        AnalysisMode::Debug => {
            "Analiza el siguiente código en busca de posibles errores, bugs o problemas \
             lógicos. Proporciona soluciones y mejoras."
        }
        AnalysisMode::Modularization => {
            "Analiza el siguiente código y sugiere cómo modularizarlo. Identifica \
             funciones que pueden separarse en módulos independientes, proporciona una \
             estructura de archivos recomendada y explica cómo dividir el código para \
             mejorar la organización y reutilización. Incluye ejemplos de cómo se vería \
             la modularización."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_modes_have_instructions() {
        for mode in AnalysisMode::ALL {
            assert!(!instructions_for(mode).is_empty(), "{:?}", mode);
        }
    }

    #[test]
    fn test_instructions_are_distinct() {
        for a in AnalysisMode::ALL {
            for b in AnalysisMode::ALL {
                if a != b {
                    assert_ne!(instructions_for(a), instructions_for(b));
                }
            }
        }
    }

    #[test]
    fn test_unknown_identifier_is_rejected_before_lookup() {
        // The registry is total over the enum; the InvalidMode error surfaces
        // at the identifier boundary.
        assert!("bogus".parse::<AnalysisMode>().is_err());
    }
}
