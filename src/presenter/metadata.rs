// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
//! Static label metadata: localized display names and descriptive text
//!
//! Lookups are total functions over the closed vocabulary with explicit
//! defaults; they never fail, even for labels the model was not supposed to
//! be able to emit.

/// Shown when a label has no descriptive text.
pub const NO_DESCRIPTION: &str = "No hay descripción disponible para esta categoría.";

/// Attached to the primary prediction in every render.
pub const PRIMARY_DISCLAIMER: &str =
    "Atención: Este resultado es solo una predicción del modelo. NO es un diagnóstico médico.";

/// Always-visible warning block, rendered whether or not an image was uploaded.
pub const GLOBAL_DISCLAIMER: &str = "IMPORTANTE – LEE ESTO CON ATENCIÓN: Este es un prototipo \
educativo basado en inteligencia artificial y minería de datos. NO sustituye la opinión de un \
médico especialista. Ante resultados preocupantes, acude a un dermatólogo. No tomes decisiones \
médicas basándote solo en esta herramienta. El sistema puede cometer errores.";

/// Localized display name for a model label.
///
/// Unknown labels pass through verbatim.
pub fn display_name(label: &str) -> &str {
    match label {
        "benign_keratosis-like_lesions" => "Queratosis Benigna (tipo verruga / seborreica)",
        "basal_cell_carcinoma" => "Carcinoma Basocelular",
        "actinic_keratoses" => "Queratosis Actínica (Pre-cáncer)",
        "vascular_lesions" => "Lesiones Vasculares",
        "melanocytic_Nevi" => "Nevus Melanocítico (Lunar común)",
        "melanoma" => "Melanoma",
        "dermatofibroma" => "Dermatofibroma",
        other => other,
    }
}

/// Short informational text for a model label.
///
/// Unknown labels get the generic placeholder.
pub fn description(label: &str) -> &'static str {
    match label {
        "benign_keratosis-like_lesions" => {
            "Crecimiento benigno común en adultos mayores. Suele ser verrugoso, elevado, \
             marrón o negro. No es canceroso y rara vez requiere tratamiento salvo por \
             estética o irritación."
        }
        "basal_cell_carcinoma" => {
            "El cáncer de piel más frecuente. Crece lentamente, casi nunca hace metástasis. \
             Suele aparecer como nódulo brillante, perlado o úlcera que no cicatriza. \
             Tratamiento temprano suele ser curativo."
        }
        "actinic_keratoses" => {
            "Lesión precancerosa por daño solar acumulado. Manchas ásperas, escamosas, \
             rosadas o rojizas. Sin tratamiento, un pequeño porcentaje puede evolucionar a \
             cáncer escamoso."
        }
        "vascular_lesions" => {
            "Generalmente benignas (ej. hemangiomas). Pueden ser manchas rojas o violáceas. \
             Rara vez malignas."
        }
        "melanocytic_Nevi" => {
            "Lunar común. Generalmente benigno. Vigilar cambios según la regla ABCDE."
        }
        "melanoma" => {
            "Cáncer de piel agresivo. Puede hacer metástasis. La detección temprana es clave."
        }
        "dermatofibroma" => "Nódulo benigno firme, usualmente marrón. No es canceroso.",
        _ => NO_DESCRIPTION,
    }
}
