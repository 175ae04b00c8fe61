//! Prompt constants and the Gemini response schema.
//!
//! These are the contract between SkinSight and the model: the system
//! instruction sets the analyst persona, the per-mode prompt steers the
//! focus, and the response schema pins the exact JSON shape that
//! deserializes into `AnalysisResult`.

use super::types::SkinMode;

pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Fixed system instruction sent with every analysis request.
pub const SYSTEM_INSTRUCTION: &str = "\
You are SkinSight AI, an advanced dermatological analysis engine.
Your goal is to analyze skin images and provide scientific, data-driven insights.
You are NOT a doctor, but a cosmetic analyst.
Analyze the provided face image for texture, spots, redness, wrinkles, and potential UV damage.
When medications are provided, cross-reference observed skin conditions (e.g., dryness, rash, sensitivity) with known side effects of the drugs.
Always return valid JSON conforming to the schema.
Be critical but constructive.
DO NOT hallucinate results. If the image is not clear, state that in the analysis.";

/// Build the mode-specific analysis prompt.
///
/// The medication monitor embeds the raw medication text and asks for
/// per-medication matching; every other mode gets a fixed focus string.
pub fn build_prompt(mode: SkinMode, medication_context: Option<&str>) -> String {
    match mode {
        SkinMode::LieDetector => {
            "Analyze this skin for overall health. Estimate 'waste score' which implies how \
             ineffective current products might be based on dryness or congestion. Compare \
             against a theoretical baseline."
                .to_string()
        }
        SkinMode::AcneDetective => {
            "Focus heavily on active breakouts, inflammation, and scarring. Identify specific \
             types of acne (comedonal, inflammatory)."
                .to_string()
        }
        SkinMode::MoleGuardian => {
            "Scan for pigmented lesions. Analyze borders and symmetry. Provide a general \
             stability score."
                .to_string()
        }
        SkinMode::UvRevealer => {
            "Analyze deep pigmentation, sun spots, and fine lines associated with photoaging. \
             Estimate hidden UV damage."
                .to_string()
        }
        SkinMode::RoutineOptimizer => {
            "Analyze skin type (oily/dry/combo) and barrier health to suggest routine \
             adjustments."
                .to_string()
        }
        SkinMode::MedicationMonitor => format!(
            "User reports taking: \"{}\".\n\
             ANALYZE the skin image for side effects SPECIFIC to these medications.\n\
             1. Cross-reference provided meds with observed features (e.g. Accutane -> dryness/flaking).\n\
             2. For each match, estimate SEVERITY (mild/moderate/severe) based on visual intensity.\n\
             3. Identify CONTRAINDICATIONS: ingredients/procedures to avoid. Be specific and \
             suggest alternatives where possible (e.g., \"Avoid Salicylic Acid; use Lactic Acid \
             instead\").\n\
             Return a 'medicationAnalysis' object detailing these findings.",
            medication_context.unwrap_or_default()
        ),
        SkinMode::Dashboard => "General skin health analysis.".to_string(),
    }
}

/// The JSON schema Gemini must conform to, passed as `responseSchema`.
///
/// Mirrors `AnalysisResult` field for field, including the closed enum sets.
pub fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "overallScore": { "type": "INTEGER", "description": "0-100 health score" },
            "skinAge": { "type": "INTEGER", "description": "Estimated skin age" },
            "wasteScore": { "type": "INTEGER", "description": "0-100 ineffectiveness of current routine" },
            "hydration": { "type": "INTEGER", "description": "0-100 hydration level" },
            "texture": { "type": "INTEGER", "description": "0-100 smoothness" },
            "redness": { "type": "INTEGER", "description": "0-100 inflammation level" },
            "uvDamageEstimate": { "type": "INTEGER", "description": "0-100 estimate of sun damage" },
            "concerns": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "name": { "type": "STRING" },
                        "severity": { "type": "STRING", "enum": ["low", "medium", "high"] },
                        "description": { "type": "STRING" },
                        "location": { "type": "STRING" }
                    }
                }
            },
            "recommendations": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "productType": { "type": "STRING" },
                        "priority": { "type": "STRING", "enum": ["high", "medium", "low"] }
                    }
                }
            },
            "medicationAnalysis": {
                "type": "OBJECT",
                "description": "Only populate if medicationContext was provided",
                "properties": {
                    "analyzedMedications": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "List of medications identified from input"
                    },
                    "impactSummary": {
                        "type": "STRING",
                        "description": "Brief summary of how these meds are affecting the skin"
                    },
                    "sideEffectMatches": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "medication": { "type": "STRING" },
                                "observedEffect": { "type": "STRING" },
                                "likelihood": { "type": "STRING", "enum": ["possible", "likely", "confirmed"] },
                                "severity": { "type": "STRING", "enum": ["mild", "moderate", "severe"] }
                            }
                        }
                    },
                    "contraindications": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "Skincare ingredients or treatments to avoid with alternatives"
                    }
                }
            }
        }
    })
}
