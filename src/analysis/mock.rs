//! Canned analysis results — one fixed record per mode.
//!
//! Used when no API key is configured and as the fallback when the remote
//! call fails. All data here is hardcoded and fictional; nothing external is
//! contacted. Deterministic: the same (mode, medication list) input always
//! produces the same record.

use super::types::{
    AnalysisResult, Concern, EffectSeverity, Likelihood, MedicationAnalysis, Priority,
    Recommendation, Severity, SideEffectMatch, SkinMode,
};

/// Build the mock result for a mode.
///
/// For the medication monitor with a non-empty medication list, the canned
/// medication sub-record is replaced by one synthesized from the parsed
/// list. In every other case `medication_analysis` is stripped — it is only
/// ever present when the user actually reported medications.
pub fn mock_analysis(mode: SkinMode, medication_context: Option<&str>) -> AnalysisResult {
    let mut result = base_record(mode);

    let medications = medication_context.map(parse_medications).unwrap_or_default();
    if mode == SkinMode::MedicationMonitor && !medications.is_empty() {
        result.medication_analysis = Some(synthesize_medication_analysis(medications));
    } else {
        result.medication_analysis = None;
    }

    result
}

/// Split a free-text medication list into trimmed entries.
///
/// Accepts commas and newlines as separators; blank entries are dropped.
pub fn parse_medications(text: &str) -> Vec<String> {
    text.split(|c| c == ',' || c == '\n')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Synthesize a medication impact record from the user's parsed list.
///
/// The first two medications are paired with fixed effect templates; the
/// contraindication list is constant.
fn synthesize_medication_analysis(medications: Vec<String>) -> MedicationAnalysis {
    let primary = medications
        .first()
        .cloned()
        .unwrap_or_else(|| "Primary Medication".to_string());
    let secondary = medications
        .get(1)
        .cloned()
        .unwrap_or_else(|| "Secondary Medication".to_string());

    MedicationAnalysis {
        impact_summary: format!(
            "Your medications ({}) are powerful treatments that may cause skin changes. \
             We've identified key side effects and contraindications to guide your \
             skincare routine safely.",
            medications.join(", ")
        ),
        analyzed_medications: medications,
        side_effect_matches: vec![
            SideEffectMatch {
                medication: primary,
                observed_effect: "Increased skin sensitivity and potential barrier disruption"
                    .to_string(),
                likelihood: Likelihood::Likely,
                severity: EffectSeverity::Moderate,
            },
            SideEffectMatch {
                medication: secondary,
                observed_effect: "Possible dryness or peeling".to_string(),
                likelihood: Likelihood::Possible,
                severity: EffectSeverity::Mild,
            },
        ],
        contraindications: vec![
            "Avoid Benzoyl Peroxide - may interact negatively with oral medications".to_string(),
            "Avoid strong acids - use gentler chemical exfoliants instead".to_string(),
            "Avoid vitamin A derivatives - could compound effects".to_string(),
            "Avoid heavy occlusives - let skin breathe".to_string(),
            "Use SPF 50+ daily - medications increase photosensitivity".to_string(),
        ],
    }
}

fn concern(id: &str, name: &str, severity: Severity, description: &str, location: &str) -> Concern {
    Concern {
        id: id.to_string(),
        name: name.to_string(),
        severity,
        description: description.to_string(),
        location: Some(location.to_string()),
    }
}

fn recommend(title: &str, description: &str, product_type: &str, priority: Priority) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        description: description.to_string(),
        product_type: Some(product_type.to_string()),
        priority,
    }
}

/// The fixed per-mode records.
fn base_record(mode: SkinMode) -> AnalysisResult {
    match mode {
        SkinMode::Dashboard => AnalysisResult {
            overall_score: 78,
            skin_age: 24,
            waste_score: 35,
            hydration: 82,
            texture: 75,
            redness: 28,
            uv_damage_estimate: 42,
            concerns: vec![
                concern(
                    "minor-dryness",
                    "Minor Dryness",
                    Severity::Low,
                    "Slight dehydration in T-zone area. Consider hydrating serum.",
                    "Forehead",
                ),
                concern(
                    "fine-lines",
                    "Fine Lines",
                    Severity::Low,
                    "Minimal expression lines around eyes. Preventative care recommended.",
                    "Around Eyes",
                ),
            ],
            recommendations: vec![
                recommend(
                    "Hydrating Essence",
                    "Boost skin hydration with a lightweight, fast-absorbing essence",
                    "Essence",
                    Priority::High,
                ),
                recommend(
                    "Gentle Exfoliator",
                    "Use 2x per week to maintain skin texture and glow",
                    "Exfoliator",
                    Priority::Medium,
                ),
                recommend(
                    "SPF 30+ Sunscreen",
                    "Daily protection to prevent further UV damage and maintain elasticity",
                    "Sunscreen",
                    Priority::High,
                ),
            ],
            medication_analysis: None,
        },

        SkinMode::LieDetector => AnalysisResult {
            overall_score: 72,
            skin_age: 26,
            waste_score: 58,
            hydration: 65,
            texture: 68,
            redness: 35,
            uv_damage_estimate: 38,
            concerns: vec![
                concern(
                    "congestion",
                    "Product Buildup",
                    Severity::Medium,
                    "Signs of product accumulation. Your routine may be over-complicated.",
                    "T-Zone",
                ),
                concern(
                    "uneven-texture",
                    "Uneven Texture",
                    Severity::Medium,
                    "Some products may not be synergizing well. Simplify your routine.",
                    "Cheeks",
                ),
            ],
            recommendations: vec![
                recommend(
                    "Simplify Your Routine",
                    "Reduce to essentials: cleanser, hydrator, sunscreen",
                    "Routine Overhaul",
                    Priority::High,
                ),
                recommend(
                    "Detox Clay Mask",
                    "Use monthly to clear buildup and reset skin",
                    "Mask",
                    Priority::High,
                ),
                recommend(
                    "Gentle Cleanser",
                    "Switch to pH-balanced, sulfate-free formula",
                    "Cleanser",
                    Priority::Medium,
                ),
            ],
            medication_analysis: None,
        },

        SkinMode::AcneDetective => AnalysisResult {
            overall_score: 64,
            skin_age: 22,
            waste_score: 45,
            hydration: 58,
            texture: 52,
            redness: 62,
            uv_damage_estimate: 25,
            concerns: vec![
                concern(
                    "active-breakouts",
                    "Active Breakouts",
                    Severity::High,
                    "Multiple inflammatory lesions detected. Likely hormonal or dietary trigger.",
                    "Jawline",
                ),
                concern(
                    "post-inflammatory",
                    "Post-Inflammatory Marks",
                    Severity::Medium,
                    "Hyperpigmentation from previous breakouts. Fading with time.",
                    "Left Cheek",
                ),
                concern(
                    "excess-sebum",
                    "Excess Sebum",
                    Severity::Medium,
                    "Overactive oil production in T-zone contributing to congestion.",
                    "Forehead",
                ),
            ],
            recommendations: vec![
                recommend(
                    "Niacinamide Treatment",
                    "5% concentration to regulate sebum and strengthen barrier",
                    "Treatment",
                    Priority::High,
                ),
                recommend(
                    "Salicylic Acid Cleanser",
                    "Daily use to exfoliate pores and prevent congestion",
                    "Cleanser",
                    Priority::High,
                ),
                recommend(
                    "Azelaic Acid Serum",
                    "Address redness and prevent post-inflammatory hyperpigmentation",
                    "Serum",
                    Priority::High,
                ),
                recommend(
                    "Lightweight Moisturizer",
                    "Non-comedogenic formula to maintain barrier without congestion",
                    "Moisturizer",
                    Priority::Medium,
                ),
            ],
            medication_analysis: None,
        },

        SkinMode::MoleGuardian => AnalysisResult {
            overall_score: 85,
            skin_age: 25,
            waste_score: 0,
            hydration: 80,
            texture: 85,
            redness: 18,
            uv_damage_estimate: 32,
            concerns: vec![
                concern(
                    "mole-upper-cheek",
                    "Pigmented Lesion - Upper Cheek",
                    Severity::Low,
                    "Appears benign. Symmetrical, defined borders, uniform color. Monitor for changes.",
                    "Right Cheek",
                ),
                concern(
                    "mole-neck",
                    "Freckle Cluster",
                    Severity::Low,
                    "Harmless sun freckles from UV exposure. No concerning ABCDE changes detected.",
                    "Neck",
                ),
            ],
            recommendations: vec![
                recommend(
                    "Monthly Self-Checks",
                    "Track moles with photos monthly using the ABCDE method",
                    "Monitoring",
                    Priority::High,
                ),
                recommend(
                    "Broad-Spectrum SPF 50",
                    "Prevent new lesions and color darkening",
                    "Sunscreen",
                    Priority::High,
                ),
                recommend(
                    "Annual Dermatology Exam",
                    "Professional assessment for any concerning lesions",
                    "Professional",
                    Priority::Medium,
                ),
            ],
            medication_analysis: None,
        },

        SkinMode::UvRevealer => AnalysisResult {
            overall_score: 68,
            skin_age: 32,
            waste_score: 0,
            hydration: 72,
            texture: 65,
            redness: 32,
            uv_damage_estimate: 71,
            concerns: vec![
                concern(
                    "sun-spots",
                    "Solar Lentigos",
                    Severity::High,
                    "Multiple sun spots concentrated on forehead and cheekbones. Cumulative sun exposure evident.",
                    "Forehead & Cheeks",
                ),
                concern(
                    "photoaging",
                    "Photoaging Signs",
                    Severity::Medium,
                    "Fine lines and reduced elasticity consistent with chronic UV exposure.",
                    "Around Eyes",
                ),
            ],
            recommendations: vec![
                recommend(
                    "Vitamin C Serum",
                    "Antioxidant protection and brightening to fade sun damage",
                    "Serum",
                    Priority::High,
                ),
                recommend(
                    "Retinol Treatment",
                    "Evening use to boost collagen and reduce fine lines",
                    "Treatment",
                    Priority::High,
                ),
                recommend(
                    "SPF 50+ Daily Sunscreen",
                    "Prevent further darkening of existing spots",
                    "Sunscreen",
                    Priority::High,
                ),
                recommend(
                    "Professional Laser Treatment",
                    "Consider IPL or laser for more aggressive spot removal",
                    "Professional",
                    Priority::Medium,
                ),
            ],
            medication_analysis: None,
        },

        SkinMode::RoutineOptimizer => AnalysisResult {
            overall_score: 81,
            skin_age: 23,
            waste_score: 42,
            hydration: 86,
            texture: 79,
            redness: 22,
            uv_damage_estimate: 35,
            concerns: vec![
                concern(
                    "barrier-health",
                    "Optimal Barrier Health",
                    Severity::Low,
                    "Skin barrier appears healthy. Current routine is working well.",
                    "Overall",
                ),
                concern(
                    "slight-sensitivity",
                    "Slight Sensitivity",
                    Severity::Low,
                    "Minimal irritation detected. No major product incompatibilities found.",
                    "Sensitive Areas",
                ),
            ],
            recommendations: vec![
                recommend(
                    "Maintain AM Routine",
                    "Continue with: Gentle cleanser → Hydrating toner → Sunscreen",
                    "Routine",
                    Priority::High,
                ),
                recommend(
                    "Optimize PM Routine",
                    "Cleanser → Essence → Targeted serum → Night cream",
                    "Routine",
                    Priority::High,
                ),
                recommend(
                    "Weekly Treatment Slot",
                    "Add exfoliator or sheet mask 1-2x weekly for enhanced results",
                    "Treatment",
                    Priority::Medium,
                ),
            ],
            medication_analysis: None,
        },

        SkinMode::MedicationMonitor => AnalysisResult {
            overall_score: 62,
            skin_age: 27,
            waste_score: 0,
            hydration: 58,
            texture: 54,
            redness: 48,
            uv_damage_estimate: 15,
            concerns: vec![
                concern(
                    "med-dryness",
                    "Medication-Related Dryness",
                    Severity::Medium,
                    "Consistent with oral medication side effects. Barrier integrity compromised.",
                    "Entire Face",
                ),
                concern(
                    "photosensitivity-risk",
                    "Photosensitivity Indicators",
                    Severity::Medium,
                    "Some medications increase sun sensitivity. Extra sun protection needed.",
                    "Exposed Areas",
                ),
            ],
            recommendations: vec![
                recommend(
                    "Intense Ceramide Moisturizer",
                    "Repair barrier and combat dryness from medications",
                    "Moisturizer",
                    Priority::High,
                ),
                recommend(
                    "Hyaluronic Acid Serum",
                    "Hydrating base layer for compromised barrier",
                    "Serum",
                    Priority::High,
                ),
                recommend(
                    "Non-Irritating Sunscreen",
                    "Mineral SPF 50+ to protect photosensitive skin",
                    "Sunscreen",
                    Priority::High,
                ),
            ],
            // Stripped by mock_analysis unless the user reported medications.
            medication_analysis: Some(MedicationAnalysis {
                analyzed_medications: vec![
                    "Accutane".to_string(),
                    "Tretinoin".to_string(),
                    "Spironolactone".to_string(),
                ],
                impact_summary: "Your medications are highly effective for acne but require \
                                 careful skincare support. The combination shows significant \
                                 drying effects, especially with topical and oral retinoids."
                    .to_string(),
                side_effect_matches: vec![
                    SideEffectMatch {
                        medication: "Accutane".to_string(),
                        observed_effect: "Severe dryness and flaking".to_string(),
                        likelihood: Likelihood::Confirmed,
                        severity: EffectSeverity::Severe,
                    },
                    SideEffectMatch {
                        medication: "Tretinoin 0.05%".to_string(),
                        observed_effect: "Increased photosensitivity".to_string(),
                        likelihood: Likelihood::Likely,
                        severity: EffectSeverity::Moderate,
                    },
                    SideEffectMatch {
                        medication: "Spironolactone".to_string(),
                        observed_effect: "Occasional dry patches on cheeks".to_string(),
                        likelihood: Likelihood::Possible,
                        severity: EffectSeverity::Mild,
                    },
                ],
                contraindications: vec![
                    "Avoid Vitamin C (ascorbic acid) - use Stabilized or Ferulic forms instead"
                        .to_string(),
                    "Avoid Benzoyl Peroxide - use Azelaic Acid for antibacterial benefits"
                        .to_string(),
                    "Avoid Salicylic Acid - switch to gentler Lactic or Mandelic acid".to_string(),
                    "Avoid heavy physical exfoliation - stick to chemical exfoliants".to_string(),
                    "Avoid hot water - use lukewarm temperatures".to_string(),
                ],
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_has_scores_in_range() {
        for mode in SkinMode::ALL {
            let result = mock_analysis(mode, None);
            for score in result.score_fields() {
                assert!(score <= 100, "{:?}: score {} out of range", mode, score);
            }
            assert!(!result.concerns.is_empty(), "{:?}: no concerns", mode);
            assert!(!result.recommendations.is_empty(), "{:?}: no recommendations", mode);
        }
    }

    #[test]
    fn medication_analysis_requires_monitor_mode_and_meds() {
        // Monitor mode without meds: canned sub-record is stripped.
        let result = mock_analysis(SkinMode::MedicationMonitor, None);
        assert!(result.medication_analysis.is_none());
        let result = mock_analysis(SkinMode::MedicationMonitor, Some("   \n "));
        assert!(result.medication_analysis.is_none());

        // Meds in a non-monitor mode: ignored.
        let result = mock_analysis(SkinMode::AcneDetective, Some("Accutane"));
        assert!(result.medication_analysis.is_none());

        // Both present: synthesized from the parsed list.
        let result = mock_analysis(SkinMode::MedicationMonitor, Some("Accutane, Tretinoin"));
        let meds = result.medication_analysis.expect("expected medication analysis");
        assert_eq!(meds.analyzed_medications, vec!["Accutane", "Tretinoin"]);
        assert_eq!(meds.side_effect_matches.len(), 2);
        assert_eq!(meds.side_effect_matches[0].medication, "Accutane");
        assert_eq!(meds.side_effect_matches[1].medication, "Tretinoin");
        assert_eq!(meds.contraindications.len(), 5);
    }

    #[test]
    fn single_medication_falls_back_to_placeholder() {
        let result = mock_analysis(SkinMode::MedicationMonitor, Some("Accutane"));
        let meds = result.medication_analysis.unwrap();
        assert_eq!(meds.side_effect_matches[0].medication, "Accutane");
        assert_eq!(meds.side_effect_matches[1].medication, "Secondary Medication");
    }

    #[test]
    fn parses_commas_and_newlines() {
        assert_eq!(
            parse_medications("Accutane, Tretinoin\nSpironolactone"),
            vec!["Accutane", "Tretinoin", "Spironolactone"]
        );
        assert_eq!(parse_medications(""), Vec::<String>::new());
        assert_eq!(parse_medications(" , \n , "), Vec::<String>::new());
        assert_eq!(
            parse_medications("Accutane (20mg)\nTretinoin 0.05%"),
            vec!["Accutane (20mg)", "Tretinoin 0.05%"]
        );
    }

    #[test]
    fn deterministic_for_identical_input() {
        let a = mock_analysis(SkinMode::UvRevealer, None);
        let b = mock_analysis(SkinMode::UvRevealer, None);
        assert_eq!(a, b);
    }
}
