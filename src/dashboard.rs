//! Dashboard derivations — data the webview renders but never computes.
//!
//! Everything here is a pure function of the current `AnalysisResult` (or a
//! slider value): the synthesized trend series, side-effect grouping, the
//! UV-simulation filter formula, and the shareable text summary. None of it
//! feeds back into the result.

use crate::analysis::types::{AnalysisResult, MedicationAnalysis, SideEffectMatch, SkinMode};
use serde::Serialize;

/// One point of the synthesized skin-health trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    pub score: u8,
}

/// Offsets below the current score for the four historical points.
const TREND_OFFSETS: [(u8, &str); 4] = [(15, "W1"), (8, "W2"), (12, "W3"), (5, "W4")];

/// Synthesize a five-point trend ending at the current score.
///
/// There is no real history — the series exists purely so the dashboard
/// chart has a shape. Earlier points sit a fixed offset below the current
/// score, floored at zero.
pub fn health_trend(current_score: u8) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = TREND_OFFSETS
        .iter()
        .map(|&(offset, label)| TrendPoint {
            date: label.to_string(),
            score: current_score.saturating_sub(offset),
        })
        .collect();
    points.push(TrendPoint {
        date: "Today".to_string(),
        score: current_score,
    });
    points
}

/// Side-effect matches for one medication, in report order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationEffects {
    pub medication: String,
    pub effects: Vec<SideEffectMatch>,
}

/// Group side-effect matches by medication, preserving first-seen order.
pub fn group_side_effects(analysis: &MedicationAnalysis) -> Vec<MedicationEffects> {
    let mut groups: Vec<MedicationEffects> = Vec::new();
    for m in &analysis.side_effect_matches {
        match groups.iter_mut().find(|g| g.medication == m.medication) {
            Some(group) => group.effects.push(m.clone()),
            None => groups.push(MedicationEffects {
                medication: m.medication.clone(),
                effects: vec![m.clone()],
            }),
        }
    }
    groups
}

/// Computed parameters for the UV-damage simulation overlay.
///
/// Wood's-lamp look: high contrast highlights pigmentation, low brightness
/// simulates the dark room, the sepia + hue-rotate combination gives the
/// purple UV-photography tint, and saturation scales with damage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UvFilter {
    pub intensity: u8,
    pub contrast: f64,
    pub brightness: f64,
    pub hue_rotate_deg: f64,
    pub saturate: f64,
    pub overlay_alpha: f64,
    /// Ready-to-apply CSS filter string.
    pub css: String,
    /// Ready-to-apply overlay background color.
    pub overlay_rgba: String,
}

/// Compute the UV filter for a slider intensity (clamped to 0–100).
pub fn uv_filter(intensity: u8) -> UvFilter {
    let intensity = intensity.min(100);
    let i = f64::from(intensity) / 100.0;

    let contrast = 1.1 + i * 1.2;
    let brightness = 0.8 - i * 0.2;
    let hue_rotate_deg = 180.0 + i * 30.0;
    let saturate = 2.0 + i * 4.0;
    let overlay_alpha = 0.3 + i * 0.3;

    UvFilter {
        intensity,
        contrast,
        brightness,
        hue_rotate_deg,
        saturate,
        overlay_alpha,
        css: format!(
            "contrast({contrast:.2}) brightness({brightness:.2}) grayscale(1) sepia(1) \
             hue-rotate({hue_rotate_deg:.0}deg) saturate({saturate:.2})"
        ),
        overlay_rgba: format!("rgba(60, 20, 120, {overlay_alpha:.2})"),
    }
}

/// Render a plain-text report for the clipboard share action.
pub fn render_summary(result: &AnalysisResult, mode: SkinMode) -> String {
    let mut out = String::new();
    out.push_str(&format!("SkinSight analysis — {:?} mode\n", mode));
    out.push_str(&format!(
        "Overall {} / Skin age {} / Hydration {} / Texture {} / Redness {} / UV load {}\n",
        result.overall_score,
        result.skin_age,
        result.hydration,
        result.texture,
        result.redness,
        result.uv_damage_estimate
    ));

    if !result.concerns.is_empty() {
        out.push_str("\nConcerns:\n");
        for c in &result.concerns {
            out.push_str(&format!(
                "- {} ({:?}{}): {}\n",
                c.name,
                c.severity,
                c.location
                    .as_deref()
                    .map(|l| format!(", {}", l))
                    .unwrap_or_default(),
                c.description
            ));
        }
    }

    if !result.recommendations.is_empty() {
        out.push_str("\nRecommendations:\n");
        for r in &result.recommendations {
            out.push_str(&format!("- [{:?}] {}: {}\n", r.priority, r.title, r.description));
        }
    }

    if let Some(meds) = &result.medication_analysis {
        out.push_str(&format!("\nMedication impact: {}\n", meds.impact_summary));
        for group in group_side_effects(meds) {
            for effect in group.effects {
                out.push_str(&format!(
                    "- {}: {} ({:?}, {:?})\n",
                    group.medication, effect.observed_effect, effect.likelihood, effect.severity
                ));
            }
        }
        if !meds.contraindications.is_empty() {
            out.push_str("Contraindications:\n");
            for item in &meds.contraindications {
                out.push_str(&format!("- {}\n", item));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::mock::mock_analysis;
    use crate::analysis::types::{EffectSeverity, Likelihood};

    #[test]
    fn trend_ends_at_current_score() {
        let trend = health_trend(78);
        let scores: Vec<u8> = trend.iter().map(|p| p.score).collect();
        assert_eq!(scores, vec![63, 70, 66, 73, 78]);
        assert_eq!(trend[4].date, "Today");
        assert_eq!(trend[0].date, "W1");
    }

    #[test]
    fn trend_floors_at_zero() {
        let trend = health_trend(10);
        let scores: Vec<u8> = trend.iter().map(|p| p.score).collect();
        assert_eq!(scores, vec![0, 2, 0, 5, 10]);
    }

    #[test]
    fn uv_filter_endpoints_match_formula() {
        let low = uv_filter(0);
        assert_eq!(low.contrast, 1.1);
        assert_eq!(low.brightness, 0.8);
        assert_eq!(low.hue_rotate_deg, 180.0);
        assert_eq!(low.saturate, 2.0);
        assert_eq!(low.overlay_alpha, 0.3);

        let high = uv_filter(100);
        assert!((high.contrast - 2.3).abs() < 1e-9);
        assert!((high.brightness - 0.6).abs() < 1e-9);
        assert_eq!(high.hue_rotate_deg, 210.0);
        assert_eq!(high.saturate, 6.0);
        assert!((high.overlay_alpha - 0.6).abs() < 1e-9);

        assert!(high.css.contains("grayscale(1)"));
        assert!(high.css.contains("sepia(1)"));
        assert!(high.css.contains("hue-rotate(210deg)"));
        assert_eq!(high.overlay_rgba, "rgba(60, 20, 120, 0.60)");
    }

    #[test]
    fn uv_filter_clamps_intensity() {
        assert_eq!(uv_filter(255).intensity, 100);
        assert_eq!(uv_filter(255), uv_filter(100));
    }

    #[test]
    fn grouping_preserves_first_seen_order() {
        let analysis = MedicationAnalysis {
            analyzed_medications: vec!["A".into(), "B".into()],
            impact_summary: String::new(),
            side_effect_matches: vec![
                SideEffectMatch {
                    medication: "A".into(),
                    observed_effect: "dryness".into(),
                    likelihood: Likelihood::Likely,
                    severity: EffectSeverity::Mild,
                },
                SideEffectMatch {
                    medication: "B".into(),
                    observed_effect: "redness".into(),
                    likelihood: Likelihood::Possible,
                    severity: EffectSeverity::Mild,
                },
                SideEffectMatch {
                    medication: "A".into(),
                    observed_effect: "peeling".into(),
                    likelihood: Likelihood::Confirmed,
                    severity: EffectSeverity::Moderate,
                },
            ],
            contraindications: vec![],
        };

        let groups = group_side_effects(&analysis);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].medication, "A");
        assert_eq!(groups[0].effects.len(), 2);
        assert_eq!(groups[1].medication, "B");
        assert_eq!(groups[1].effects.len(), 1);
    }

    #[test]
    fn summary_includes_medication_section_when_present() {
        let result = mock_analysis(SkinMode::MedicationMonitor, Some("Accutane"));
        let summary = render_summary(&result, SkinMode::MedicationMonitor);
        assert!(summary.contains("Medication impact"));
        assert!(summary.contains("Accutane"));

        let result = mock_analysis(SkinMode::Dashboard, None);
        let summary = render_summary(&result, SkinMode::Dashboard);
        assert!(!summary.contains("Medication impact"));
    }
}
