//! Analysis response types — AnalysisResult and its nested records.
//!
//! Gemini returns JSON that deserializes directly into these types; the
//! webview receives the same shape through session snapshots and events.
//! Field names are camelCase on the wire, modes SCREAMING_SNAKE_CASE.

use serde::{Deserialize, Serialize};

/// Which analysis variant drives the prompt, schema emphasis, and mock record.
///
/// Selected on the landing screen and fixed for the duration of one capture
/// cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkinMode {
    /// General skin-health dashboard (routed to the efficacy prompt when analyzing).
    Dashboard,
    /// Product efficacy check ("is your routine actually working").
    LieDetector,
    /// Breakout and inflammation analysis.
    AcneDetective,
    /// Pigmented-lesion tracking (borders, symmetry).
    MoleGuardian,
    /// Hidden UV damage simulation.
    UvRevealer,
    /// Routine sequencing and timing optimization.
    RoutineOptimizer,
    /// Drug–skin interaction review.
    MedicationMonitor,
}

impl SkinMode {
    /// Every mode, in landing-screen order. Drives mock lookup tests.
    pub const ALL: [SkinMode; 7] = [
        SkinMode::Dashboard,
        SkinMode::LieDetector,
        SkinMode::AcneDetective,
        SkinMode::MoleGuardian,
        SkinMode::UvRevealer,
        SkinMode::RoutineOptimizer,
        SkinMode::MedicationMonitor,
    ];

    /// The mode actually sent to the analysis service.
    ///
    /// A capture started from the general dashboard is analyzed with the
    /// efficacy prompt — the dashboard itself has no dedicated emphasis.
    pub fn effective(self) -> SkinMode {
        match self {
            SkinMode::Dashboard => SkinMode::LieDetector,
            other => other,
        }
    }

    /// True when this mode expects a medication list before capture.
    pub fn wants_medications(self) -> bool {
        self == SkinMode::MedicationMonitor
    }
}

/// Severity of a detected concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Priority of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// How confidently an observed effect is attributed to a medication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Likelihood {
    Possible,
    Likely,
    Confirmed,
}

/// Visual intensity of a medication side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectSeverity {
    Mild,
    Moderate,
    Severe,
}

/// A detected skin condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concern {
    pub id: String,
    pub name: String,
    pub severity: Severity,
    pub description: String,
    /// Region label, e.g. "Forehead" or "Left Cheek".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A suggested product or action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    pub priority: Priority,
}

/// One observed effect cross-referenced against a reported medication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideEffectMatch {
    pub medication: String,
    pub observed_effect: String,
    pub likelihood: Likelihood,
    pub severity: EffectSeverity,
}

/// Medication-impact sub-record.
///
/// Present only for the medication monitor, and only when the user supplied
/// a non-empty medication list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationAnalysis {
    pub analyzed_medications: Vec<String>,
    pub impact_summary: String,
    pub side_effect_matches: Vec<SideEffectMatch>,
    /// Ingredients/procedures to avoid, with suggested alternatives.
    pub contraindications: Vec<String>,
}

/// The full analysis returned by Gemini or the mock generator.
///
/// All score fields are 0–100 except `skin_age` (estimated age in years).
/// Constructed fresh per capture; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u8,
    pub skin_age: u8,
    /// How ineffective the current product routine looks (efficacy check).
    pub waste_score: u8,
    pub hydration: u8,
    pub texture: u8,
    pub redness: u8,
    pub uv_damage_estimate: u8,
    pub concerns: Vec<Concern>,
    pub recommendations: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medication_analysis: Option<MedicationAnalysis>,
}

impl AnalysisResult {
    /// The six percentage fields, for range checks.
    pub fn score_fields(&self) -> [u8; 6] {
        [
            self.overall_score,
            self.waste_score,
            self.hydration,
            self.texture,
            self.redness,
            self.uv_damage_estimate,
        ]
    }
}
