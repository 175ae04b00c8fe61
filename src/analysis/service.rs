//! Analysis service — credential gate, remote call, mock fallback.
//!
//! The one contract everything else relies on: given an image, a mode, and
//! an optional medication list, `analyze` ALWAYS produces an
//! `AnalysisResult`. No key → mock after a fixed simulated latency. Remote
//! failure of any kind → the same mock, same latency, error logged.

use super::gemini;
use super::mock;
use super::types::{AnalysisResult, SkinMode};
use crate::capture::ImagePayload;
use std::time::Duration;

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Artificial latency for the mock path, so the analyzing state is visible.
pub const MOCK_LATENCY_MS: u64 = 1500;

/// Analyze a captured image. Never fails.
///
/// `image_base64` may carry a `data:image/...;base64,` prefix; it is
/// stripped (and its media type forwarded) before the bytes go out.
pub async fn analyze(
    image_base64: &str,
    mode: SkinMode,
    medication_context: Option<&str>,
) -> AnalysisResult {
    analyze_detailed(image_base64, mode, medication_context).await.0
}

/// Like [`analyze`], but also reports why the result is mock-backed.
///
/// Returns `(result, None)` for a live remote analysis or the plain
/// no-credential mock path, and `(result, Some(reason))` when a remote
/// attempt failed and the mock stood in for it. The pipeline surfaces the
/// reason to the webview as a dismissible banner.
pub async fn analyze_detailed(
    image_base64: &str,
    mode: SkinMode,
    medication_context: Option<&str>,
) -> (AnalysisResult, Option<String>) {
    let mode = mode.effective();
    let meds = medication_context
        .map(str::trim)
        .filter(|m| !m.is_empty());

    let api_key = match std::env::var(GEMINI_API_KEY_ENV) {
        Ok(key) if !key.is_empty() => key,
        _ => {
            log::info!("[ANALYZE] No {} set — serving mock analysis", GEMINI_API_KEY_ENV);
            return (mock_after_delay(mode, meds).await, None);
        }
    };

    let image = ImagePayload::from_data_url(image_base64);
    match gemini::analyze_remote(&api_key, &image, mode, meds).await {
        Ok(result) => (enforce_medication_invariant(result, mode, meds), None),
        Err(e) => {
            log::error!("[ANALYZE] Remote analysis failed: {} — falling back to mock data", e);
            (mock_after_delay(mode, meds).await, Some(e.to_string()))
        }
    }
}

/// Sleep the fixed mock latency, then return the canned record.
async fn mock_after_delay(mode: SkinMode, medication_context: Option<&str>) -> AnalysisResult {
    tokio::time::sleep(Duration::from_millis(MOCK_LATENCY_MS)).await;
    mock::mock_analysis(mode, medication_context)
}

/// The model sometimes populates `medicationAnalysis` even when it was told
/// not to. Strip it unless the medication monitor actually ran with a list.
fn enforce_medication_invariant(
    mut result: AnalysisResult,
    mode: SkinMode,
    medication_context: Option<&str>,
) -> AnalysisResult {
    if !(mode == SkinMode::MedicationMonitor && medication_context.is_some()) {
        result.medication_analysis = None;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::MedicationAnalysis;

    fn result_with_meds() -> AnalysisResult {
        let mut r = mock::mock_analysis(SkinMode::AcneDetective, None);
        r.medication_analysis = Some(MedicationAnalysis {
            analyzed_medications: vec!["Accutane".to_string()],
            impact_summary: "test".to_string(),
            side_effect_matches: vec![],
            contraindications: vec![],
        });
        r
    }

    #[test]
    fn invariant_strips_unrequested_medication_analysis() {
        let stripped =
            enforce_medication_invariant(result_with_meds(), SkinMode::AcneDetective, None);
        assert!(stripped.medication_analysis.is_none());

        let stripped =
            enforce_medication_invariant(result_with_meds(), SkinMode::MedicationMonitor, None);
        assert!(stripped.medication_analysis.is_none());
    }

    #[test]
    fn invariant_keeps_requested_medication_analysis() {
        let kept = enforce_medication_invariant(
            result_with_meds(),
            SkinMode::MedicationMonitor,
            Some("Accutane"),
        );
        assert!(kept.medication_analysis.is_some());
    }
}
