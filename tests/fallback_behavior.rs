//! Fallback-path test: a failing remote call must degrade to the exact
//! mock result the no-credential path produces.
//!
//! Lives in its own test binary because it sets GEMINI_API_KEY — the other
//! integration tests rely on it being absent, and env vars are
//! process-global.

use skinsight_lib::analysis::{self, mock, types::SkinMode};

#[tokio::test]
async fn remote_failure_falls_back_to_identical_mock() {
    // A syntactically invalid key guarantees the remote attempt fails —
    // either the API rejects it or the request never leaves the sandbox.
    // The client's request timeout bounds the worst case.
    std::env::set_var(analysis::GEMINI_API_KEY_ENV, "invalid-key-for-tests");

    let (result, degraded) = analysis::analyze_detailed(
        "data:image/jpeg;base64,AAAA",
        SkinMode::MedicationMonitor,
        Some("Accutane, Tretinoin"),
    )
    .await;

    assert!(degraded.is_some(), "expected a degradation reason from the failed remote call");
    assert_eq!(
        result,
        mock::mock_analysis(SkinMode::MedicationMonitor, Some("Accutane, Tretinoin")),
        "fallback result must match the no-credential mock for identical input"
    );
}
