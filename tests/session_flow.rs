//! End-to-end session walk: state machine + analysis service together,
//! the way the pipeline command drives them.

use skinsight_lib::analysis::{self, types::SkinMode};
use skinsight_lib::session::{FlowState, SessionState};

fn clear_credential() {
    std::env::remove_var(analysis::GEMINI_API_KEY_ENV);
}

#[tokio::test]
async fn medication_monitor_cycle_end_to_end() {
    clear_credential();
    let state = SessionState::new();

    // Landing → medication input → camera.
    let s = state.select_mode(SkinMode::MedicationMonitor).unwrap();
    assert_eq!(s.flow, FlowState::MedicationInput);
    let s = state.submit_medications("Accutane (20mg)\nTretinoin 0.05%").unwrap();
    assert_eq!(s.flow, FlowState::Capturing);

    // Capture → analyzing, with the stored inputs handed back.
    let (mode, meds) = state
        .begin_analysis("data:image/jpeg;base64,AAAA".to_string())
        .unwrap();
    assert_eq!(mode, SkinMode::MedicationMonitor);
    let meds = meds.expect("medication list should be forwarded");

    // The service never fails without a credential.
    let result = analysis::analyze("data:image/jpeg;base64,AAAA", mode, Some(meds.as_str())).await;
    let med_analysis = result
        .medication_analysis
        .as_ref()
        .expect("medication analysis expected");
    assert_eq!(
        med_analysis.analyzed_medications,
        vec!["Accutane (20mg)", "Tretinoin 0.05%"]
    );

    // Store and view.
    assert!(state.complete_analysis(result));
    let s = state.snapshot();
    assert_eq!(s.flow, FlowState::Viewing);
    assert!(s.result.is_some());

    // Reset discards everything from the cycle.
    let s = state.reset();
    assert_eq!(s.flow, FlowState::Idle);
    assert!(s.result.is_none() && s.captured_image.is_none());
    assert!(s.medication_list.is_empty());
}

#[tokio::test]
async fn reset_mid_analysis_discards_the_inflight_result() {
    clear_credential();
    let state = SessionState::new();

    state.select_mode(SkinMode::AcneDetective).unwrap();
    let (mode, _) = state.begin_analysis("AAAA".to_string()).unwrap();

    // User resets while the (mock) analysis is still sleeping.
    let pending = analysis::analyze("AAAA", mode, None);
    state.reset();
    let result = pending.await;

    assert!(!state.complete_analysis(result));
    assert_eq!(state.snapshot().flow, FlowState::Idle);
    assert!(state.snapshot().result.is_none());
}
