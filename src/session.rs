//! Session state machine — one capture cycle at a time.
//!
//! `idle → capturing → analyzing → viewing → (reset) → idle`, with a
//! `medication-input` step before capture when the medication monitor is
//! selected. Held as Tauri managed state; every transition validates the
//! current flow so a stale webview can't corrupt the cycle. Locks are
//! short-lived and never held across an await.

use crate::analysis::types::{AnalysisResult, SkinMode};
use serde::Serialize;
use std::sync::Mutex;

/// Where the UI is in the capture cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowState {
    Idle,
    MedicationInput,
    Capturing,
    Analyzing,
    Viewing,
}

/// Snapshot of the current session, serialized to the webview as-is.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub flow: FlowState,
    pub mode: SkinMode,
    pub medication_list: String,
    pub captured_image: Option<String>,
    pub result: Option<AnalysisResult>,
    /// Transient banner message; replaced on the next capture.
    pub error: Option<String>,
}

impl Session {
    fn new() -> Self {
        Session {
            flow: FlowState::Idle,
            mode: SkinMode::Dashboard,
            medication_list: String::new(),
            captured_image: None,
            result: None,
            error: None,
        }
    }
}

/// Thread-safe session storage, managed by the Tauri runtime.
pub struct SessionState {
    session: Mutex<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState {
            session: Mutex::new(Session::new()),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.session.lock().unwrap().clone()
    }

    /// Pick a mode from the landing screen and enter the capture flow.
    ///
    /// The medication monitor detours through the medication-input step;
    /// every other mode goes straight to the camera.
    pub fn select_mode(&self, mode: SkinMode) -> Result<Session, String> {
        let mut s = self.session.lock().unwrap();
        if s.flow != FlowState::Idle {
            return Err(format!("cannot select a mode while {:?}", s.flow));
        }
        s.mode = mode;
        s.flow = if mode.wants_medications() {
            FlowState::MedicationInput
        } else {
            FlowState::Capturing
        };
        Ok(s.clone())
    }

    /// Store the medication list and move on to the camera.
    pub fn submit_medications(&self, medications: &str) -> Result<Session, String> {
        let mut s = self.session.lock().unwrap();
        if s.flow != FlowState::MedicationInput {
            return Err(format!("no medication input expected while {:?}", s.flow));
        }
        if medications.trim().is_empty() {
            return Err("medication list is empty".to_string());
        }
        s.medication_list = medications.to_string();
        s.flow = FlowState::Capturing;
        Ok(s.clone())
    }

    /// Leave the camera (or medication input) without capturing.
    ///
    /// The selected mode and any entered medications survive; only the flow
    /// returns to the landing screen.
    pub fn cancel_capture(&self) -> Result<Session, String> {
        let mut s = self.session.lock().unwrap();
        match s.flow {
            FlowState::Capturing | FlowState::MedicationInput => {
                s.flow = FlowState::Idle;
                Ok(s.clone())
            }
            other => Err(format!("nothing to cancel while {:?}", other)),
        }
    }

    /// Accept a captured image and enter the analyzing state.
    ///
    /// Returns the inputs the pipeline needs: the mode and the medication
    /// list (when one was entered).
    pub fn begin_analysis(&self, image_data_url: String) -> Result<(SkinMode, Option<String>), String> {
        let mut s = self.session.lock().unwrap();
        if s.flow != FlowState::Capturing {
            return Err(format!("no capture in progress while {:?}", s.flow));
        }
        s.captured_image = Some(image_data_url);
        s.result = None;
        s.error = None;
        s.flow = FlowState::Analyzing;

        let meds = if s.medication_list.trim().is_empty() {
            None
        } else {
            Some(s.medication_list.clone())
        };
        Ok((s.mode, meds))
    }

    /// Store a finished analysis, unless the session was reset meanwhile.
    ///
    /// Returns whether the result was kept. A reset mid-flight wins: the
    /// in-flight result is simply dropped.
    pub fn complete_analysis(&self, result: AnalysisResult) -> bool {
        let mut s = self.session.lock().unwrap();
        if s.flow != FlowState::Analyzing {
            return false;
        }
        s.result = Some(result);
        s.flow = FlowState::Viewing;
        true
    }

    /// Record an analysis-stage failure and return to the landing screen.
    pub fn fail_analysis(&self, message: &str) {
        let mut s = self.session.lock().unwrap();
        if s.flow == FlowState::Analyzing || s.flow == FlowState::Capturing {
            s.flow = FlowState::Idle;
        }
        s.error = Some(message.to_string());
    }

    /// Back to the landing screen; image, result, medications, and error
    /// are all discarded. The selected mode is kept.
    pub fn reset(&self) -> Session {
        let mut s = self.session.lock().unwrap();
        s.captured_image = None;
        s.result = None;
        s.error = None;
        s.medication_list.clear();
        s.flow = FlowState::Idle;
        s.clone()
    }

    pub fn dismiss_error(&self) -> Session {
        let mut s = self.session.lock().unwrap();
        s.error = None;
        s.clone()
    }

    /// The current result, for commands that derive dashboard data from it.
    pub fn current_result(&self) -> Option<AnalysisResult> {
        self.session.lock().unwrap().result.clone()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::mock::mock_analysis;

    #[test]
    fn plain_mode_goes_straight_to_capture() {
        let state = SessionState::new();
        let s = state.select_mode(SkinMode::AcneDetective).unwrap();
        assert_eq!(s.flow, FlowState::Capturing);
        assert_eq!(s.mode, SkinMode::AcneDetective);
    }

    #[test]
    fn medication_monitor_detours_through_input() {
        let state = SessionState::new();
        let s = state.select_mode(SkinMode::MedicationMonitor).unwrap();
        assert_eq!(s.flow, FlowState::MedicationInput);

        assert!(state.submit_medications("  ").is_err());
        let s = state.submit_medications("Accutane").unwrap();
        assert_eq!(s.flow, FlowState::Capturing);
        assert_eq!(s.medication_list, "Accutane");
    }

    #[test]
    fn full_cycle_reaches_viewing_and_resets_clean() {
        let state = SessionState::new();
        state.select_mode(SkinMode::UvRevealer).unwrap();
        let (mode, meds) = state.begin_analysis("data:image/jpeg;base64,AAAA".into()).unwrap();
        assert_eq!(mode, SkinMode::UvRevealer);
        assert!(meds.is_none());
        assert_eq!(state.snapshot().flow, FlowState::Analyzing);

        assert!(state.complete_analysis(mock_analysis(SkinMode::UvRevealer, None)));
        let s = state.snapshot();
        assert_eq!(s.flow, FlowState::Viewing);
        assert!(s.result.is_some());

        let s = state.reset();
        assert_eq!(s.flow, FlowState::Idle);
        assert!(s.captured_image.is_none());
        assert!(s.result.is_none());
        assert!(s.error.is_none());
        assert!(s.medication_list.is_empty());
    }

    #[test]
    fn reset_mid_analysis_drops_inflight_result() {
        let state = SessionState::new();
        state.select_mode(SkinMode::Dashboard).unwrap();
        state.begin_analysis("AAAA".into()).unwrap();
        state.reset();

        assert!(!state.complete_analysis(mock_analysis(SkinMode::Dashboard, None)));
        assert!(state.snapshot().result.is_none());
    }

    #[test]
    fn cancel_only_from_capture_states() {
        let state = SessionState::new();
        assert!(state.cancel_capture().is_err());

        state.select_mode(SkinMode::MoleGuardian).unwrap();
        let s = state.cancel_capture().unwrap();
        assert_eq!(s.flow, FlowState::Idle);
        assert_eq!(s.mode, SkinMode::MoleGuardian);
    }

    #[test]
    fn mode_selection_blocked_outside_idle() {
        let state = SessionState::new();
        state.select_mode(SkinMode::AcneDetective).unwrap();
        assert!(state.select_mode(SkinMode::UvRevealer).is_err());
    }
}
