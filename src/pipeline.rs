//! The capture-to-dashboard pipeline command.
//!
//! Multi-step orchestration: validate the image → enter the analyzing state
//! → run the analysis service → store the result (unless the user reset
//! mid-flight) → notify the webview. One analysis in flight at a time; the
//! session state machine enforces it.

use crate::analysis;
use crate::capture::ImagePayload;
use crate::session::{Session, SessionState};
use tauri::Emitter;

/// Tauri command: analyze a captured or uploaded image.
///
/// `image` is a base64 data URL from the camera canvas or the file picker.
/// Emits:
/// - "analysis-complete" with the result once it is stored
/// - "analysis-degraded" with an error message when the remote call failed
///   and mock data stood in for it
#[tauri::command]
pub async fn analyze_capture(
    app: tauri::AppHandle,
    state: tauri::State<'_, SessionState>,
    image: String,
) -> Result<Session, String> {
    let pipeline_start = std::time::Instant::now();

    // Stage 1: intake validation — reject anything that isn't an image
    // before burning a round trip on it.
    let payload = ImagePayload::from_data_url(&image);
    match payload.validate() {
        Ok((width, height)) => {
            log::info!(
                "[PIPELINE] Image accepted: {} {}x{} ({} base64 chars)",
                payload.media_type,
                width,
                height,
                payload.data.len()
            );
        }
        Err(e) => {
            let message = format!("Captured image is unusable: {}", e);
            log::warn!("[PIPELINE] {}", message);
            state.fail_analysis(&message);
            return Err(message);
        }
    }

    // Stage 2: enter the analyzing state and collect the inputs.
    let (mode, medications) = state.begin_analysis(image.clone())?;
    log::info!("[PIPELINE] Analyzing: mode={:?}, medications={}", mode, medications.is_some());

    // Stage 3: the analysis service — never fails; worst case is mock data
    // with a degradation reason attached.
    let (result, degraded) =
        analysis::analyze_detailed(&image, mode, medications.as_deref()).await;

    if let Some(reason) = degraded {
        log::warn!("[PIPELINE] Serving mock-backed result: {}", reason);
        let _ = app.emit("analysis-degraded", &reason);
    }

    // Stage 4: store, unless a reset won the race.
    if state.complete_analysis(result.clone()) {
        let _ = app.emit("analysis-complete", &result);
    } else {
        log::info!("[PIPELINE] Session was reset mid-analysis — discarding result");
    }

    log::info!(
        "[PIPELINE] Total (capture to dashboard): {}ms",
        pipeline_start.elapsed().as_millis()
    );

    Ok(state.snapshot())
}
