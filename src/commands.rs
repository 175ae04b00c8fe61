//! Simple Tauri command handlers.
//!
//! Thin wrappers that bridge frontend invoke() calls to Rust. Each command
//! does one thing: read or transition session state, derive dashboard data,
//! copy a summary, export a report.
//!
//! The multi-step analyze command lives in pipeline.rs instead.

use crate::analysis::types::SkinMode;
use crate::capture;
use crate::dashboard;
use crate::session::{Session, SessionState};

/// Tauri command: snapshot of the current session.
///
/// Called by the webview on load and after events, instead of the webview
/// keeping its own copy of the flow state.
#[tauri::command]
pub fn get_session(state: tauri::State<'_, SessionState>) -> Session {
    state.snapshot()
}

/// Tauri command: pick a mode from the landing screen.
#[tauri::command]
pub fn select_mode(
    state: tauri::State<'_, SessionState>,
    mode: SkinMode,
) -> Result<Session, String> {
    let session = state.select_mode(mode)?;
    log::info!("[SESSION] Mode selected: {:?} → {:?}", mode, session.flow);
    Ok(session)
}

/// Tauri command: store the medication list and advance to the camera.
#[tauri::command]
pub fn submit_medications(
    state: tauri::State<'_, SessionState>,
    medications: String,
) -> Result<Session, String> {
    let session = state.submit_medications(&medications)?;
    log::info!("[SESSION] Medication list stored ({} chars)", medications.len());
    Ok(session)
}

/// Tauri command: leave the camera without capturing.
///
/// The webview stops its own media tracks before calling this.
#[tauri::command]
pub fn cancel_capture(state: tauri::State<'_, SessionState>) -> Result<Session, String> {
    let session = state.cancel_capture()?;
    log::info!("[SESSION] Capture cancelled");
    Ok(session)
}

/// Tauri command: discard the current cycle and return to the landing screen.
#[tauri::command]
pub fn reset_session(state: tauri::State<'_, SessionState>) -> Session {
    log::info!("[SESSION] Reset");
    state.reset()
}

/// Tauri command: clear the transient error banner.
#[tauri::command]
pub fn dismiss_error(state: tauri::State<'_, SessionState>) -> Session {
    state.dismiss_error()
}

/// Tauri command: the synthesized trend series for the dashboard chart.
#[tauri::command]
pub fn health_trend(state: tauri::State<'_, SessionState>) -> Result<Vec<dashboard::TrendPoint>, String> {
    let result = state
        .current_result()
        .ok_or("No analysis available — capture first")?;
    Ok(dashboard::health_trend(result.overall_score))
}

/// Tauri command: side-effect matches grouped by medication.
#[tauri::command]
pub fn medication_groups(
    state: tauri::State<'_, SessionState>,
) -> Result<Vec<dashboard::MedicationEffects>, String> {
    let result = state
        .current_result()
        .ok_or("No analysis available — capture first")?;
    let analysis = result
        .medication_analysis
        .as_ref()
        .ok_or("No medication analysis in this result")?;
    Ok(dashboard::group_side_effects(analysis))
}

/// Tauri command: the UV-simulation filter for a slider intensity.
///
/// Purely visual — recomputed on every slider move, never stored.
#[tauri::command]
pub fn uv_simulation_filter(intensity: u8) -> dashboard::UvFilter {
    dashboard::uv_filter(intensity)
}

/// Tauri command: copy a plain-text report to the system clipboard.
///
/// Uses arboard for native clipboard access — works reliably
/// unlike navigator.clipboard in webview windows.
#[tauri::command]
pub fn share_summary(state: tauri::State<'_, SessionState>) -> Result<(), String> {
    let session = state.snapshot();
    let result = session
        .result
        .ok_or("No analysis available — capture first")?;
    let summary = dashboard::render_summary(&result, session.mode);

    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(&summary).map_err(|e| e.to_string())?;
    log::info!("[SHARE] Copied {} chars to clipboard", summary.len());
    Ok(())
}

/// Tauri command: write the current result as JSON to the user's Desktop.
#[tauri::command]
pub fn export_report(state: tauri::State<'_, SessionState>) -> Result<String, String> {
    let result = state
        .current_result()
        .ok_or("No analysis available — capture first")?;

    let json = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
    let desktop = dirs::desktop_dir().ok_or("Could not find Desktop directory")?;
    let path = desktop.join("skinsight-report.json");

    std::fs::write(&path, json).map_err(|e| format!("Failed to write report: {}", e))?;

    let full_path = path.to_string_lossy().to_string();
    log::info!("[EXPORT] Wrote report: {}", full_path);
    Ok(full_path)
}

/// Tauri command: read a user-chosen image file as a data URL.
///
/// The frontend shows the native open-file picker and passes the chosen
/// path here. The upload path produces the same `data:image/...;base64,`
/// shape the camera canvas does, so everything downstream is identical.
#[tauri::command]
pub fn read_photo(file_path: String) -> Result<String, String> {
    let path = std::path::Path::new(&file_path);
    let data_url = capture::file_to_data_url(path).map_err(|e| e.to_string())?;
    log::info!("[CAPTURE] Photo loaded: {}", path.display());
    Ok(data_url)
}
