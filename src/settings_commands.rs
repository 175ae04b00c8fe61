//! Settings commands and credential resolution.
//!
//! Handles:
//! - Credential lookup (GEMINI_API_KEY env var, then OS keychain)
//! - API key storage (OS keychain via keyring crate + env var)
//! - Connection testing
//!
//! Absence of a credential is not an error anywhere in the app — it routes
//! every analysis to the mock generator instead.

use crate::analysis::{self, GEMINI_API_KEY_ENV};
use serde::Serialize;

const KEYCHAIN_SERVICE: &str = "skinsight";
const KEYCHAIN_USER: &str = "gemini";

/// Where the active credential came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialSource {
    Env,
    Keychain,
    None,
}

/// Resolve the Gemini credential.
///
/// Priority: env var, then OS keychain. A keychain hit is loaded into the
/// env so the analysis service (which only reads the env var) picks it up.
pub fn load_credential() -> CredentialSource {
    if std::env::var(GEMINI_API_KEY_ENV).map(|k| !k.is_empty()).unwrap_or(false) {
        return CredentialSource::Env;
    }

    if let Ok(entry) = keyring::Entry::new(KEYCHAIN_SERVICE, KEYCHAIN_USER) {
        if let Ok(key) = entry.get_password() {
            if !key.is_empty() {
                std::env::set_var(GEMINI_API_KEY_ENV, &key);
                log::info!("[SETTINGS] Loaded Gemini key from OS keychain");
                return CredentialSource::Keychain;
            }
        }
    }

    CredentialSource::None
}

/// Credential status for the settings panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialStatus {
    pub configured: bool,
    pub source: CredentialSource,
    pub model: &'static str,
}

/// Tauri command: report whether a Gemini key is configured and from where.
#[tauri::command]
pub fn get_credential_status() -> CredentialStatus {
    let source = load_credential();
    CredentialStatus {
        configured: source != CredentialSource::None,
        source,
        model: analysis::prompts::GEMINI_MODEL,
    }
}

/// Tauri command: save the API key to the OS keychain.
#[tauri::command]
pub fn save_api_key(api_key: String) -> Result<(), String> {
    let entry = keyring::Entry::new(KEYCHAIN_SERVICE, KEYCHAIN_USER)
        .map_err(|e| format!("Keyring error: {}", e))?;
    entry
        .set_password(&api_key)
        .map_err(|e| format!("Failed to save key: {}", e))?;

    // Also set as env var so the current session picks it up immediately.
    std::env::set_var(GEMINI_API_KEY_ENV, &api_key);

    log::info!("[SETTINGS] Gemini API key saved");
    Ok(())
}

/// Tauri command: test the Gemini connection.
///
/// Sends a minimal text-only generateContent request and checks the status.
#[tauri::command]
pub async fn test_connection() -> Result<bool, String> {
    let key = std::env::var(GEMINI_API_KEY_ENV)
        .map_err(|_| format!("No {} set", GEMINI_API_KEY_ENV))?;

    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        analysis::prompts::GEMINI_MODEL,
        key
    );

    let client = reqwest::Client::new();
    let resp = client
        .post(&url)
        .header("content-type", "application/json")
        .json(&serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": "Reply with just: ok"}]}],
            "generationConfig": {"maxOutputTokens": 50}
        }))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let ok = resp.status().is_success();
    log::info!("[SETTINGS] Connection test — status: {}", resp.status());
    Ok(ok)
}
