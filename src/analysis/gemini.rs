//! Gemini analysis call — one non-streaming generateContent request.
//!
//! The request carries the captured image inline, a mode-specific prompt,
//! the fixed system instruction, and the response schema.
//! `responseMimeType: "application/json"` + `responseSchema` enforce valid
//! JSON, so the response text deserializes straight into `AnalysisResult`
//! with no fence stripping.
//!
//! Errors here never reach the user — the service converts every failure
//! into the mock fallback.

use super::prompts::{self, GEMINI_MODEL, SYSTEM_INSTRUCTION};
use super::types::{AnalysisResult, SkinMode};
use crate::capture::ImagePayload;
use thiserror::Error;

/// Why a remote analysis attempt failed.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Gemini API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("no analysis returned from the model")]
    EmptyResponse,
    #[error("failed to parse analysis JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Send one analysis request to Gemini.
pub async fn analyze_remote(
    api_key: &str,
    image: &ImagePayload,
    mode: SkinMode,
    medication_context: Option<&str>,
) -> Result<AnalysisResult, AnalysisError> {
    let prompt = prompts::build_prompt(mode, medication_context);

    log::info!("[ANALYZE] Model: {}", GEMINI_MODEL);
    log::info!("[ANALYZE] Mode: {:?}", mode);

    let start = std::time::Instant::now();

    // API key goes in the URL query param, not a header.
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        GEMINI_MODEL, api_key
    );

    // A hung request would pin the UI in the analyzing state; cap it and
    // let the timeout route to the mock fallback like any other failure.
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;
    let response = client
        .post(&url)
        .header("content-type", "application/json")
        .json(&serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        {
                            "inlineData": {
                                "mimeType": image.media_type,
                                "data": image.data
                            }
                        },
                        {
                            "text": prompt
                        }
                    ]
                }
            ],
            "systemInstruction": {
                "parts": [
                    {
                        "text": SYSTEM_INSTRUCTION
                    }
                ]
            },
            "generationConfig": {
                "temperature": 0.2,
                "responseMimeType": "application/json",
                "responseSchema": prompts::response_schema()
            }
        }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AnalysisError::Api { status, body });
    }

    let payload: serde_json::Value = response.json().await?;
    let text = extract_candidate_text(&payload).ok_or(AnalysisError::EmptyResponse)?;

    let result: AnalysisResult = serde_json::from_str(text.trim())?;

    log::info!("[ANALYZE] Remote analysis complete in {}ms", start.elapsed().as_millis());
    log::info!(
        "[ANALYZE] overall={}, concerns={}, recommendations={}",
        result.overall_score,
        result.concerns.len(),
        result.recommendations.len()
    );

    Ok(result)
}

/// Extract the response text from a generateContent payload.
///
/// Gemini format: candidates[0].content.parts[0].text
fn extract_candidate_text(payload: &serde_json::Value) -> Option<&str> {
    payload
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_candidate_text() {
        let payload = serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": "{\"overallScore\": 70}" } ] } }
            ]
        });
        assert_eq!(
            extract_candidate_text(&payload),
            Some("{\"overallScore\": 70}")
        );
    }

    #[test]
    fn missing_candidates_is_none() {
        let payload = serde_json::json!({ "promptFeedback": {} });
        assert_eq!(extract_candidate_text(&payload), None);
    }

    #[test]
    fn empty_parts_is_none() {
        let payload = serde_json::json!({
            "candidates": [ { "content": { "parts": [] } } ]
        });
        assert_eq!(extract_candidate_text(&payload), None);
    }
}
