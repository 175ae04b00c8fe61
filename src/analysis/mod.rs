//! Analysis domain — the only part of the app with real logic.
//!
//! Flow: credential check → Gemini generateContent with a pinned response
//! schema → typed `AnalysisResult`, with a deterministic mock fallback on
//! any failure.
//!
//! Layout:
//!   - types.rs   — wire model shared with the webview and the schema
//!   - prompts.rs — system instruction, per-mode prompts, response schema
//!   - gemini.rs  — the remote call + error taxonomy
//!   - mock.rs    — canned per-mode records + medication synthesis
//!   - service.rs — orchestration; the never-fail `analyze` contract

mod gemini;
pub mod mock;
pub mod prompts;
mod service;
pub mod types;

pub use gemini::AnalysisError;
pub use service::{analyze, analyze_detailed, GEMINI_API_KEY_ENV, MOCK_LATENCY_MS};
pub use types::{AnalysisResult, MedicationAnalysis, SideEffectMatch, SkinMode};
