//! SkinSight — Tauri application entry point.
//!
//! This is the app shell that wires together all domains and commands.
//! No business logic lives here — only module declarations, plugin
//! registration, state management, and the command registry.
//!
//! Commands are split across:
//!   - commands.rs           — simple one-step commands (session, dashboard data, share/export)
//!   - pipeline.rs           — the multi-step analyze_capture orchestration
//!   - settings_commands.rs  — credential status, key storage, connection test

pub mod analysis;
pub mod capture;
mod commands;
pub mod dashboard;
mod pipeline;
pub mod session;
pub mod settings_commands;

use session::SessionState;

/// Entry point — called by the Tauri runtime.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Load .env.local → .env from the project root.
    // Uses CARGO_MANIFEST_DIR (compile-time path to the crate root) so the
    // key is found regardless of the binary's working directory.
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));

    'env_load: for env_file in [".env.local", ".env"] {
        let path = manifest_dir.join(env_file);
        if path.exists() {
            match dotenvy::from_path(&path) {
                Ok(_) => eprintln!("[STARTUP] Loaded {}", path.display()),
                Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
            }
            break 'env_load;
        }
    }

    env_logger::init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(SessionState::new())
        .invoke_handler(tauri::generate_handler![
            // Simple commands (commands.rs)
            commands::get_session,
            commands::select_mode,
            commands::submit_medications,
            commands::cancel_capture,
            commands::reset_session,
            commands::dismiss_error,
            commands::health_trend,
            commands::medication_groups,
            commands::uv_simulation_filter,
            commands::share_summary,
            commands::export_report,
            commands::read_photo,
            // Pipeline command (pipeline.rs)
            pipeline::analyze_capture,
            // Settings commands (settings_commands.rs)
            settings_commands::get_credential_status,
            settings_commands::save_api_key,
            settings_commands::test_connection,
        ])
        .setup(|_app| {
            log::info!("SkinSight starting up");

            // Resolve the credential once so a keychain-stored key lands in
            // the env before the first analysis.
            let source = settings_commands::load_credential();
            log::info!("[STARTUP] Gemini credential: {:?}", source);

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("Error running SkinSight");
}
