//! Build script for the SkinSight Tauri app.

fn main() {
    tauri_build::build();
}
