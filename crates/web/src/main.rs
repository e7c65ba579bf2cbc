// =============================================================================
// SkillBridge Web - WASM Entry Point
// =============================================================================
// Trunk compiles this binary and injects it into index.html.
// =============================================================================

use skillbridge_web::App;

fn main() {
    console_error_panic_hook::set_once();

    // A logger can only be installed once per page.
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting SkillBridge web...");

    leptos::mount::mount_to_body(App);
}
