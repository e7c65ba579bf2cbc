// =============================================================================
// SkillBridge Web - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::App;
pub use config::AppConfig;
pub use state::AppState;
