// =============================================================================
// SkillBridge Web - Services
// =============================================================================

pub mod applications;
pub mod toast;

pub use applications::use_apply;
pub use toast::{Toast, Toaster};
