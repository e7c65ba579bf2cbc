// =============================================================================
// SkillBridge Web - Page Components
// =============================================================================
// Table of Contents:
// 1. Public Pages
// 2. Job Pages
// =============================================================================

pub mod home;
pub mod job_detail;
pub mod jobs;
pub mod login;
pub mod not_found;

pub use home::HomePage;
pub use job_detail::JobDetailPage;
pub use jobs::JobsPage;
pub use login::{RegisterPage, SignInPage};
pub use not_found::NotFoundPage;
