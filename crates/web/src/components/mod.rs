// =============================================================================
// SkillBridge Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Chrome (nav, footer, logo, toasts)
// 2. Common Components
// 3. Form Components
// 4. Landing Sections
// 5. Job Components
// =============================================================================

pub mod common;
pub mod footer;
pub mod forms;
pub mod job_card;
pub mod landing;
pub mod logo;
pub mod nav;
pub mod toast_host;

pub use common::{ErrorDisplay, LoadingSpinner};
pub use footer::Footer;
pub use forms::{SelectField, TextInput};
pub use job_card::JobCard;
pub use landing::{Cta, Hero};
pub use logo::{Logo, LogoSize, LogoVariant};
pub use nav::SiteNav;
pub use toast_host::ToastHost;
