// =============================================================================
// SkillBridge Web - Build-Time Configuration
// =============================================================================
// Backend settings are baked in at build time (Trunk forwards the shell
// environment to rustc):
//   ENVIRONMENT        "development" targets the local Supabase stack
//   SUPABASE_URL       project URL, e.g. https://xyz.supabase.co
//   SUPABASE_ANON_KEY  public anon key sent as `apikey`
// =============================================================================

/// Local `supabase start` gateway.
const LOCAL_SUPABASE_URL: &str = "http://localhost:54321";

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub environment: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl AppConfig {
    /// Read configuration captured at compile time.
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("ENVIRONMENT"),
            option_env!("SUPABASE_URL"),
            option_env!("SUPABASE_ANON_KEY"),
        )
    }

    fn resolve(environment: Option<&str>, url: Option<&str>, anon_key: Option<&str>) -> Self {
        let environment = environment.unwrap_or("production").to_string();

        let supabase_url = match url {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ if environment == "development" => LOCAL_SUPABASE_URL.to_string(),
            _ => {
                log::warn!("SUPABASE_URL not set at build time; falling back to local stack");
                LOCAL_SUPABASE_URL.to_string()
            }
        };

        Self {
            environment,
            supabase_url,
            supabase_anon_key: anon_key.unwrap_or_default().to_string(),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_url_wins() {
        let config = AppConfig::resolve(
            Some("production"),
            Some("https://abc.supabase.co/"),
            Some("anon"),
        );
        assert_eq!(config.supabase_url, "https://abc.supabase.co");
        assert_eq!(config.supabase_anon_key, "anon");
        assert!(!config.is_development());
    }

    #[test]
    fn test_development_defaults_to_local_stack() {
        let config = AppConfig::resolve(Some("development"), None, None);
        assert_eq!(config.supabase_url, "http://localhost:54321");
        assert!(config.is_development());
        assert!(config.supabase_anon_key.is_empty());
    }
}
