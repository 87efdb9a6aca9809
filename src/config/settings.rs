use crate::config::env_provider::EnvironmentProvider;

/// Settings for the hosted item-classification model
#[derive(Debug, Clone)]
pub struct DetectorSettings {
    /// Base URL of the generative-language API
    pub api_base: String,

    /// Model identifier used for classification calls
    pub model: String,

    /// API key; detection is reported as unconfigured when absent
    pub api_key: Option<String>,
}

/// Application settings loaded from the environment
///
/// All values have defaults except the external-service credentials,
/// which stay `None` until configured. Missing credentials do not stop
/// the server from starting; the affected endpoints report themselves
/// as unconfigured instead.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Address the HTTP server binds to
    pub bind_address: String,

    /// Public base URL advertised in the OpenAPI document
    pub public_url: String,

    pub detector: DetectorSettings,

    /// Base URL for the administrative-region reference source.
    /// The shipped frontend left this blank, so there is no default.
    pub reference_base_url: Option<String>,
}

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_PUBLIC_URL: &str = "http://localhost:3000/api";
const DEFAULT_DETECTOR_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_DETECTOR_MODEL: &str = "gemini-2.0-flash";

impl AppSettings {
    /// Load settings from the given environment provider
    pub fn from_provider(env: &dyn EnvironmentProvider) -> Self {
        let bind_address = env
            .get_var("APPLIXO_BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let public_url = env
            .get_var("APPLIXO_PUBLIC_URL")
            .unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_string());

        let detector = DetectorSettings {
            api_base: env
                .get_var("APPLIXO_DETECTOR_API_BASE")
                .unwrap_or_else(|| DEFAULT_DETECTOR_API_BASE.to_string()),
            model: env
                .get_var("APPLIXO_DETECTOR_MODEL")
                .unwrap_or_else(|| DEFAULT_DETECTOR_MODEL.to_string()),
            api_key: env.get_var("APPLIXO_DETECTOR_API_KEY"),
        };

        let reference_base_url = env
            .get_var("APPLIXO_REFERENCE_BASE_URL")
            .filter(|url| !url.trim().is_empty());

        Self {
            bind_address,
            public_url,
            detector,
            reference_base_url,
        }
    }

    /// Load settings from the system environment
    pub fn from_env() -> Self {
        Self::from_provider(&crate::config::env_provider::SystemEnvironment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env_provider::MockEnvironment;

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let settings = AppSettings::from_provider(&MockEnvironment::empty());

        assert_eq!(settings.bind_address, "0.0.0.0:3000");
        assert_eq!(settings.detector.model, "gemini-2.0-flash");
        assert!(settings.detector.api_key.is_none());
        assert!(settings.reference_base_url.is_none());
    }

    #[test]
    fn environment_values_override_defaults() {
        let env = MockEnvironment::empty().with_vars(&[
            ("APPLIXO_BIND_ADDRESS", "127.0.0.1:8080"),
            ("APPLIXO_DETECTOR_API_KEY", "test-key"),
            ("APPLIXO_REFERENCE_BASE_URL", "https://regions.example.com"),
        ]);

        let settings = AppSettings::from_provider(&env);

        assert_eq!(settings.bind_address, "127.0.0.1:8080");
        assert_eq!(settings.detector.api_key.as_deref(), Some("test-key"));
        assert_eq!(
            settings.reference_base_url.as_deref(),
            Some("https://regions.example.com")
        );
    }

    #[test]
    fn blank_reference_base_url_counts_as_unset() {
        let env = MockEnvironment::empty().with_var("APPLIXO_REFERENCE_BASE_URL", "   ");

        let settings = AppSettings::from_provider(&env);

        assert!(settings.reference_base_url.is_none());
    }
}
