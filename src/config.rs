//! Generation service settings, baked in at build time.
//!
//! `GEMINI_API_KEY` (or `API_KEY`) authorizes requests. `GEMINI_MODEL` and
//! `GEMINI_ENDPOINT` override the defaults below.

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

impl GeneratorConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("GEMINI_API_KEY").or(option_env!("API_KEY")),
            option_env!("GEMINI_MODEL"),
            option_env!("GEMINI_ENDPOINT"),
        )
    }

    fn from_values(api_key: Option<&str>, model: Option<&str>, endpoint: Option<&str>) -> Self {
        fn present(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|s| !s.is_empty())
        }
        Self {
            endpoint: present(endpoint)
                .unwrap_or(DEFAULT_ENDPOINT)
                .trim_end_matches('/')
                .to_string(),
            model: present(model).unwrap_or(DEFAULT_MODEL).to_string(),
            api_key: present(api_key).map(str::to_string),
        }
    }

    pub fn request_url(&self, api_key: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, api_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_or_blank_values() {
        let cfg = GeneratorConfig::from_values(Some("  "), None, Some(""));
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.api_key, None);
    }

    #[test]
    fn request_url_joins_endpoint_model_and_key() {
        let cfg = GeneratorConfig::from_values(
            Some("k123"),
            Some("gemini-test"),
            Some("http://localhost:8080/v1/"),
        );
        assert_eq!(
            cfg.request_url("k123"),
            "http://localhost:8080/v1/models/gemini-test:generateContent?key=k123"
        );
    }
}
