use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/imobiliaria-core/api/v1";
const DEFAULT_USER_AGENT: &str = concat!("imobiliaria-client/", env!("CARGO_PKG_VERSION"));
const DEFAULT_WHATSAPP_PHONE: &str = "5511923749516";

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSettings {
    /// Number used in wa.me links, digits only with country code
    pub whatsapp_phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Pages shown on each side of the current one in the pagination bar
    pub sibling_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub contact: ContactSettings,
    pub search: SearchSettings,
}

impl Settings {
    /// Load settings: built-in defaults, then the optional TOML file, then
    /// `IMOBILIARIA__SECTION__KEY` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("api.timeout_secs", 30)?
            .set_default("api.user_agent", DEFAULT_USER_AGENT)?
            .set_default("contact.whatsapp_phone", DEFAULT_WHATSAPP_PHONE)?
            .set_default("search.sibling_count", 1)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        builder
            .add_source(Environment::with_prefix("IMOBILIARIA").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.api.timeout_secs, 30);
        assert_eq!(settings.search.sibling_count, 1);
        assert!(!settings.contact.whatsapp_phone.is_empty());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "https://api.example.com/imobiliaria-core/api/v1"

[contact]
whatsapp_phone = "5511000000000"
"#
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(
            settings.api.base_url,
            "https://api.example.com/imobiliaria-core/api/v1"
        );
        assert_eq!(settings.contact.whatsapp_phone, "5511000000000");
        assert_eq!(settings.api.timeout_secs, 30);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Settings::load(Some(Path::new("/nonexistent/imobiliaria.toml"))).is_err());
    }
}
