//! Settings for the server binary.
//!
//! Settings are layered with the `config` crate, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. An optional file, `rolodex.toml` by default or the path named by
//!    `ROLODEX_CONFIG` (TOML or YAML, picked by extension)
//! 3. `ROLODEX_*` environment variables, e.g. `ROLODEX_PORT=9000`

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, Map};
use rolodex_api::{DEFAULT_GREETING, ServerConfig};
use serde::Deserialize;

use crate::error::RolodexError;

/// Config file read when `ROLODEX_CONFIG` is unset. Missing is fine.
const DEFAULT_CONFIG_FILE: &str = "rolodex.toml";

/// Prefix shared by every environment override.
const ENV_PREFIX: &str = "ROLODEX";

/// Variable naming an alternative config file.
const CONFIG_PATH_VAR: &str = "ROLODEX_CONFIG";

/// Complete binary configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Address to bind (an IP literal).
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Log line format.
    pub log_format: LogFormat,
    /// Text served by `GET /hello`.
    pub greeting: String,
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per line.
    Json,
}

impl Settings {
    /// Load settings from defaults, the optional config file and the
    /// environment.
    pub fn load() -> Result<Self, RolodexError> {
        Self::layered(None)
    }

    /// Run the full layering. `env`, when given, stands in for the process
    /// environment.
    fn layered(env: Option<Map<String, String>>) -> Result<Self, RolodexError> {
        let path = config_path(env.as_ref());

        let settings = defaults()?
            .add_source(File::with_name(&path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Load settings from defaults overlaid with a TOML document.
    #[cfg(test)]
    pub fn from_toml(toml: &str) -> Result<Self, RolodexError> {
        let settings = defaults()?
            .add_source(File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// The bind settings for the HTTP server.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }
}

/// Path of the config file to layer in.
fn config_path(env: Option<&Map<String, String>>) -> String {
    let named = match env {
        Some(vars) => vars.get(CONFIG_PATH_VAR).cloned(),
        None => std::env::var(CONFIG_PATH_VAR).ok(),
    };
    named.unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_owned())
}

/// Builder pre-loaded with every default value.
fn defaults() -> Result<ConfigBuilder<DefaultState>, RolodexError> {
    let server = ServerConfig::default();
    let builder = Config::builder()
        .set_default("host", server.host)?
        .set_default("port", i64::from(server.port))?
        .set_default("log_level", "info")?
        .set_default("log_format", "pretty")?
        .set_default("greeting", DEFAULT_GREETING)?;
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Map<String, String> {
        vars.iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    #[test]
    fn empty_document_yields_defaults() {
        let settings = Settings::from_toml("").ok();
        assert_eq!(
            settings,
            Some(Settings {
                host: "0.0.0.0".to_owned(),
                port: 8080,
                log_level: "info".to_owned(),
                log_format: LogFormat::Pretty,
                greeting: DEFAULT_GREETING.to_owned(),
            })
        );
    }

    #[test]
    fn file_values_override_defaults() {
        let settings = Settings::from_toml(
            r#"
            host = "127.0.0.1"
            port = 9000
            log_format = "json"
            greeting = "Hi"
            "#,
        )
        .ok();

        assert_eq!(settings.as_ref().map(|s| s.port), Some(9000));
        assert_eq!(settings.as_ref().map(|s| s.log_format), Some(LogFormat::Json));
        assert_eq!(settings.as_ref().map(|s| s.greeting.as_str()), Some("Hi"));
        assert_eq!(settings.as_ref().map(|s| s.log_level.as_str()), Some("info"));
    }

    #[test]
    fn server_config_carries_bind_address() {
        let settings = Settings::from_toml("host = \"127.0.0.1\"\nport = 3000").ok();
        let config = settings.map(|s| s.server_config());
        assert_eq!(config.as_ref().map(|c| c.host.as_str()), Some("127.0.0.1"));
        assert_eq!(config.map(|c| c.port), Some(3000));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        assert!(matches!(
            Settings::from_toml("log_format = \"xml\""),
            Err(RolodexError::Config(_))
        ));
    }

    #[test]
    fn config_path_falls_back_to_default_file() {
        assert_eq!(config_path(Some(&env(&[]))), DEFAULT_CONFIG_FILE);
        assert_eq!(
            config_path(Some(&env(&[("ROLODEX_CONFIG", "/etc/rolodex.yaml")]))),
            "/etc/rolodex.yaml"
        );
    }

    #[test]
    fn missing_config_file_is_optional() {
        let settings = Settings::layered(Some(env(&[
            ("ROLODEX_CONFIG", "/nonexistent/rolodex-missing.toml"),
            ("ROLODEX_HOST", "127.0.0.1"),
        ])))
        .ok();

        assert_eq!(settings.as_ref().map(|s| s.host.as_str()), Some("127.0.0.1"));
        assert_eq!(settings.as_ref().map(|s| s.port), Some(8080));
        assert_eq!(settings.map(|s| s.log_format), Some(LogFormat::Pretty));
    }

    #[test]
    fn env_overrides_file_which_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("rolodex-layering-{}.toml", std::process::id()));
        let written = std::fs::write(
            &path,
            "port = 9000\nlog_format = \"json\"\ngreeting = \"From file\"\n",
        );
        assert!(written.is_ok());

        let path_str = path.to_string_lossy().into_owned();
        let settings = Settings::layered(Some(env(&[
            ("ROLODEX_CONFIG", path_str.as_str()),
            ("ROLODEX_PORT", "9100"),
            ("ROLODEX_LOG_LEVEL", "debug"),
        ])));
        let _ = std::fs::remove_file(&path);
        let settings = settings.ok();

        assert_eq!(
            settings,
            Some(Settings {
                host: "0.0.0.0".to_owned(),
                port: 9100,
                log_level: "debug".to_owned(),
                log_format: LogFormat::Json,
                greeting: "From file".to_owned(),
            })
        );
    }

    #[test]
    fn malformed_env_value_is_rejected() {
        assert!(matches!(
            Settings::layered(Some(env(&[("ROLODEX_PORT", "eighty")]))),
            Err(RolodexError::Config(_))
        ));
    }
}
