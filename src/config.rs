use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

/// Wrapper-only diagnostics switches. The rendering core never reads these.
#[derive(Debug, Default, Deserialize)]
pub struct DiagnosticsConfig {
    /// Include error chains in 500 response bodies (test environments only)
    #[serde(default)]
    pub show_error_detail: bool,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join("scribe-minutes.toml"),
            r#"
[service]
name = "scribe-minutes"

[service.http]
bind = "127.0.0.1"
port = 8080
"#,
        )?;

        let cfg = Config::load(dir.path().join("scribe-minutes").to_str().unwrap())?;
        assert_eq!(cfg.service.name, "scribe-minutes");
        assert_eq!(cfg.service.http.port, 8080);
        // Omitted diagnostics section defaults off
        assert!(!cfg.diagnostics.show_error_detail);

        Ok(())
    }
}
