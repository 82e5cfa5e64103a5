// src/config.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::site::SiteStore;
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};
use thiserror::Error;

/// Site-relative locations of the files the pipeline owns.
pub const INDEX_FILE: &str = "tools/articles-index.json";
pub const SETTINGS_FILE: &str = "tools/content-config.json";
pub const SITEMAP_REPORT_FILE: &str = "tools/sitemap-report.json";
pub const TEMPLATE_FILE: &str = "templates/article-template.html";
pub const KNOWLEDGE_PAGE: &str = "legal-knowledge.html";
pub const BACKUP_DIR: &str = "backups";

#[derive(Clone, Debug)]
pub struct AppConfig {
    base_dir: PathBuf,
    domain: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_domain() -> String {
    "https://lawyer880.com".into()
}

fn validate_domain(domain: String) -> Result<String, ConfigError> {
    let trimmed = domain.trim().trim_end_matches('/').to_string();
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(ConfigError::Invalid(format!(
            "site domain must start with http:// or https://, got `{domain}`"
        )));
    }
    Ok(trimmed)
}

impl AppConfig {
    pub fn new(base_dir: impl Into<PathBuf>, domain: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_dir: base_dir.into(),
            domain: validate_domain(domain.into())?,
        })
    }

    /// Build configuration from environment variables, falling back to the
    /// current directory and the production domain.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let base_dir = env::var("CONTENT_BASE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_base_dir());
        let domain = env::var("SITE_DOMAIN").unwrap_or_else(|_| default_domain());

        Self::new(base_dir, domain)
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        base_dir: Option<PathBuf>,
        domain: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(base_dir) = base_dir {
            self.base_dir = base_dir;
        }
        if let Some(domain) = domain {
            self.domain = validate_domain(domain)?;
        }
        Ok(self)
    }

    pub fn base_dir(&self) -> &std::path::Path {
        &self.base_dir
    }

    /// Site origin without a trailing slash.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn index_path(&self) -> PathBuf {
        self.base_dir.join(INDEX_FILE)
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join(BACKUP_DIR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoSettings {
    pub default_keywords: Vec<String>,
    pub title_suffix: String,
    /// `{topic}` is replaced with the article title.
    pub description_template: String,
}

impl Default for SeoSettings {
    fn default() -> Self {
        Self {
            default_keywords: ["法律", "律師", "法律諮詢", "不動產", "繼承"]
                .into_iter()
                .map(String::from)
                .collect(),
            title_suffix: " - 不動產繼承法律880".into(),
            description_template:
                "專業律師為您詳細解析{topic}相關法律問題，提供完整的法律諮詢服務。".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDefaults {
    pub default_sections: Vec<String>,
    pub article_length_target: u32,
    pub reading_time_target: u32,
}

impl Default for ContentDefaults {
    fn default() -> Self {
        Self {
            default_sections: ["法律概念說明", "相關法條解析", "實務案例分享", "常見問題解答", "專業建議"]
                .into_iter()
                .map(String::from)
                .collect(),
            article_length_target: 2000,
            reading_time_target: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationSettings {
    pub auto_update_sitemap: bool,
    pub auto_backup: bool,
    pub generate_social_meta: bool,
}

impl Default for AutomationSettings {
    fn default() -> Self {
        Self {
            auto_update_sitemap: true,
            auto_backup: true,
            generate_social_meta: true,
        }
    }
}

/// Operator-editable content defaults, kept in `tools/content-config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    pub seo: SeoSettings,
    pub content: ContentDefaults,
    pub automation: AutomationSettings,
}

impl ContentSettings {
    /// Read the settings file, writing the defaults when it does not exist yet.
    pub fn load_or_init(site: &dyn SiteStore) -> ApplicationResult<Self> {
        if !site.exists(SETTINGS_FILE) {
            let settings = Self::default();
            let json = serde_json::to_string_pretty(&settings)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
            site.write(SETTINGS_FILE, &json)?;
            tracing::info!(path = SETTINGS_FILE, "wrote default content settings");
            return Ok(settings);
        }

        let raw = site.read(SETTINGS_FILE)?;
        serde_json::from_str(&raw).map_err(|err| {
            ApplicationError::infrastructure(format!("invalid settings file {SETTINGS_FILE}: {err}"))
        })
    }

    pub fn description_for(&self, topic: &str) -> String {
        self.seo.description_template.replace("{topic}", topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_is_validated_and_normalized() {
        let config = AppConfig::new("/srv/site", "https://example.com/").unwrap();
        assert_eq!(config.domain(), "https://example.com");
        assert!(AppConfig::new(".", "example.com").is_err());

        let config = config
            .with_overrides(Some("/tmp/other".into()), Some("http://localhost:8000".into()))
            .unwrap();
        assert_eq!(config.base_dir(), std::path::Path::new("/tmp/other"));
        assert_eq!(config.domain(), "http://localhost:8000");
        assert!(config.index_path().ends_with("tools/articles-index.json"));
    }

    #[test]
    fn partial_settings_fill_in_defaults() {
        let settings: ContentSettings =
            serde_json::from_str(r#"{"automation": {"auto_update_sitemap": false}}"#).unwrap();
        assert!(!settings.automation.auto_update_sitemap);
        assert!(settings.automation.auto_backup);
        assert_eq!(settings.seo.default_keywords.len(), 5);
        assert_eq!(
            settings.description_for("遺囑"),
            "專業律師為您詳細解析遺囑相關法律問題，提供完整的法律諮詢服務。"
        );
    }
}
