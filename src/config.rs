use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for the requisition desk
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RequisitionDeskConfig {
    /// Lifecycle engine settings
    pub workflow: WorkflowConfig,
    /// Logging settings
    pub observability: ObservabilityConfig,
    /// Seed data for the in-memory collaborators
    pub fixtures: FixturesConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Identity stamped on transitions when the caller names no actor
    pub default_actor: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level or EnvFilter directive
    pub log_level: String,
    /// Emit structured JSON instead of human-readable lines
    pub json_logs: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FixturesConfig {
    /// JSON file with tickets, agencies and TOR templates
    pub path: String,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            default_actor: "Procurement Desk".to_string(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: true,
        }
    }
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            path: "fixtures/requisitions.json".to_string(),
        }
    }
}

impl Default for RequisitionDeskConfig {
    fn default() -> Self {
        Self {
            workflow: WorkflowConfig::default(),
            observability: ObservabilityConfig::default(),
            fixtures: FixturesConfig::default(),
        }
    }
}

impl RequisitionDeskConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (requisition-desk.toml, .requisition-desk-rc)
    /// 3. Environment variables (prefixed with REQUISITION_DESK_)
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Same as [`load`](Self::load) but looks for config files under `dir`
    pub fn load_from(dir: &Path) -> Result<Self> {
        let mut builder = Config::builder();

        let toml_path = dir.join("requisition-desk.toml");
        if toml_path.exists() {
            builder = builder.add_source(File::from(toml_path));
        }

        let rc_path = dir.join(".requisition-desk-rc");
        if rc_path.exists() {
            builder = builder.add_source(File::from(rc_path).format(config::FileFormat::Toml));
        }

        // Double underscore separates sections so field names may keep theirs,
        // e.g. REQUISITION_DESK_WORKFLOW__DEFAULT_ACTOR
        builder = builder.add_source(
            Environment::with_prefix("REQUISITION_DESK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<RequisitionDeskConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = RequisitionDeskConfig::load_env_file();
        RequisitionDeskConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static RequisitionDeskConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_files_present() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = RequisitionDeskConfig::load_from(dir.path()).unwrap();
        assert_eq!(loaded.workflow, WorkflowConfig::default());
        assert_eq!(loaded.fixtures, FixturesConfig::default());
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("requisition-desk.toml"),
            "[workflow]\ndefault_actor = \"Contracts Office\"\n\n[observability]\njson_logs = false\n",
        )
        .unwrap();

        let loaded = RequisitionDeskConfig::load_from(dir.path()).unwrap();

        assert_eq!(loaded.workflow.default_actor, "Contracts Office");
        assert!(!loaded.observability.json_logs);
        assert_eq!(loaded.observability.log_level, "info");
    }

    #[test]
    fn test_save_round_trips_through_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut original = RequisitionDeskConfig::default();
        original.fixtures.path = "seed/demo.json".to_string();

        original
            .save_to_file(dir.path().join("requisition-desk.toml"))
            .unwrap();
        let loaded = RequisitionDeskConfig::load_from(dir.path()).unwrap();

        assert_eq!(loaded.fixtures.path, "seed/demo.json");
    }
}
