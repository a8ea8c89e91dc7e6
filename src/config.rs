use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const CONFIG_FILE: &str = ".lintdelta.toml";

/// lintdelta configuration (loaded from .lintdelta.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintDeltaConfig {
    #[serde(default)]
    pub parse: ParseConfig,

    #[serde(default)]
    pub compare: CompareConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParseConfig {
    /// Glob patterns of reported files to leave out of summaries
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompareConfig {
    /// Only fail on ERROR-level regressions
    #[serde(default)]
    pub ignore_warnings: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "json".to_string()
}

impl LintDeltaConfig {
    /// Try to load .lintdelta.toml from the given directory or its parents
    pub fn load(start: &Path) -> Option<Self> {
        let config_path = find_config_file(start)?;
        debug!("Found config: {}", config_path.display());

        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str::<LintDeltaConfig>(&content) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    Some(config)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                    None
                }
            },
            Err(e) => {
                debug!("Could not read {}: {}", config_path.display(), e);
                None
            }
        }
    }
}

/// Walk up from `start` to find .lintdelta.toml
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let config = current.join(CONFIG_FILE);
        if config.is_file() {
            return Some(config);
        }
        if !current.pop() {
            return None;
        }
    }
}

const DEFAULT_CONFIG: &str = r#"# lintdelta configuration

[parse]
# Glob patterns of reported files to leave out of summaries
exclude = [
    "**/node_modules/**",
    "**/generated/**",
]

[compare]
# Only exit with status 1 when a worsened rule has ERROR severity
ignore_warnings = false

[output]
# Default output format: "json" or "terminal"
format = "json"
"#;

/// Create a default .lintdelta.toml in `dir`. Returns false if one exists.
pub fn init_config(dir: &Path) -> Result<bool> {
    let config_path = dir.join(CONFIG_FILE);

    if config_path.exists() {
        println!("⚠️  {} already exists in this directory", CONFIG_FILE);
        return Ok(false);
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("✅ Created {}", CONFIG_FILE);
    println!("   Edit it to customize exclusions and the CI gate.");

    Ok(true)
}
